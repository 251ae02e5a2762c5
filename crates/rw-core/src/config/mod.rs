//! Wizard configuration DTO.
//!
//! Maps a TOML document onto plain data. Missing keys fall back to the
//! documented defaults; values are taken as they are otherwise, with no
//! range checks.

use serde::{Deserialize, Serialize};

use crate::validation::{DEFAULT_EXPIRY_YEAR_HORIZON, DEFAULT_POSTCODE_LENGTH};

/// Email pre-registered in a fresh registry.
pub const DEFAULT_SEEDED_EMAIL: &str = "adam@orikan.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    pub validation: ValidationConfig,
    pub registry: RegistryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Exact number of digits a postcode must have.
    pub postcode_length: usize,
    /// How many years past the current one a card may expire.
    pub expiry_year_horizon: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Emails treated as already registered when the registry starts.
    pub seeded_emails: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            postcode_length: DEFAULT_POSTCODE_LENGTH,
            expiry_year_horizon: DEFAULT_EXPIRY_YEAR_HORIZON,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            seeded_emails: vec![DEFAULT_SEEDED_EMAIL.to_string()],
        }
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl WizardConfig {
    pub fn with_defaults() -> Self {
        Self {
            validation: ValidationConfig::default(),
            registry: RegistryConfig::default(),
        }
    }

    /// Create WizardConfig from a TOML value.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::with_defaults();
        let validation = toml_value.get("validation");
        let registry = toml_value.get("registry");

        let seeded_emails = match registry.and_then(|r| r.get("seeded_emails")) {
            Some(value) => value
                .as_array()
                .ok_or_else(|| anyhow::anyhow!("registry.seeded_emails must be an array"))?
                .iter()
                .map(|entry| {
                    entry.as_str().map(str::to_string).ok_or_else(|| {
                        anyhow::anyhow!("registry.seeded_emails entries must be strings")
                    })
                })
                .collect::<anyhow::Result<Vec<_>>>()?,
            None => defaults.registry.seeded_emails,
        };

        Ok(Self {
            validation: ValidationConfig {
                postcode_length: validation
                    .and_then(|v| v.get("postcode_length"))
                    .and_then(|v| v.as_integer())
                    .map(|v| v as usize)
                    .unwrap_or(defaults.validation.postcode_length),
                expiry_year_horizon: validation
                    .and_then(|v| v.get("expiry_year_horizon"))
                    .and_then(|v| v.as_integer())
                    .map(|v| v as u16)
                    .unwrap_or(defaults.validation.expiry_year_horizon),
            },
            registry: RegistryConfig { seeded_emails },
        })
    }
}
