use crate::config::ValidationConfig;

pub const DEFAULT_POSTCODE_LENGTH: usize = 4;
pub const DEFAULT_EXPIRY_YEAR_HORIZON: u16 = 20;

/// Tunables the rules read, resolved for one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub postcode_length: usize,
    pub expiry_year_horizon: u16,
    pub current_year: i32,
}

impl ValidationPolicy {
    pub fn new(config: &ValidationConfig, current_year: i32) -> Self {
        Self {
            postcode_length: config.postcode_length,
            expiry_year_horizon: config.expiry_year_horizon,
            current_year,
        }
    }

    pub fn with_current_year(current_year: i32) -> Self {
        Self::new(&ValidationConfig::default(), current_year)
    }
}
