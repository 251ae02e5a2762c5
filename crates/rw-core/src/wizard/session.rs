use std::collections::BTreeMap;

use crate::fields::{CardType, FieldId};
use crate::ids::SessionId;
use crate::terms::TermsState;
use crate::validation::{self, ErrorMessage, StepReport, ValidationPolicy};

use super::{
    preferred_full_name, ContactInfo, PaymentInfo, RegisteredAccount, StepIndicators, Toast,
    WizardSnapshot, WizardStep,
};

/// One registration attempt.
///
/// 一次注册会话：由控制器独占修改。
///
/// Input methods are no-ops once the session is complete; only a restart
/// (a brand new session) moves it again.
#[derive(Debug, Clone)]
pub struct WizardSession {
    id: SessionId,
    step: WizardStep,
    fields: BTreeMap<FieldId, String>,
    errors: BTreeMap<FieldId, Vec<ErrorMessage>>,
    terms: TermsState,
    indicators: StepIndicators,
    primary_action_enabled: bool,
    advance_in_flight: bool,
    preferred_full_name: String,
    toast: Option<Toast>,
    confirmation: Option<String>,
    submitted: bool,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            step: WizardStep::Email,
            fields: BTreeMap::new(),
            errors: BTreeMap::new(),
            terms: TermsState::default(),
            indicators: StepIndicators::default(),
            primary_action_enabled: true,
            advance_in_flight: false,
            preferred_full_name: String::new(),
            toast: None,
            confirmation: None,
            submitted: false,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_complete(&self) -> bool {
        self.step.is_terminal()
    }

    /// Raw value as entered, `""` when never set.
    pub fn value(&self, field: FieldId) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn errors(&self, field: FieldId) -> &[ErrorMessage] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn terms(&self) -> &TermsState {
        &self.terms
    }

    pub fn indicators(&self) -> &StepIndicators {
        &self.indicators
    }

    pub fn primary_action_enabled(&self) -> bool {
        self.primary_action_enabled
    }

    pub fn advance_in_flight(&self) -> bool {
        self.advance_in_flight
    }

    pub fn preferred_full_name(&self) -> &str {
        &self.preferred_full_name
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn card_type(&self) -> Option<CardType> {
        self.value(FieldId::CardType).parse().ok()
    }

    /// Trimmed email, as used for lookups and the confirmation message.
    pub fn email(&self) -> &str {
        self.value(FieldId::EmailAddress).trim()
    }

    // ===== User input =====

    /// Stores a value and re-checks that single field.
    ///
    /// Returns `false` when the input was ignored.
    pub fn set_field(&mut self, field: FieldId, value: &str, policy: &ValidationPolicy) -> bool {
        if self.is_complete() {
            return false;
        }

        if field == FieldId::AgreedToTerms {
            let agreed = matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "true" | "on" | "yes" | "1"
            );
            return self.set_agreed(agreed);
        }

        self.fields.insert(field, value.to_string());
        if matches!(field, FieldId::FirstName | FieldId::LastName) {
            self.preferred_full_name = preferred_full_name(
                self.value(FieldId::FirstName),
                self.value(FieldId::LastName),
            );
        }

        match validation::validate(field, value, policy) {
            Some(message) => {
                self.errors.insert(field, vec![message]);
            }
            None => {
                self.errors.remove(&field);
            }
        }

        self.note_user_input();
        true
    }

    pub fn select_card_type(&mut self, card_type: CardType) -> bool {
        if self.is_complete() {
            return false;
        }
        self.fields
            .insert(FieldId::CardType, card_type.as_str().to_string());
        self.errors.remove(&FieldId::CardType);
        self.note_user_input();
        true
    }

    pub fn scroll_terms_to_end(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.terms.mark_scrolled_to_end();
        self.note_user_input();
        true
    }

    pub fn set_agreed(&mut self, agreed: bool) -> bool {
        if self.is_complete() {
            return false;
        }
        self.terms.set_agreed(agreed);
        self.note_user_input();
        true
    }

    /// Any fresh input clears the transient message and re-arms the primary
    /// action, unless a request is still outstanding.
    fn note_user_input(&mut self) {
        self.toast = None;
        if !self.advance_in_flight {
            self.primary_action_enabled = true;
        }
    }

    // ===== Controller-side mutation =====

    /// Replaces every error of `step` with the contents of `report`.
    pub fn apply_report(&mut self, step: WizardStep, report: StepReport) {
        for field in FieldId::for_step(step) {
            self.errors.remove(&field);
        }
        for (field, messages) in report.into_errors() {
            self.errors.insert(field, messages);
        }
    }

    pub fn set_step(&mut self, step: WizardStep) {
        self.step = step;
    }

    pub fn fill_indicator(&mut self, step: WizardStep) {
        self.indicators.fill(step);
    }

    pub fn clear_indicators_from(&mut self, step: WizardStep) {
        self.indicators.clear_from(step);
    }

    /// Disables the primary action and marks a request as outstanding.
    pub fn begin_request(&mut self) {
        self.primary_action_enabled = false;
        self.advance_in_flight = true;
    }

    /// Clears the outstanding request. The primary action stays disabled
    /// until new input or an explicit enable.
    pub fn finish_request(&mut self) {
        self.advance_in_flight = false;
    }

    pub fn enable_primary_action(&mut self) {
        self.advance_in_flight = false;
        self.primary_action_enabled = true;
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn contact_info(&self) -> ContactInfo {
        let middle = self.value(FieldId::MiddleName).trim();
        ContactInfo {
            first_name: self.value(FieldId::FirstName).trim().to_string(),
            middle_name: (!middle.is_empty()).then(|| middle.to_string()),
            last_name: self.value(FieldId::LastName).trim().to_string(),
            address_line1: self.value(FieldId::AddressLine1).trim().to_string(),
            postcode: self.value(FieldId::Postcode).trim().to_string(),
            city: self.value(FieldId::City).trim().to_string(),
            state: self.value(FieldId::State).trim().to_string(),
            preferred_full_name: self.preferred_full_name.clone(),
        }
    }

    pub fn payment_info(&self) -> PaymentInfo {
        let number = self.value(FieldId::CardNumber).trim();
        let last4 = number
            .char_indices()
            .rev()
            .nth(3)
            .map(|(idx, _)| &number[idx..])
            .unwrap_or(number);
        PaymentInfo {
            card_holder_name: self.value(FieldId::CardHolderName).trim().to_string(),
            card_type: self.card_type(),
            card_number_last4: last4.to_string(),
            card_expiry_month: self.value(FieldId::CardExpiryMonth).trim().to_string(),
            card_expiry_year: self.value(FieldId::CardExpiryYear).trim().to_string(),
        }
    }

    pub fn account(&self) -> RegisteredAccount {
        RegisteredAccount {
            email: self.email().to_string(),
            contact: self.contact_info(),
            payment: self.payment_info(),
        }
    }

    /// Marks the session submitted and records the confirmation message.
    pub fn confirm(&mut self) {
        self.submitted = true;
        self.confirmation = Some(self.account().confirmation_message());
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            session_id: self.id.clone(),
            step: self.step,
            errors: self.errors.clone(),
            toast: self.toast.clone(),
            indicators: self.indicators,
            primary_action_enabled: self.primary_action_enabled,
            advance_in_flight: self.advance_in_flight,
            preferred_full_name: self.preferred_full_name.clone(),
            terms: self.terms,
            submitted: self.submitted,
            confirmation: self.confirmation.clone(),
        }
    }
}
