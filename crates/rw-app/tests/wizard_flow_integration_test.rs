use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use rw_app::usecases::WizardOrchestrator;
use rw_core::config::ValidationConfig;
use rw_core::ports::{current_year, AccountRegistryPort, ClockPort, WizardEventPort};
use rw_core::wizard::RegisteredAccount;
use rw_core::{Availability, CardType, FieldId, ToastKind, WizardSnapshot, WizardStep};
use rw_infra::{InMemoryAccountRegistry, SystemClock};
use tokio::sync::{Mutex, Notify};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct RecordingEventPort {
    emitted: Mutex<Vec<WizardSnapshot>>,
}

impl RecordingEventPort {
    async fn emitted(&self) -> Vec<WizardSnapshot> {
        self.emitted.lock().await.clone()
    }
}

#[async_trait]
impl WizardEventPort for RecordingEventPort {
    async fn emit_wizard_state_changed(&self, snapshot: WizardSnapshot) {
        self.emitted.lock().await.push(snapshot);
    }
}

/// Registry whose availability lookups block until released.
struct GatedRegistry {
    inner: InMemoryAccountRegistry,
    gate: Notify,
    lookups: AtomicUsize,
}

impl GatedRegistry {
    fn new() -> Self {
        Self {
            inner: InMemoryAccountRegistry::with_seed(["adam@orikan.com"]),
            gate: Notify::new(),
            lookups: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AccountRegistryPort for GatedRegistry {
    async fn is_available(&self, email: &str) -> anyhow::Result<Availability> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.inner.is_available(email).await
    }

    async fn register(&self, account: &RegisteredAccount) -> anyhow::Result<()> {
        self.inner.register(account).await
    }
}

fn expiry_year() -> String {
    (current_year(&SystemClock) + 2).to_string()
}

fn setup() -> (
    Arc<WizardOrchestrator>,
    Arc<InMemoryAccountRegistry>,
    Arc<RecordingEventPort>,
) {
    init_tracing();
    let registry = Arc::new(InMemoryAccountRegistry::with_seed(["adam@orikan.com"]));
    let events = Arc::new(RecordingEventPort::default());
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let orchestrator = WizardOrchestrator::from_ports(
        ValidationConfig::default(),
        clock,
        registry.clone(),
        events.clone(),
    );
    (Arc::new(orchestrator), registry, events)
}

async fn complete_email_step(orchestrator: &WizardOrchestrator, email: &str) -> WizardSnapshot {
    orchestrator.set_field(FieldId::EmailAddress, email).await;
    orchestrator.set_field(FieldId::Password, "12345").await;
    orchestrator
        .set_field(FieldId::ConfirmPassword, "12345")
        .await;
    orchestrator.request_advance().await.unwrap()
}

async fn complete_contact_step(orchestrator: &WizardOrchestrator) -> WizardSnapshot {
    orchestrator.set_field(FieldId::FirstName, "John").await;
    orchestrator.set_field(FieldId::MiddleName, "Lucas").await;
    orchestrator.set_field(FieldId::LastName, "Ramsay").await;
    orchestrator
        .set_field(FieldId::AddressLine1, "500 Bourke Street")
        .await;
    orchestrator.set_field(FieldId::Postcode, "3000").await;
    orchestrator.set_field(FieldId::City, "Melbourne").await;
    orchestrator.set_field(FieldId::State, "Victoria").await;
    orchestrator.request_advance().await.unwrap()
}

async fn complete_payment_step(orchestrator: &WizardOrchestrator) -> WizardSnapshot {
    orchestrator
        .set_field(FieldId::CardHolderName, "John Halo")
        .await;
    orchestrator.select_card_type(CardType::Visa).await;
    orchestrator
        .set_field(FieldId::CardNumber, "4639259659502382")
        .await;
    orchestrator.set_field(FieldId::CardCvv, "719").await;
    orchestrator
        .set_field(FieldId::CardExpiryMonth, "August")
        .await;
    orchestrator
        .set_field(FieldId::CardExpiryYear, expiry_year())
        .await;
    orchestrator.request_advance().await.unwrap()
}

#[tokio::test]
async fn full_registration_flow_completes() {
    let (orchestrator, registry, _) = setup();

    let snapshot = complete_email_step(&orchestrator, "john@gmail.com").await;
    assert_eq!(snapshot.step, WizardStep::Contact);
    assert!(snapshot.indicators.email);

    let snapshot = complete_contact_step(&orchestrator).await;
    assert_eq!(snapshot.step, WizardStep::Payment, "{:?}", snapshot.errors);
    assert_eq!(snapshot.preferred_full_name, "John Ramsay");
    assert!(snapshot.indicators.contact);

    let snapshot = complete_payment_step(&orchestrator).await;
    assert_eq!(snapshot.step, WizardStep::Terms, "{:?}", snapshot.errors);
    assert!(snapshot.indicators.payment);

    orchestrator.scroll_terms_to_end().await;
    orchestrator.set_agreed(true).await;
    let snapshot = orchestrator.request_submit().await.unwrap();

    assert_eq!(snapshot.step, WizardStep::Complete);
    assert!(snapshot.submitted);
    assert!(snapshot.indicators.terms);
    assert_eq!(
        snapshot.confirmation.as_deref(),
        Some("Your user account john@gmail.com has been successfully registered.")
    );
    assert!(registry.contains("john@gmail.com").await);
}

#[tokio::test]
async fn registered_email_is_rejected_case_insensitively() {
    let (orchestrator, _, _) = setup();

    let snapshot = complete_email_step(&orchestrator, "Adam@Orikan.com").await;

    assert_eq!(snapshot.step, WizardStep::Email);
    assert!(!snapshot.indicators.email);
    assert!(!snapshot.primary_action_enabled);
    let toast = snapshot.toast.as_ref().expect("toast");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Email address is already registered");
    assert!(!snapshot.has_errors());
}

#[tokio::test]
async fn primary_action_is_disabled_while_check_in_flight() {
    init_tracing();
    let registry = Arc::new(GatedRegistry::new());
    let events = Arc::new(RecordingEventPort::default());
    let orchestrator = Arc::new(WizardOrchestrator::from_ports(
        ValidationConfig::default(),
        Arc::new(SystemClock),
        registry.clone(),
        events.clone(),
    ));
    orchestrator
        .set_field(FieldId::EmailAddress, "john@gmail.com")
        .await;
    orchestrator.set_field(FieldId::Password, "12345").await;
    orchestrator
        .set_field(FieldId::ConfirmPassword, "12345")
        .await;

    let first = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.request_advance().await }
    });

    // wait for the in-flight snapshot
    loop {
        let emitted = events.emitted().await;
        if emitted.last().is_some_and(|s| s.advance_in_flight) {
            let in_flight = emitted.last().unwrap();
            assert!(!in_flight.primary_action_enabled);
            assert_eq!(in_flight.step, WizardStep::Email);
            break;
        }
        tokio::task::yield_now().await;
    }
    assert!(orchestrator.snapshot().await.advance_in_flight);

    let second = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.request_advance().await }
    });
    tokio::task::yield_now().await;

    registry.gate.notify_one();
    let snapshot = first.await.unwrap().unwrap();
    assert_eq!(snapshot.step, WizardStep::Contact);

    // the queued request ran against the contact step and failed validation
    let snapshot = second.await.unwrap().unwrap();
    assert_eq!(snapshot.step, WizardStep::Contact);
    assert_eq!(registry.lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn whitespace_contact_step_never_advances() {
    let (orchestrator, _, _) = setup();
    complete_email_step(&orchestrator, "john@gmail.com").await;

    for field in [
        FieldId::FirstName,
        FieldId::MiddleName,
        FieldId::LastName,
        FieldId::AddressLine1,
        FieldId::Postcode,
        FieldId::City,
    ] {
        orchestrator.set_field(field, " ").await;
    }
    orchestrator.set_field(FieldId::State, "Tasmania").await;
    let snapshot = orchestrator.request_advance().await.unwrap();

    assert_eq!(snapshot.step, WizardStep::Contact);
    assert!(!snapshot.indicators.contact);
    assert!(snapshot.primary_action_enabled);
    assert_eq!(snapshot.error(FieldId::FirstName), Some("First Name is required"));
    assert_eq!(snapshot.error(FieldId::Postcode), Some("Postcode is required"));
    assert_eq!(snapshot.error(FieldId::MiddleName), None);
    assert_eq!(snapshot.preferred_full_name, "");
}

#[tokio::test]
async fn empty_payment_step_shows_every_required_error() {
    let (orchestrator, _, _) = setup();
    complete_email_step(&orchestrator, "john@gmail.com").await;
    complete_contact_step(&orchestrator).await;

    let snapshot = orchestrator.request_advance().await.unwrap();

    assert_eq!(snapshot.step, WizardStep::Payment);
    let payment_errors = FieldId::for_step(WizardStep::Payment)
        .filter(|field| snapshot.error(*field).is_some())
        .count();
    assert_eq!(payment_errors, 6);
}

#[tokio::test]
async fn terms_gate_checks_scroll_before_agreement() {
    let (orchestrator, registry, _) = setup();
    complete_email_step(&orchestrator, "john@gmail.com").await;
    complete_contact_step(&orchestrator).await;
    complete_payment_step(&orchestrator).await;

    orchestrator.set_agreed(true).await;
    let snapshot = orchestrator.request_submit().await.unwrap();
    assert_eq!(snapshot.step, WizardStep::Terms);
    assert_eq!(
        snapshot.error(FieldId::AgreedToTerms),
        Some("You must first read all the terms and conditions before submitting")
    );

    orchestrator.set_agreed(false).await;
    orchestrator.scroll_terms_to_end().await;
    let snapshot = orchestrator.request_submit().await.unwrap();
    assert_eq!(
        snapshot.error(FieldId::AgreedToTerms),
        Some("You must agree to these terms and conditions before submitting")
    );
    assert!(!snapshot.submitted);
    assert!(!registry.contains("john@gmail.com").await);
}

#[tokio::test]
async fn back_navigation_keeps_entered_values() {
    let (orchestrator, _, _) = setup();
    complete_email_step(&orchestrator, "john@gmail.com").await;
    complete_contact_step(&orchestrator).await;

    let snapshot = orchestrator.request_back().await.unwrap();
    assert_eq!(snapshot.step, WizardStep::Contact);
    assert!(snapshot.primary_action_enabled);

    // values survive: advancing again passes without re-entry
    let snapshot = orchestrator.request_advance().await.unwrap();
    assert_eq!(snapshot.step, WizardStep::Payment);
    assert_eq!(snapshot.preferred_full_name, "John Ramsay");
}

#[tokio::test]
async fn back_navigation_unfills_the_revisited_step() {
    let (orchestrator, _, _) = setup();
    complete_email_step(&orchestrator, "john@gmail.com").await;

    let snapshot = orchestrator.request_back().await.unwrap();
    assert_eq!(snapshot.step, WizardStep::Email);
    assert!(!snapshot.indicators.is_filled(WizardStep::Email));

    let snapshot = complete_email_step(&orchestrator, "Adam@Orikan.com").await;
    assert_eq!(snapshot.step, WizardStep::Email);
    assert_eq!(
        snapshot.toast.map(|t| t.message),
        Some("Email address is already registered".to_string())
    );
    assert!(!snapshot.indicators.is_filled(WizardStep::Email));

    orchestrator.set_field(FieldId::EmailAddress, "").await;
    let snapshot = orchestrator.request_advance().await.unwrap();
    assert_eq!(snapshot.step, WizardStep::Email);
    assert_eq!(
        snapshot.error(FieldId::EmailAddress),
        Some("Email Address is required")
    );
    assert!(!snapshot.indicators.is_filled(WizardStep::Email));
}

#[tokio::test]
async fn back_from_terms_keeps_earlier_indicators() {
    let (orchestrator, _, _) = setup();
    complete_email_step(&orchestrator, "john@gmail.com").await;
    complete_contact_step(&orchestrator).await;
    complete_payment_step(&orchestrator).await;

    let snapshot = orchestrator.request_back().await.unwrap();
    assert_eq!(snapshot.step, WizardStep::Payment);
    assert!(snapshot.indicators.is_filled(WizardStep::Email));
    assert!(snapshot.indicators.is_filled(WizardStep::Contact));
    assert!(!snapshot.indicators.is_filled(WizardStep::Payment));

    let snapshot = orchestrator.request_advance().await.unwrap();
    assert_eq!(snapshot.step, WizardStep::Terms);
    assert!(snapshot.indicators.is_filled(WizardStep::Payment));
}

#[tokio::test]
async fn completed_session_only_accepts_restart() {
    let (orchestrator, _, _) = setup();
    complete_email_step(&orchestrator, "john@gmail.com").await;
    complete_contact_step(&orchestrator).await;
    complete_payment_step(&orchestrator).await;
    orchestrator.scroll_terms_to_end().await;
    orchestrator.set_agreed(true).await;
    let done = orchestrator.request_submit().await.unwrap();
    assert_eq!(done.step, WizardStep::Complete);

    let snapshot = orchestrator
        .set_field(FieldId::EmailAddress, "other@gmail.com")
        .await;
    assert_eq!(snapshot, done);
    assert_eq!(orchestrator.request_back().await.unwrap().step, WizardStep::Complete);
    assert_eq!(orchestrator.request_advance().await.unwrap(), done);

    let fresh = orchestrator.restart().await.unwrap();
    assert_eq!(fresh.step, WizardStep::Email);
    assert!(!fresh.submitted);
    assert!(!fresh.indicators.email);
    assert_ne!(fresh.session_id, done.session_id);

    // the account now exists, so the same email is taken
    let snapshot = complete_email_step(&orchestrator, "JOHN@gmail.com").await;
    assert_eq!(snapshot.step, WizardStep::Email);
    assert_eq!(
        snapshot.toast.map(|t| t.message),
        Some("Email address is already registered".to_string())
    );
}
