// Tour package booking wizard
// Two editing steps, a submitting state, and a terminal confirmation

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const TAX_RATE_PERCENT: u64 = 10;
pub const MAX_PARTICIPANTS: u8 = 4;
pub const REFERENCE_CODE_LEN: usize = 6;
pub const DEFAULT_SUBMISSION_DELAY_MS: u64 = 2000;

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Participants must be between 1 and {max}, got {got}")]
    InvalidParticipants { got: u8, max: u8 },

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("Booking already confirmed")]
    AlreadyConfirmed,

    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Submission timed out after {0}ms")]
    SubmissionTimeout(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageId {
    Coastal,
    Alpine,
    Grand,
}

impl PackageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageId::Coastal => "coastal",
            PackageId::Alpine => "alpine",
            PackageId::Grand => "grand",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        PACKAGES
            .iter()
            .find(|p| p.id.as_str() == value)
            .map(|p| p.id)
    }

    // Value of the booking link's `package` query parameter; anything unknown means the first package
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or(PACKAGES[0].id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub id: PackageId,
    pub name: &'static str,
    pub price: u64,
    pub duration: &'static str,
}

pub static PACKAGES: [Package; 3] = [
    Package {
        id: PackageId::Coastal,
        name: "Coastal Cruiser",
        price: 1299,
        duration: "1 Day",
    },
    Package {
        id: PackageId::Alpine,
        name: "Alpine Adrenaline",
        price: 2499,
        duration: "Weekend",
    },
    Package {
        id: PackageId::Grand,
        name: "Grand Tourer",
        price: 5999,
        duration: "5 Days",
    },
];

pub fn package(id: PackageId) -> &'static Package {
    PACKAGES.iter().find(|p| p.id == id).unwrap_or(&PACKAGES[0])
}

// Price breakdown shown on step 2; amounts in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSummary {
    pub base_cents: u64,
    pub tax_cents: u64,
    pub total_cents: u64,
}

impl PriceSummary {
    pub fn for_package(package: &Package) -> Self {
        let base_cents = package.price * 100;
        let tax_cents = base_cents * TAX_RATE_PERCENT / 100;
        Self {
            base_cents,
            tax_cents,
            total_cents: base_cents + tax_cents,
        }
    }

    // Display values truncate to whole currency units. The site itself rounds
    // to nearest, which shows tax 250 and total 2749 for a 2499 package
    pub fn base(&self) -> u64 {
        self.base_cents / 100
    }

    pub fn tax(&self) -> u64 {
        self.tax_cents / 100
    }

    pub fn total(&self) -> u64 {
        self.total_cents / 100
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDetails {
    pub start_date: Option<NaiveDate>,
    pub participants: u8,
}

impl Default for TripDetails {
    fn default() -> Self {
        Self {
            start_date: None,
            participants: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ContactDetails {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }

    fn validate(&self) -> Result<(), BookingError> {
        if self.first_name.trim().is_empty() {
            return Err(BookingError::MissingField("first_name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(BookingError::MissingField("last_name"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(BookingError::MissingField("email"));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(BookingError::InvalidEmail(email.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub package: PackageId,
    pub trip: TripDetails,
    pub contact: ContactDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub package: PackageId,
    pub trip: TripDetails,
    pub contact: ContactDetails,
    pub summary: PriceSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub reference: String,
}

impl BookingConfirmation {
    pub fn display_reference(&self) -> String {
        format!("#ADV-{}", self.reference)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    Selection,
    Details,
    Submitting,
    Confirmed(BookingConfirmation),
}

impl WizardState {
    fn label(&self) -> &'static str {
        match self {
            WizardState::Selection => "selecting a package",
            WizardState::Details => "entering details",
            WizardState::Submitting => "submitting",
            WizardState::Confirmed(_) => "confirmed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct WizardConfig {
    // Off by default: step 1 only moves forward on "Continue"
    pub require_start_date: bool,
    pub submission_timeout: Duration,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            require_start_date: false,
            submission_timeout: Duration::from_secs(30),
        }
    }
}

// Receives a completed booking; the real backend sits behind this
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    async fn submit(&self, request: &BookingRequest) -> Result<BookingConfirmation, BookingError>;
}

// Stands in for the backend: waits, then always confirms with a random reference
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SUBMISSION_DELAY_MS))
    }
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl BookingSubmitter for SimulatedSubmitter {
    async fn submit(&self, request: &BookingRequest) -> Result<BookingConfirmation, BookingError> {
        debug!(
            "Simulating booking for {} ({}ms)",
            request.package.as_str(),
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        Ok(BookingConfirmation {
            reference: generate_reference(),
        })
    }
}

// Six uppercase alphanumerics; not unique and not persisted
pub fn generate_reference() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(REFERENCE_CODE_LEN)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect()
}

pub struct BookingWizard {
    draft: BookingDraft,
    state: WizardState,
    config: WizardConfig,
}

impl BookingWizard {
    pub fn new(initial_package: PackageId, config: WizardConfig) -> Self {
        Self {
            draft: BookingDraft {
                package: initial_package,
                trip: TripDetails::default(),
                contact: ContactDetails::default(),
            },
            state: WizardState::Selection,
            config,
        }
    }

    pub fn from_query(package_param: Option<&str>) -> Self {
        Self::new(PackageId::from_query(package_param), WizardConfig::default())
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    // 1 while selecting, 2 from the details step onward
    pub fn step(&self) -> u8 {
        match self.state {
            WizardState::Selection => 1,
            _ => 2,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == WizardState::Submitting
    }

    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        match &self.state {
            WizardState::Confirmed(confirmation) => Some(confirmation),
            _ => None,
        }
    }

    pub fn package(&self) -> &'static Package {
        package(self.draft.package)
    }

    pub fn summary(&self) -> PriceSummary {
        PriceSummary::for_package(self.package())
    }

    fn ensure_editable(&self, action: &'static str) -> Result<(), BookingError> {
        match self.state {
            WizardState::Selection | WizardState::Details => Ok(()),
            WizardState::Confirmed(_) => Err(BookingError::AlreadyConfirmed),
            WizardState::Submitting => Err(BookingError::InvalidTransition {
                action,
                state: self.state.label(),
            }),
        }
    }

    fn ensure_state(&self, expected: &WizardState, action: &'static str) -> Result<(), BookingError> {
        if let WizardState::Confirmed(_) = self.state {
            return Err(BookingError::AlreadyConfirmed);
        }
        if &self.state != expected {
            return Err(BookingError::InvalidTransition {
                action,
                state: self.state.label(),
            });
        }
        Ok(())
    }

    pub fn select_package(&mut self, id: PackageId) -> Result<(), BookingError> {
        self.ensure_editable("select a package")?;
        self.draft.package = id;
        Ok(())
    }

    pub fn set_start_date(&mut self, date: NaiveDate) -> Result<(), BookingError> {
        self.ensure_editable("set the start date")?;
        self.draft.trip.start_date = Some(date);
        Ok(())
    }

    pub fn set_participants(&mut self, participants: u8) -> Result<(), BookingError> {
        self.ensure_editable("set participants")?;
        if participants == 0 || participants > MAX_PARTICIPANTS {
            return Err(BookingError::InvalidParticipants {
                got: participants,
                max: MAX_PARTICIPANTS,
            });
        }
        self.draft.trip.participants = participants;
        Ok(())
    }

    pub fn set_contact(&mut self, contact: ContactDetails) -> Result<(), BookingError> {
        self.ensure_editable("edit contact details")?;
        self.draft.contact = contact;
        Ok(())
    }

    // Step 1 -> step 2
    pub fn continue_to_details(&mut self) -> Result<(), BookingError> {
        self.ensure_state(&WizardState::Selection, "continue")?;
        if self.config.require_start_date && self.draft.trip.start_date.is_none() {
            return Err(BookingError::MissingField("start_date"));
        }
        self.state = WizardState::Details;
        Ok(())
    }

    // Step 2 -> step 1, keeping every entered value
    pub fn back(&mut self) -> Result<(), BookingError> {
        self.ensure_state(&WizardState::Details, "go back")?;
        self.state = WizardState::Selection;
        Ok(())
    }

    // Validates step 2 and enters the loading state
    pub fn begin_submission(&mut self) -> Result<BookingRequest, BookingError> {
        self.ensure_state(&WizardState::Details, "submit")?;
        self.draft.contact.validate()?;

        self.state = WizardState::Submitting;
        Ok(BookingRequest {
            package: self.draft.package,
            trip: self.draft.trip.clone(),
            contact: self.draft.contact.clone(),
            summary: self.summary(),
        })
    }

    // Applies the submission outcome.
    //
    // Outcomes that arrive when no submission is pending are ignored and
    // `Ok(None)` is returned. A failed submission returns the wizard to the
    // details step with the draft intact.
    pub fn finish_submission(
        &mut self,
        outcome: Result<BookingConfirmation, BookingError>,
    ) -> Result<Option<&BookingConfirmation>, BookingError> {
        if self.state != WizardState::Submitting {
            debug!("Ignoring submission outcome while {}", self.state.label());
            return Ok(None);
        }

        match outcome {
            Ok(confirmation) => {
                info!(
                    "Booking confirmed for {} as {}",
                    self.draft.package.as_str(),
                    confirmation.reference
                );
                self.state = WizardState::Confirmed(confirmation);
                Ok(self.confirmation())
            }
            Err(e) => {
                warn!("Booking submission failed: {}", e);
                self.state = WizardState::Details;
                Err(e)
            }
        }
    }

    // Dropping the returned future before it resolves leaves the wizard in the loading state;
    // `reset_loading` recovers it
    pub async fn submit(
        &mut self,
        submitter: &dyn BookingSubmitter,
    ) -> Result<BookingConfirmation, BookingError> {
        let request = self.begin_submission()?;
        let timeout = self.config.submission_timeout;

        let outcome = match tokio::time::timeout(timeout, submitter.submit(&request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(BookingError::SubmissionTimeout(timeout.as_millis() as u64)),
        };

        self.finish_submission(outcome)?;
        match self.confirmation() {
            Some(confirmation) => Ok(confirmation.clone()),
            None => Err(BookingError::InvalidTransition {
                action: "confirm",
                state: self.state.label(),
            }),
        }
    }

    // Abandons a pending submission; a late outcome is then ignored
    pub fn reset_loading(&mut self) {
        if self.state == WizardState::Submitting {
            self.state = WizardState::Details;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    struct RejectingSubmitter;

    #[async_trait]
    impl BookingSubmitter for RejectingSubmitter {
        async fn submit(&self, _request: &BookingRequest) -> Result<BookingConfirmation, BookingError> {
            Err(BookingError::SubmissionFailed("card declined".to_string()))
        }
    }

    fn is_reference_code(code: &str) -> bool {
        code.len() == REFERENCE_CODE_LEN
            && code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }

    fn filled_wizard(package_param: Option<&str>) -> BookingWizard {
        let mut wizard = BookingWizard::from_query(package_param);
        wizard
            .set_start_date(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap())
            .unwrap();
        wizard.set_participants(2).unwrap();
        wizard.continue_to_details().unwrap();
        wizard
            .set_contact(ContactDetails::new("John", "Doe", "john@example.com"))
            .unwrap();
        wizard
    }

    #[test]
    fn test_unknown_or_missing_package_defaults_to_first() {
        assert_eq!(BookingWizard::from_query(None).draft().package, PackageId::Coastal);
        assert_eq!(
            BookingWizard::from_query(Some("lunar")).draft().package,
            PackageId::Coastal
        );
        assert_eq!(
            BookingWizard::from_query(Some("ALPINE")).draft().package,
            PackageId::Coastal
        );
    }

    #[test]
    fn test_alpine_query_parameter() {
        let wizard = BookingWizard::from_query(Some("alpine"));
        assert_eq!(wizard.package().name, "Alpine Adrenaline");
        assert_eq!(wizard.package().price, 2499);

        let summary = wizard.summary();
        assert_eq!(summary.total_cents, 274_890);
        assert_eq!(summary.base(), 2499);
        assert_eq!(summary.tax(), 249);
        assert_eq!(summary.total(), 2748);
    }

    #[test]
    fn test_summary_for_every_package() {
        for package in PACKAGES.iter() {
            let summary = PriceSummary::for_package(package);
            assert_eq!(summary.total_cents, package.price * 110);
        }
    }

    #[test]
    fn test_continue_without_date_is_allowed_by_default() {
        let mut wizard = BookingWizard::from_query(None);
        assert_ok!(wizard.continue_to_details());
        assert_eq!(wizard.step(), 2);
    }

    #[test]
    fn test_strict_config_requires_date() {
        let config = WizardConfig {
            require_start_date: true,
            ..Default::default()
        };
        let mut wizard = BookingWizard::new(PackageId::Grand, config);

        assert_eq!(
            wizard.continue_to_details(),
            Err(BookingError::MissingField("start_date"))
        );
        assert_eq!(wizard.step(), 1);

        wizard
            .set_start_date(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
            .unwrap();
        assert_ok!(wizard.continue_to_details());
    }

    #[test]
    fn test_back_and_forward_preserves_draft() {
        let mut wizard = filled_wizard(Some("grand"));
        let before = wizard.draft().clone();

        wizard.back().unwrap();
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.draft(), &before);

        wizard.continue_to_details().unwrap();
        assert_eq!(wizard.draft(), &before);
    }

    #[test]
    fn test_participants_range() {
        let mut wizard = BookingWizard::from_query(None);
        assert_err!(wizard.set_participants(0));
        assert_eq!(
            wizard.set_participants(5),
            Err(BookingError::InvalidParticipants { got: 5, max: 4 })
        );
        assert_ok!(wizard.set_participants(4));
        assert_eq!(wizard.draft().trip.participants, 4);
    }

    #[test]
    fn test_back_from_step_one_is_rejected() {
        let mut wizard = BookingWizard::from_query(None);
        assert!(matches!(
            wizard.back(),
            Err(BookingError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_submission_requires_contact_fields() {
        let mut wizard = BookingWizard::from_query(None);
        wizard.continue_to_details().unwrap();

        assert_eq!(
            wizard.begin_submission(),
            Err(BookingError::MissingField("first_name"))
        );

        wizard
            .set_contact(ContactDetails::new("John", "Doe", "john.example.com"))
            .unwrap();
        assert!(matches!(
            wizard.begin_submission(),
            Err(BookingError::InvalidEmail(_))
        ));
        assert!(!wizard.is_loading());
    }

    #[test]
    fn test_loading_state_between_begin_and_finish() {
        let mut wizard = filled_wizard(None);

        let request = wizard.begin_submission().unwrap();
        assert!(wizard.is_loading());
        assert_eq!(request.trip.participants, 2);
        assert!(wizard.set_participants(3).is_err());

        let confirmation = BookingConfirmation {
            reference: "AB12CD".to_string(),
        };
        let confirmed = wizard.finish_submission(Ok(confirmation)).unwrap();
        assert_eq!(confirmed.unwrap().display_reference(), "#ADV-AB12CD");
        assert!(!wizard.is_loading());
    }

    #[test]
    fn test_late_outcome_after_reset_is_ignored() {
        let mut wizard = filled_wizard(None);
        wizard.begin_submission().unwrap();
        wizard.reset_loading();

        let outcome = Ok(BookingConfirmation {
            reference: "ZZZZZZ".to_string(),
        });
        assert_eq!(wizard.finish_submission(outcome), Ok(None));
        assert_eq!(wizard.state(), &WizardState::Details);
    }

    #[tokio::test]
    async fn test_simulated_submission_confirms() {
        let mut wizard = filled_wizard(Some("alpine"));
        let submitter = SimulatedSubmitter::new(Duration::from_millis(10));

        let confirmation = wizard.submit(&submitter).await.unwrap();
        assert!(is_reference_code(&confirmation.reference));
        assert_eq!(wizard.confirmation(), Some(&confirmation));

        // Terminal
        assert_eq!(
            wizard.select_package(PackageId::Grand),
            Err(BookingError::AlreadyConfirmed)
        );
        assert_eq!(wizard.back(), Err(BookingError::AlreadyConfirmed));
    }

    #[tokio::test]
    async fn test_default_submitter_waits_two_seconds() {
        tokio::time::pause();
        let mut wizard = filled_wizard(None);
        let submitter = SimulatedSubmitter::default();

        let started = tokio::time::Instant::now();
        wizard.submit(&submitter).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(DEFAULT_SUBMISSION_DELAY_MS));
    }

    #[tokio::test]
    async fn test_rejected_submission_returns_to_details() {
        let mut wizard = filled_wizard(None);
        let before = wizard.draft().clone();

        let result = wizard.submit(&RejectingSubmitter).await;
        assert_eq!(
            result,
            Err(BookingError::SubmissionFailed("card declined".to_string()))
        );
        assert_eq!(wizard.state(), &WizardState::Details);
        assert_eq!(wizard.draft(), &before);
    }

    #[tokio::test]
    async fn test_submission_timeout() {
        let config = WizardConfig {
            submission_timeout: Duration::from_millis(20),
            ..Default::default()
        };
        let mut wizard = BookingWizard::new(PackageId::Coastal, config);
        wizard.continue_to_details().unwrap();
        wizard
            .set_contact(ContactDetails::new("Ana", "Silva", "ana@example.com"))
            .unwrap();

        let slow = SimulatedSubmitter::new(Duration::from_secs(5));
        let result = wizard.submit(&slow).await;
        assert_eq!(result, Err(BookingError::SubmissionTimeout(20)));
        assert_eq!(wizard.step(), 2);
        assert!(!wizard.is_loading());
    }

    #[test]
    fn test_generated_references_match_pattern() {
        for _ in 0..200 {
            assert!(is_reference_code(&generate_reference()));
        }
    }
}
