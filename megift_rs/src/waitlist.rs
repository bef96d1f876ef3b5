//! Waitlist sign-up form.
//!
//! The form is a small state machine:
//!
//! ```text
//! Idle --begin_submit (valid)--> Pending --complete Ok--> Submitted --dismiss--> Idle
//!   ^            |                   |
//!   |      (invalid: error set)      +--complete Err--> Idle (error set)
//!   +------------+
//! ```
//!
//! Timing is owned by the caller: the landing page waits the configured
//! submit delay between [`WaitlistForm::begin_submit`] and
//! [`WaitlistForm::complete_submit`], then schedules
//! [`WaitlistForm::dismiss_success`].

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Message shown once a lead has been accepted.
pub const SUCCESS_MESSAGE: &str = "Obrigado! Seu cadastro foi realizado com sucesso.";

/// `local-part@domain.tld` with no whitespace and a single `@`.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Everything that can go wrong with a sign-up.
///
/// The `Display` output is the exact message rendered above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WaitlistError {
    /// Name or email is empty after trimming.
    #[error("Por favor, preencha todos os campos.")]
    MissingFields,
    /// Email does not look like `local@domain.tld`.
    #[error("Por favor, insira um email válido.")]
    InvalidEmail,
    /// The sink refused the lead.
    #[error("Ocorreu um erro. Tente novamente.")]
    SubmissionFailed,
}

/// A validated name/email pair. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    /// Trimmed name
    pub name: String,
    /// Trimmed email
    pub email: String,
}

/// Check a raw name/email pair.
///
/// Emptiness is checked on trimmed values; the email pattern runs on the value
/// as typed, so surrounding whitespace is rejected as an invalid email.
pub fn validate(name: &str, email: &str) -> Result<Lead, WaitlistError> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Err(WaitlistError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(WaitlistError::InvalidEmail);
    }
    Ok(Lead {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
    })
}

/// Basic shape check for an email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Destination for accepted leads.
pub trait LeadSink {
    /// Hand a lead over. The form only cares whether this succeeded.
    fn accept(&self, lead: &Lead) -> Result<(), WaitlistError>;
}

/// Sink that accepts and discards every lead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSink;

impl LeadSink for SimulatedSink {
    fn accept(&self, lead: &Lead) -> Result<(), WaitlistError> {
        log::debug!(
            "[megift][waitlist] simulated submission accepted ({} char name), discarding",
            lead.name.chars().count()
        );
        Ok(())
    }
}

/// Where the form is in its submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// Accepting input.
    #[default]
    Idle,
    /// Valid lead handed off, waiting for the simulated call to finish.
    Pending,
    /// Success message is showing.
    Submitted,
}

/// Outcome of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation passed; the caller must finish with `complete_submit`.
    Started(Lead),
    /// Validation failed; the error is now stored on the form.
    Rejected(WaitlistError),
    /// A submission is already in flight; nothing changed.
    AlreadyPending,
}

/// Local state of the waitlist form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    name: String,
    email: String,
    phase: SubmitPhase,
    error: Option<WaitlistError>,
}

impl WaitlistForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name as typed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email as typed.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Error currently shown, if any.
    pub fn error(&self) -> Option<WaitlistError> {
        self.error
    }

    /// Message for the inline error box, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    /// A submission is in flight.
    pub fn is_pending(&self) -> bool {
        self.phase == SubmitPhase::Pending
    }

    /// The success message is showing.
    pub fn is_submitted(&self) -> bool {
        self.phase == SubmitPhase::Submitted
    }

    /// Replace the name. A visible error stays until the next submit.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the email. A visible error stays until the next submit.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Validate the current input and, if it passes, move to `Pending`.
    ///
    /// A previous error is kept on screen while the call is pending and
    /// cleared only once it succeeds.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.is_pending() {
            return SubmitStart::AlreadyPending;
        }
        match validate(&self.name, &self.email) {
            Ok(lead) => {
                self.phase = SubmitPhase::Pending;
                SubmitStart::Started(lead)
            }
            Err(err) => {
                self.error = Some(err);
                SubmitStart::Rejected(err)
            }
        }
    }

    /// Finish a pending submission.
    ///
    /// Ignored unless the form is `Pending`. Any sink failure is reported as
    /// the generic [`WaitlistError::SubmissionFailed`].
    pub fn complete_submit(&mut self, outcome: Result<(), WaitlistError>) {
        if !self.is_pending() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.phase = SubmitPhase::Submitted;
                self.error = None;
                self.name.clear();
                self.email.clear();
            }
            Err(err) => {
                log::warn!("[megift][waitlist] submission failed: {err:?}");
                self.phase = SubmitPhase::Idle;
                self.error = Some(WaitlistError::SubmissionFailed);
            }
        }
    }

    /// Send `lead` through `sink` and finish the pending submission with the result.
    pub fn complete_with<S: LeadSink + ?Sized>(&mut self, sink: &S, lead: &Lead) {
        let outcome = sink.accept(lead);
        self.complete_submit(outcome);
    }

    /// Hide the success message. No effect in any other phase.
    pub fn dismiss_success(&mut self) {
        if self.is_submitted() {
            self.phase = SubmitPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct RefusingSink;

    impl LeadSink for RefusingSink {
        fn accept(&self, _lead: &Lead) -> Result<(), WaitlistError> {
            Err(WaitlistError::InvalidEmail)
        }
    }

    fn filled(name: &str, email: &str) -> WaitlistForm {
        let mut form = WaitlistForm::new();
        form.set_name(name);
        form.set_email(email);
        form
    }

    #[test]
    fn empty_fields_are_rejected() {
        for (name, email) in [("", "ana@ex.com"), ("Ana", ""), ("   ", "ana@ex.com"), ("Ana", " \t")] {
            let mut form = filled(name, email);
            assert_eq!(
                form.begin_submit(),
                SubmitStart::Rejected(WaitlistError::MissingFields)
            );
            assert_eq!(
                form.error_message().as_deref(),
                Some("Por favor, preencha todos os campos.")
            );
            assert!(!form.is_submitted());
            assert!(!form.is_pending());
        }
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "not-an-email",
            "ana@ex",
            "@ex.com",
            "ana@.com",
            "ana ana@ex.com",
            "ana@ex.com ",
            "ana@@ex.com",
            "ana@ex.",
        ] {
            let mut form = filled("Ana", email);
            assert_eq!(
                form.begin_submit(),
                SubmitStart::Rejected(WaitlistError::InvalidEmail),
                "{email:?} should be rejected"
            );
            assert_eq!(
                form.error_message().as_deref(),
                Some("Por favor, insira um email válido.")
            );
        }
    }

    #[test]
    fn accepts_basic_addresses() {
        for email in ["ana@ex.com", "a.b+c@sub.domain.com.br", "x@y.z"] {
            assert!(is_valid_email(email), "{email:?} should be valid");
        }
    }

    #[test]
    fn successful_submission_lifecycle() {
        let mut form = filled("Ana", "ana@ex.com");

        let lead = match form.begin_submit() {
            SubmitStart::Started(lead) => lead,
            other => panic!("expected a started submission, got {other:?}"),
        };
        assert_eq!(
            lead,
            Lead {
                name: "Ana".into(),
                email: "ana@ex.com".into()
            }
        );
        assert!(form.is_pending());
        assert!(form.error().is_none());

        form.complete_with(&SimulatedSink, &lead);
        assert!(form.is_submitted());
        assert_eq!(form.name(), "");
        assert_eq!(form.email(), "");
        assert!(form.error().is_none());

        form.dismiss_success();
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn success_clears_a_previous_error() {
        let mut form = filled("", "ana@ex.com");
        form.begin_submit();
        assert!(form.error().is_some());

        form.set_name("Ana");
        assert!(form.error().is_some(), "typing keeps the error visible");

        let SubmitStart::Started(lead) = form.begin_submit() else {
            panic!("corrected input must start");
        };
        assert_eq!(form.error(), Some(WaitlistError::MissingFields));

        form.complete_with(&SimulatedSink, &lead);
        assert!(form.error().is_none());
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut form = filled("Ana", "ana@ex.com");
        assert!(matches!(form.begin_submit(), SubmitStart::Started(_)));
        assert_eq!(form.begin_submit(), SubmitStart::AlreadyPending);
        assert!(form.is_pending());
    }

    #[test]
    fn sink_failure_shows_generic_error() {
        let mut form = filled("Ana", "ana@ex.com");
        let SubmitStart::Started(lead) = form.begin_submit() else {
            panic!("valid input must start");
        };

        form.complete_with(&RefusingSink, &lead);
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(
            form.error_message().as_deref(),
            Some("Ocorreu um erro. Tente novamente.")
        );
        assert_eq!(form.name(), "Ana", "input is kept for a retry");
    }

    #[test]
    fn completion_and_dismiss_outside_their_phase_do_nothing() {
        let mut form = filled("Ana", "ana@ex.com");
        form.complete_submit(Ok(()));
        assert_eq!(form, filled("Ana", "ana@ex.com"));

        form.dismiss_success();
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn lead_is_trimmed() {
        let lead = validate("  Ana  ", "ana@ex.com").expect("valid");
        assert_eq!(lead.name, "Ana");
    }
}
