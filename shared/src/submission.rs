use crate::config::ValidationRules;
use crate::form::FormState;
use crate::types::Credentials;
use crate::validation::{validate, ValidationError};

pub const SIGNED_IN_MESSAGE: &str = "Signed in successfully (demo).";
pub const OTP_MESSAGE: &str = "OTP sign-in (demo)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Identifies one submit attempt. Completing a ticket from an earlier
/// attempt is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

/// Something to show the member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(ValidationError),
    SignedIn,
    OtpRequested,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Error(err) => err.to_string(),
            Notice::SignedIn => SIGNED_IN_MESSAGE.to_string(),
            Notice::OtpRequested => OTP_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the phase did not change.
    Rejected(ValidationError),
    /// Now submitting. Pass the ticket back to [`SubmissionMachine::complete`].
    Started {
        ticket: SubmitTicket,
        credentials: Credentials,
    },
    /// A submit is already in flight.
    Ignored,
}

/// Idle -> Submitting -> Idle.
#[derive(Debug, Default)]
pub struct SubmissionMachine {
    phase: SubmitPhase,
    generation: u64,
}

impl SubmissionMachine {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn submit(&mut self, form: &FormState, rules: &ValidationRules) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Ignored;
        }

        match validate(form, rules) {
            Err(err) => SubmitOutcome::Rejected(err),
            Ok(credentials) => {
                self.generation += 1;
                self.phase = SubmitPhase::Submitting;
                SubmitOutcome::Started {
                    ticket: SubmitTicket(self.generation),
                    credentials,
                }
            }
        }
    }

    pub fn complete(&mut self, ticket: SubmitTicket) -> Option<Notice> {
        if !self.is_submitting() || ticket.0 != self.generation {
            return None;
        }
        self.phase = SubmitPhase::Idle;
        Some(Notice::SignedIn)
    }

    /// Abandons the attempt in flight, if any.
    pub fn cancel(&mut self) {
        if self.is_submitting() {
            self.generation += 1;
            self.phase = SubmitPhase::Idle;
        }
    }

    /// The "Get OTP" placeholder. Never touches the phase.
    pub fn request_otp(&self) -> Notice {
        Notice::OtpRequested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormAction;
    use crate::types::{CountryCode, Login, SignInMode};

    fn form(email: &str, password: &str) -> FormState {
        let mut form = FormState::default();
        form.apply(FormAction::SetEmail(email.into()));
        form.apply(FormAction::SetPassword(password.into()));
        form
    }

    fn started(outcome: SubmitOutcome) -> SubmitTicket {
        match outcome {
            SubmitOutcome::Started { ticket, .. } => ticket,
            other => panic!("expected Started, got {other:?}"),
        }
    }

    #[test]
    fn invalid_form_stays_idle() {
        let mut machine = SubmissionMachine::default();
        let outcome = machine.submit(&form("not-an-email", "secret1"), &ValidationRules::default());

        assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::InvalidEmail));
        assert_eq!(machine.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn valid_email_runs_full_cycle() {
        let mut machine = SubmissionMachine::default();
        let ticket = started(machine.submit(&form("user@example.com", "secret1"), &ValidationRules::default()));

        assert!(machine.is_submitting());
        assert_eq!(machine.complete(ticket), Some(Notice::SignedIn));
        assert_eq!(machine.phase(), SubmitPhase::Idle);
        assert_eq!(Notice::SignedIn.message(), "Signed in successfully (demo).");
    }

    #[test]
    fn valid_phone_runs_full_cycle() {
        let mut phone = FormState::default();
        phone.apply(FormAction::SelectMode(SignInMode::Phone));
        phone.apply(FormAction::SetCountryCode(CountryCode::India));
        phone.apply(FormAction::SetPhone("98765 43210".into()));
        phone.apply(FormAction::SetPassword("secret1".into()));

        let mut machine = SubmissionMachine::default();
        match machine.submit(&phone, &ValidationRules::default()) {
            SubmitOutcome::Started {
                ticket,
                credentials,
            } => {
                assert_eq!(
                    credentials.login,
                    Login::Phone {
                        country_code: CountryCode::India,
                        digits: "9876543210".into(),
                    }
                );
                assert_eq!(machine.complete(ticket), Some(Notice::SignedIn));
            }
            other => panic!("expected Started, got {other:?}"),
        }
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut machine = SubmissionMachine::default();
        let valid = form("user@example.com", "secret1");
        let ticket = started(machine.submit(&valid, &ValidationRules::default()));

        assert_eq!(machine.submit(&valid, &ValidationRules::default()), SubmitOutcome::Ignored);
        assert_eq!(machine.complete(ticket), Some(Notice::SignedIn));
    }

    #[test]
    fn cancelled_ticket_completes_silently() {
        let mut machine = SubmissionMachine::default();
        let valid = form("user@example.com", "secret1");
        let stale = started(machine.submit(&valid, &ValidationRules::default()));

        machine.cancel();
        assert_eq!(machine.phase(), SubmitPhase::Idle);
        assert_eq!(machine.complete(stale), None);

        let fresh = started(machine.submit(&valid, &ValidationRules::default()));
        assert_eq!(machine.complete(stale), None);
        assert!(machine.is_submitting());
        assert_eq!(machine.complete(fresh), Some(Notice::SignedIn));
    }

    #[test]
    fn otp_is_inert() {
        let machine = SubmissionMachine::default();
        assert_eq!(machine.request_otp().message(), "OTP sign-in (demo)");
        assert_eq!(machine.phase(), SubmitPhase::Idle);
    }
}
