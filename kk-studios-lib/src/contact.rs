use std::{future::Future, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please fill in your {}", list(.0))]
    MissingFields(Vec<ContactField>),
}

fn list(fields: &[ContactField]) -> String {
    let labels: Vec<_> = fields.iter().map(|f| f.label()).collect();
    match labels.as_slice() {
        [] => String::new(),
        [one] => (*one).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("the message couldn't be delivered: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Rejected(ValidationError),
    Accepted,
    Failed(SubmissionError),
}

/// What gets handed to whoever delivers the message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub trait SubmissionBackend {
    fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), SubmissionError>>;
}

/// Stands in for a mail endpoint: waits, then accepts.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmission {
    pub delay: Duration,
}

impl SubmissionBackend for SimulatedSubmission {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        match serde_json::to_string(submission) {
            Ok(json) => debug!("simulating delivery of {json}"),
            Err(e) => warn!("couldn't serialize submission: {e}"),
        }
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    state: SubmissionState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    /// Edits are ignored while a submission is in flight.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        if self.is_pending() {
            return;
        }
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
        self.state = SubmissionState::Idle;
    }

    pub fn validate(&self) -> Result<ContactSubmission, ValidationError> {
        let missing: Vec<_> = ContactField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validates synchronously. On success the form is pending and the
    /// returned payload must be delivered, followed by [`Self::finish`].
    ///
    /// Returns `None` both when validation fails (the state says why) and when
    /// a submission is already pending.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_pending() {
            debug!("submit ignored, one is already pending");
            return None;
        }
        match self.validate() {
            Ok(submission) => {
                self.state = SubmissionState::Pending;
                Some(submission)
            }
            Err(e) => {
                info!("contact form rejected: {e}");
                self.state = SubmissionState::Rejected(e);
                None
            }
        }
    }

    pub fn finish(&mut self, result: Result<(), SubmissionError>) {
        if !self.is_pending() {
            warn!("submission finished without one pending");
            return;
        }
        match result {
            Ok(()) => {
                info!("contact form accepted");
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.state = SubmissionState::Accepted;
            }
            Err(e) => {
                warn!("{e}");
                self.state = SubmissionState::Failed(e);
            }
        }
    }

    /// Runs a whole submission against `backend`.
    pub async fn submit<B: SubmissionBackend>(&mut self, backend: &B) -> &SubmissionState {
        if let Some(submission) = self.begin_submit() {
            let result = backend.submit(&submission).await;
            self.finish(result);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "A");
        form.set_field(ContactField::Email, "a@b.com");
        form.set_field(ContactField::Message, "hi");
        form
    }

    struct Refusing;

    impl SubmissionBackend for Refusing {
        async fn submit(&self, _: &ContactSubmission) -> Result<(), SubmissionError> {
            Err(SubmissionError::Rejected("mailbox full".into()))
        }
    }

    #[test]
    fn empty_form_is_rejected_synchronously() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(), None);
        assert_eq!(
            *form.state(),
            SubmissionState::Rejected(ValidationError::MissingFields(ContactField::ALL.to_vec()))
        );
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.set_field(ContactField::Email, "   ");
        assert!(form.begin_submit().is_none());
        assert_eq!(
            form.state().clone(),
            SubmissionState::Rejected(ValidationError::MissingFields(vec![ContactField::Email]))
        );
    }

    #[test]
    fn rejection_message_lists_missing_fields() {
        let all = ValidationError::MissingFields(ContactField::ALL.to_vec());
        assert_eq!(all.to_string(), "please fill in your name, email and message");
        let one = ValidationError::MissingFields(vec![ContactField::Message]);
        assert_eq!(one.to_string(), "please fill in your message");
    }

    #[test]
    fn editing_after_rejection_returns_to_idle() {
        let mut form = ContactForm::new();
        form.begin_submit();
        form.set_field(ContactField::Name, "A");
        assert_eq!(*form.state(), SubmissionState::Idle);
    }

    #[test]
    fn payload_is_trimmed() {
        let mut form = filled();
        form.set_field(ContactField::Name, "  Roark  ");
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.name, "Roark");
        assert!(form.is_pending());
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert!(form.is_pending());

        form.set_field(ContactField::Name, "B");
        assert_eq!(form.field(ContactField::Name), "A");
    }

    #[test]
    fn finish_without_pending_is_ignored() {
        let mut form = filled();
        form.finish(Ok(()));
        assert_eq!(*form.state(), SubmissionState::Idle);
        assert_eq!(form.field(ContactField::Name), "A");
    }

    #[tokio::test(start_paused = true)]
    async fn accepted_after_delay_and_cleared() {
        let backend = SimulatedSubmission {
            delay: Duration::from_millis(1500),
        };
        let mut form = filled();
        let started = tokio::time::Instant::now();

        let state = form.submit(&backend).await.clone();

        assert_eq!(state, SubmissionState::Accepted);
        assert!(started.elapsed() >= Duration::from_millis(1500));
        for field in ContactField::ALL {
            assert_eq!(form.field(field), "");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn pending_until_delay_elapses() {
        let backend = SimulatedSubmission {
            delay: Duration::from_secs(2),
        };
        let mut form = filled();
        let submission = form.begin_submit().unwrap();

        let delivery = backend.submit(&submission);
        tokio::pin!(delivery);
        let early = tokio::time::timeout(Duration::from_secs(1), &mut delivery).await;
        assert!(early.is_err());
        assert!(form.is_pending());

        form.finish(delivery.await);
        assert_eq!(*form.state(), SubmissionState::Accepted);
    }

    #[tokio::test]
    async fn backend_failure_keeps_fields() {
        let mut form = filled();
        let state = form.submit(&Refusing).await.clone();
        assert!(matches!(state, SubmissionState::Failed(_)));
        assert_eq!(form.field(ContactField::Message), "hi");
    }
}
