use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

use tracing::{debug, info, warn};

use cadastro_core::{
    ApiError, Consent, Field, Gender, RegistrationApi, RegistrationReceipt,
    RegistrationRequest, GENERIC_FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
use cadastro_validation::{validate, ValidationErrors};

use crate::notification::{Notification, Severity};

pub const DEFAULT_DISMISS_INTERVAL: Duration = Duration::from_millis(1000);

/// UI-visible phase of the submission workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Validating,
    Submitting,
    Success,
}

/// One recorded state change
#[derive(Debug, Clone)]
pub struct StateTransition {
    pub from: FormState,
    pub to: FormState,
    pub at: SystemTime,
    pub details: Option<String>,
}

/// Owns the field values and every piece of UI-visible state: values,
/// touched flags, live validation errors, workflow state and the current
/// notification. The presentation layer only observes it and writes field
/// values back on user input.
pub struct FormController {
    api: Arc<dyn RegistrationApi>,
    request: RegistrationRequest,
    touched: HashSet<Field>,
    errors: ValidationErrors,
    state: FormState,
    notification: Option<Notification>,
    dismiss_interval: Duration,
    transitions: Vec<StateTransition>,
    last_receipt: Option<RegistrationReceipt>,
}

impl FormController {
    pub fn new(api: Arc<dyn RegistrationApi>) -> Self {
        Self::with_dismiss_interval(api, DEFAULT_DISMISS_INTERVAL)
    }

    pub fn with_dismiss_interval(
        api: Arc<dyn RegistrationApi>,
        dismiss_interval: Duration,
    ) -> Self {
        let request = RegistrationRequest::default();
        Self {
            api,
            errors: validate(&request),
            request,
            touched: HashSet::new(),
            state: FormState::Editing,
            notification: None,
            dismiss_interval,
            transitions: Vec::new(),
            last_receipt: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn request(&self) -> &RegistrationRequest {
        &self.request
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn last_receipt(&self) -> Option<&RegistrationReceipt> {
        self.last_receipt.as_ref()
    }

    pub fn value(&self, field: Field) -> &str {
        self.request.field(field)
    }

    pub fn touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error message for display. Errors are recomputed on every edit but
    /// only reported once the field is touched (or after a submit attempt,
    /// which touches everything).
    pub fn error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(&field) {
            self.errors.message(field)
        } else {
            None
        }
    }

    /// Record a user edit: store the value, mark the field touched and
    /// recompute the live error map.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.leave_success_on_edit();
        self.request.set_field(field, value);
        self.touched.insert(field);
        self.errors = validate(&self.request);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.leave_success_on_edit();
        self.request.gender = gender;
    }

    pub fn set_consent(&mut self, consent: Consent, granted: bool) {
        self.leave_success_on_edit();
        self.request.set_consent(consent, granted);
    }

    /// Mark a field touched without changing its value
    pub fn touch_field(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Run validation and, when the field set is clean, issue exactly one
    /// registration call. Validation failures never reach the network layer.
    pub async fn submit(&mut self) -> FormState {
        self.transition(FormState::Validating, None);
        for field in Field::ALL {
            self.touched.insert(field);
        }
        self.errors = validate(&self.request);

        if !self.errors.is_empty() {
            warn!(invalid_fields = self.errors.len(), "submission blocked by validation");
            self.transition(
                FormState::Editing,
                Some(format!("{} invalid fields", self.errors.len())),
            );
            return self.state;
        }

        self.transition(FormState::Submitting, None);
        match self.api.register(&self.request).await {
            Ok(receipt) => {
                info!(
                    status = receipt.status,
                    elapsed_ms = receipt.response_time_ms,
                    "registration accepted"
                );
                self.last_receipt = Some(receipt);
                self.transition(FormState::Success, None);
                self.reset();
                self.notification = Some(Notification::new(Severity::Success, SUCCESS_MESSAGE));
            }
            Err(err) => {
                warn!(error = %err, "registration failed");
                let message = match err {
                    ApiError::Rejected { message, .. } => message,
                    _ => GENERIC_FAILURE_MESSAGE.to_string(),
                };
                self.transition(FormState::Editing, Some("submission rejected".to_string()));
                self.notification = Some(Notification::new(Severity::Error, message));
            }
        }

        self.state
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Explicit dismissal: clears visibility only
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Timeout dismissal, driven by the presentation layer's clock
    pub fn dismiss_expired(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.expired(now, self.dismiss_interval))
        {
            self.notification = None;
        }
    }

    /// Entered data is consumed once: back to the mount defaults
    fn reset(&mut self) {
        self.request = RegistrationRequest::default();
        self.touched.clear();
        self.errors = validate(&self.request);
    }

    fn leave_success_on_edit(&mut self) {
        if self.state == FormState::Success {
            self.transition(FormState::Editing, Some("edit after success".to_string()));
        }
    }

    fn transition(&mut self, to: FormState, details: Option<String>) {
        let from = self.state;
        self.state = to;
        debug!(?from, ?to, "form state transition");
        self.transitions.push(StateTransition {
            from,
            to,
            at: SystemTime::now(),
            details,
        });
    }
}
