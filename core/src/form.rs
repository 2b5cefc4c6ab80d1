//! The "add employee" form.
//!
//! `Idle -> Submitting -> Idle`. A submit while `Submitting` is refused, so
//! one form instance never has two create calls in flight.

use crate::client::RecordClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::notify::{text, NoticeKind, Notifier};
use crate::store::Refresh;
use crate::types::Record;
use crate::validation::{Field, FieldErrors, FormInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
}

/// Why `submit` produced no request.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    /// A submission is already in flight; the control is disabled.
    Busy,
    /// Local validation failed. Nothing was sent.
    Invalid(FieldErrors),
    /// The payload could not be encoded. Already reported to the user.
    Encode(ApiError),
}

#[derive(Debug)]
pub struct RecordForm {
    client: RecordClient,
    input: FormInput,
    errors: FieldErrors,
    state: FormState,
    attempted: bool,
}

impl RecordForm {
    pub fn new(client: RecordClient) -> Self {
        Self {
            client,
            input: FormInput::default(),
            errors: FieldErrors::default(),
            state: FormState::Idle,
            attempted: false,
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        match self.state {
            FormState::Idle => "Add Employee",
            FormState::Submitting => "Adding...",
        }
    }

    /// Edit one field. After a blocked submit, errors are recomputed on
    /// every edit so stale messages disappear.
    pub fn set(&mut self, field: Field, value: &str) {
        self.input.set(field, value);
        if self.attempted {
            self.errors = self.input.validate().err().unwrap_or_default();
        }
    }

    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> Result<HttpRequest, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::Busy);
        }
        self.attempted = true;
        let fields = match self.input.validate() {
            Ok(fields) => fields,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(SubmitBlocked::Invalid(errors));
            }
        };
        self.errors = FieldErrors::default();
        match self.client.build_create_record(&fields) {
            Ok(request) => {
                self.state = FormState::Submitting;
                Ok(request)
            }
            Err(err) => {
                notifier.notify(NoticeKind::Error, &text::create_failed(&err.user_message()));
                Err(SubmitBlocked::Encode(err))
            }
        }
    }

    /// Deliver the outcome of the request returned by `submit`.
    ///
    /// Success clears the form and refreshes the list; failure keeps what
    /// the user typed.
    pub fn complete(
        &mut self,
        response: Result<HttpResponse, ApiError>,
        notifier: &mut dyn Notifier,
        refresh: &mut dyn Refresh,
    ) -> Result<Record, ApiError> {
        self.state = FormState::Idle;
        match response.and_then(|r| self.client.parse_create_record(r)) {
            Ok(record) => {
                notifier.notify(NoticeKind::Success, text::CREATED);
                self.input = FormInput::default();
                self.errors = FieldErrors::default();
                self.attempted = false;
                refresh.refresh();
                Ok(record)
            }
            Err(err) => {
                notifier.notify(NoticeKind::Error, &text::create_failed(&err.user_message()));
                Err(err)
            }
        }
    }
}
