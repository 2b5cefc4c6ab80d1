//! The edit panel: a form bound to one existing employee.
//!
//! The panel exists only while open. `complete` and `cancel` take it by
//! value, so a closed panel cannot be updated by a late response.

use crate::client::RecordClient;
use crate::error::ApiError;
use crate::form::{FormState, SubmitBlocked};
use crate::http::{HttpRequest, HttpResponse};
use crate::notify::{text, NoticeKind, Notifier};
use crate::store::Refresh;
use crate::types::{Record, RecordId};
use crate::validation::{Field, FieldErrors, FormInput};

#[derive(Debug)]
pub enum EditOutcome {
    /// The update went through and the panel is gone.
    Saved(Record),
    /// The update failed; the panel stays open with the user's values.
    Retained(EditPanel, ApiError),
}

#[derive(Debug)]
pub struct EditPanel {
    client: RecordClient,
    id: RecordId,
    input: FormInput,
    errors: FieldErrors,
    state: FormState,
    attempted: bool,
}

impl EditPanel {
    pub fn open(client: RecordClient, record: &Record) -> Self {
        Self {
            client,
            id: record.id,
            input: FormInput::from_record(record),
            errors: FieldErrors::default(),
            state: FormState::Idle,
            attempted: false,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
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

    pub fn submit_label(&self) -> &'static str {
        match self.state {
            FormState::Idle => "Update Employee",
            FormState::Submitting => "Updating...",
        }
    }

    /// Edit one field. After a blocked submit, errors are recomputed on
    /// every edit, as in the create form.
    pub fn set(&mut self, field: Field, value: &str) {
        self.input.set(field, value);
        if self.attempted {
            self.errors = self.input.validate().err().unwrap_or_default();
        }
    }

    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> Result<HttpRequest, SubmitBlocked> {
        if self.state == FormState::Submitting {
            return Err(SubmitBlocked::Busy);
        }
        self.attempted = true;
        let fields = self.input.validate().map_err(|errors| {
            self.errors = errors.clone();
            SubmitBlocked::Invalid(errors)
        })?;
        self.errors = FieldErrors::default();
        match self.client.build_update_record(self.id, &fields) {
            Ok(request) => {
                self.state = FormState::Submitting;
                Ok(request)
            }
            Err(err) => {
                notifier.notify(NoticeKind::Error, &text::update_failed(&err.user_message()));
                Err(SubmitBlocked::Encode(err))
            }
        }
    }

    pub fn complete(
        mut self,
        response: Result<HttpResponse, ApiError>,
        notifier: &mut dyn Notifier,
        refresh: &mut dyn Refresh,
    ) -> EditOutcome {
        self.state = FormState::Idle;
        match response.and_then(|r| self.client.parse_update_record(r)) {
            Ok(record) => {
                notifier.notify(NoticeKind::Success, text::UPDATED);
                refresh.refresh();
                EditOutcome::Saved(record)
            }
            Err(err) => {
                notifier.notify(NoticeKind::Error, &text::update_failed(&err.user_message()));
                EditOutcome::Retained(self, err)
            }
        }
    }

    /// Close without submitting. Nothing is sent and nothing is refreshed.
    pub fn cancel(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl Notifier for Silent {
        fn confirm(&mut self, _question: &str) -> bool {
            false
        }

        fn notify(&mut self, _kind: NoticeKind, _message: &str) {}
    }

    struct NoRefresh;

    impl Refresh for NoRefresh {
        fn refresh(&mut self) {
            panic!("a failed update must not refresh");
        }
    }

    fn panel() -> EditPanel {
        let record = Record {
            id: 3,
            name: "Cy".to_string(),
            salary: 1200.5,
            city: "SF".to_string(),
        };
        EditPanel::open(RecordClient::default(), &record)
    }

    #[test]
    fn opens_prefilled() {
        let panel = panel();
        assert_eq!(panel.id(), 3);
        assert_eq!(panel.input(), &FormInput::new("Cy", "1200.5", "SF"));
        assert_eq!(panel.submit_label(), "Update Employee");
    }

    #[test]
    fn negative_salary_blocks_and_stays_open() {
        let mut panel = panel();
        panel.set(Field::Salary, "-5");
        let blocked = panel.submit(&mut Silent).unwrap_err();
        let SubmitBlocked::Invalid(errors) = blocked else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.salary.unwrap().to_string(), "Salary must be positive");
        assert_eq!(panel.state(), FormState::Idle);
    }

    #[test]
    fn failed_update_retains_values() {
        let mut panel = panel();
        panel.set(Field::City, "Oslo");
        let request = panel.submit(&mut Silent).unwrap();
        assert!(request.path.ends_with("/employees/3"));

        let outcome = panel.complete(
            Ok(HttpResponse {
                status: 404,
                headers: Vec::new(),
                body: String::new(),
            }),
            &mut Silent,
            &mut NoRefresh,
        );
        let EditOutcome::Retained(panel, err) = outcome else {
            panic!("panel should stay open");
        };
        assert!(err.is_not_found());
        assert_eq!(panel.input().city, "Oslo");
        assert_eq!(panel.state(), FormState::Idle);
    }

    #[test]
    fn edits_after_a_blocked_submit_revalidate_every_field() {
        let mut panel = panel();
        panel.set(Field::Name, "A");
        assert!(panel.errors().is_empty(), "no messages before the first submit");
        assert!(panel.submit(&mut Silent).is_err());
        assert!(panel.errors().name.is_some());

        panel.set(Field::Name, "Ada");
        assert!(panel.errors().is_empty());

        panel.set(Field::City, "X");
        assert_eq!(
            panel.errors().city.unwrap().to_string(),
            "City must be at least 2 characters"
        );
    }
}
