//! Async driver that wires the table, the form and the edit panel to a
//! `Transport` and a `Notifier`.
//!
//! # Design
//! The components stay sans-IO; `Session` is the host loop. Each action runs
//! to completion before the next one starts, and every successful mutation
//! is followed by exactly one list fetch. No failure escapes as anything
//! but an `ActionError` value: the session is always back to idle when an
//! action returns.

use tracing::{debug, warn};

use crate::client::RecordClient;
use crate::config::ClientConfig;
use crate::edit::{EditOutcome, EditPanel};
use crate::error::ApiError;
use crate::form::{RecordForm, SubmitBlocked};
use crate::http::{HttpRequest, HttpResponse};
use crate::notify::Notifier;
use crate::table::RecordTable;
use crate::transport::Transport;
use crate::types::{Record, RecordId};
use crate::validation::FieldErrors;

/// Why a user action did not result in a successful mutation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActionError {
    #[error("another request is already in progress")]
    Busy,
    #[error("input is invalid")]
    Invalid(FieldErrors),
    #[error("no employee with id {0} is listed")]
    UnknownRecord(RecordId),
    #[error("cancelled")]
    Declined,
    #[error("no edit panel is open")]
    NoPanel,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<SubmitBlocked> for ActionError {
    fn from(blocked: SubmitBlocked) -> Self {
        match blocked {
            SubmitBlocked::Busy => ActionError::Busy,
            SubmitBlocked::Invalid(errors) => ActionError::Invalid(errors),
            SubmitBlocked::Encode(err) => ActionError::Api(err),
        }
    }
}

pub struct Session<T, N> {
    client: RecordClient,
    transport: T,
    notifier: N,
    table: RecordTable,
    form: RecordForm,
    panel: Option<EditPanel>,
}

impl<T: Transport, N: Notifier> Session<T, N> {
    pub fn new(config: &ClientConfig, transport: T, notifier: N) -> Self {
        let client = config.client();
        Self {
            table: RecordTable::new(client.clone()),
            form: RecordForm::new(client.clone()),
            client,
            transport,
            notifier,
            panel: None,
        }
    }

    pub fn client(&self) -> &RecordClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RecordForm {
        &mut self.form
    }

    pub fn panel(&self) -> Option<&EditPanel> {
        self.panel.as_ref()
    }

    pub fn panel_mut(&mut self) -> Option<&mut EditPanel> {
        self.panel.as_mut()
    }

    /// Load the list for the first time.
    pub async fn mount(&mut self) {
        if let Some(request) = self.table.mount() {
            self.fetch(request).await;
        }
    }

    /// Re-issue the list fetch after a failure, or on demand.
    pub async fn retry(&mut self) {
        if let Some(request) = self.table.retry() {
            self.fetch(request).await;
        }
        self.sync_list().await;
    }

    /// Fetch a single employee straight from the backend. Nothing is cached.
    pub async fn get(&self, id: RecordId) -> Result<Record, ActionError> {
        let response = self.execute(self.client.build_get_record(id)).await;
        response
            .and_then(|r| self.client.parse_get_record(r))
            .map_err(ActionError::from)
    }

    pub async fn submit_form(&mut self) -> Result<Record, ActionError> {
        let request = self.form.submit(&mut self.notifier)?;
        let response = self.execute(request).await;
        let created = self
            .form
            .complete(response, &mut self.notifier, &mut self.table);
        match created {
            Ok(record) => {
                self.sync_list().await;
                Ok(record)
            }
            Err(err) => {
                warn!(error = %err, "create failed");
                Err(err.into())
            }
        }
    }

    /// Open the edit panel on a listed row, replacing any open panel.
    pub fn open_edit(&mut self, id: RecordId) -> Result<&mut EditPanel, ActionError> {
        let panel = self.table.open_edit(id).ok_or(ActionError::UnknownRecord(id))?;
        Ok(self.panel.insert(panel))
    }

    pub fn cancel_edit(&mut self) {
        if let Some(panel) = self.panel.take() {
            panel.cancel();
        }
    }

    pub async fn save_edit(&mut self) -> Result<Record, ActionError> {
        let request = self
            .panel
            .as_mut()
            .ok_or(ActionError::NoPanel)?
            .submit(&mut self.notifier)?;
        let response = self.execute(request).await;
        let panel = self.panel.take().ok_or(ActionError::NoPanel)?;
        match panel.complete(response, &mut self.notifier, &mut self.table) {
            EditOutcome::Saved(record) => {
                self.sync_list().await;
                Ok(record)
            }
            EditOutcome::Retained(panel, err) => {
                warn!(error = %err, "update failed");
                self.panel = Some(panel);
                Err(err.into())
            }
        }
    }

    pub async fn delete(&mut self, id: RecordId) -> Result<(), ActionError> {
        if self.table.row(id).is_none() {
            return Err(ActionError::UnknownRecord(id));
        }
        if self.table.is_deleting() {
            return Err(ActionError::Busy);
        }
        let request = self
            .table
            .request_delete(id, &mut self.notifier)
            .ok_or(ActionError::Declined)?;
        let response = self.execute(request).await;
        match self.table.complete_delete(response, &mut self.notifier) {
            Ok(()) => {
                self.sync_list().await;
                Ok(())
            }
            Err(err) => {
                warn!(id, error = %err, "delete failed");
                Err(err.into())
            }
        }
    }

    async fn sync_list(&mut self) {
        while let Some(request) = self.table.poll_refresh() {
            self.fetch(request).await;
        }
    }

    async fn fetch(&mut self, request: HttpRequest) {
        let response = self.execute(request).await;
        if let Err(err) = &response {
            warn!(error = %err, "list fetch failed");
        }
        self.table.complete_fetch(response);
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request).await;
        match &response {
            Ok(r) => debug!(status = r.status, "response received"),
            Err(err) => warn!(error = %err, "transport failed"),
        }
        response
    }
}
