//! The employee table: list rendering, delete with confirmation, and the
//! hand-off to the edit panel.
//!
//! # Design
//! The table owns the `RecordStore` and is the `Refresh` target every
//! mutating component is handed. Deletes are never applied locally: the row
//! disappears only when the refreshed list no longer contains it.

use crate::client::RecordClient;
use crate::edit::EditPanel;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::notify::{text, NoticeKind, Notifier};
use crate::store::{ListState, RecordStore, Refresh};
use crate::types::{Record, RecordId};

pub const EMPTY_MESSAGE: &str = "No employees found";

/// What the table shows right now.
#[derive(Debug, PartialEq)]
pub enum TableView<'a> {
    Loading,
    Failed { message: &'a str },
    Empty,
    Rows(&'a [Record]),
}

#[derive(Debug)]
pub struct RecordTable {
    client: RecordClient,
    store: RecordStore,
    deleting: Option<RecordId>,
}

impl RecordTable {
    pub fn new(client: RecordClient) -> Self {
        Self {
            store: RecordStore::new(client.clone()),
            client,
            deleting: None,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Initial fetch. Same as `poll_refresh`, named for the call site.
    pub fn mount(&mut self) -> Option<HttpRequest> {
        self.poll_refresh()
    }

    /// Manual "Try Again" after a failed load.
    pub fn retry(&mut self) -> Option<HttpRequest> {
        self.store.refresh();
        self.store.begin_fetch()
    }

    /// The pending list fetch, if any.
    pub fn poll_refresh(&mut self) -> Option<HttpRequest> {
        self.store.begin_fetch()
    }

    pub fn complete_fetch(&mut self, response: Result<HttpResponse, ApiError>) {
        self.store.complete_fetch(response);
    }

    pub fn view(&self) -> TableView<'_> {
        match self.store.state() {
            ListState::Loading => TableView::Loading,
            ListState::Failed { message } => TableView::Failed {
                message: message.as_str(),
            },
            ListState::Loaded(records) if records.is_empty() => TableView::Empty,
            ListState::Loaded(records) => TableView::Rows(records),
        }
    }

    pub fn summary(&self) -> String {
        match self.store.records().len() {
            1 => "1 employee found".to_string(),
            n => format!("{n} employees found"),
        }
    }

    pub fn row(&self, id: RecordId) -> Option<&Record> {
        self.store.records().iter().find(|r| r.id == id)
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting.is_some()
    }

    /// Ask for confirmation and, only on an explicit yes, return the delete
    /// request. Unknown rows and a delete already in flight yield nothing.
    pub fn request_delete(
        &mut self,
        id: RecordId,
        notifier: &mut dyn Notifier,
    ) -> Option<HttpRequest> {
        if self.deleting.is_some() {
            return None;
        }
        let record = self.row(id)?;
        if !notifier.confirm(&text::confirm_delete(&record.name)) {
            return None;
        }
        self.deleting = Some(id);
        Some(self.client.build_delete_record(id))
    }

    pub fn complete_delete(
        &mut self,
        response: Result<HttpResponse, ApiError>,
        notifier: &mut dyn Notifier,
    ) -> Result<(), ApiError> {
        self.deleting = None;
        match response.and_then(|r| self.client.parse_delete_record(r)) {
            Ok(()) => {
                notifier.notify(NoticeKind::Success, text::DELETED);
                self.refresh();
                Ok(())
            }
            Err(err) => {
                notifier.notify(NoticeKind::Error, &text::delete_failed(&err.user_message()));
                Err(err)
            }
        }
    }

    /// Open the edit panel on a row's current values. No request is made.
    pub fn open_edit(&self, id: RecordId) -> Option<EditPanel> {
        self.row(id)
            .map(|record| EditPanel::open(self.client.clone(), record))
    }
}

impl Refresh for RecordTable {
    fn refresh(&mut self) {
        self.store.refresh();
    }
}
