//! The displayed employee collection and its refresh contract.
//!
//! # Design
//! There is no hidden shared cache. Mutating components receive a
//! `&mut dyn Refresh` and call it after a successful mutation; the store
//! turns pending refreshes into a single list fetch. The backend stays the
//! only source of truth and the store only ever holds its last answer.

use crate::client::RecordClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Record;

/// Something that can be told its view of the backend is out of date.
pub trait Refresh {
    fn refresh(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Failed { message: String },
    Loaded(Vec<Record>),
}

#[derive(Debug)]
pub struct RecordStore {
    client: RecordClient,
    state: ListState,
    stale: bool,
    in_flight: bool,
    generation: u64,
}

impl RecordStore {
    /// A new store starts out stale so the first poll loads the list.
    pub fn new(client: RecordClient) -> Self {
        Self {
            client,
            state: ListState::Loading,
            stale: true,
            in_flight: false,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn records(&self) -> &[Record] {
        match &self.state {
            ListState::Loaded(records) => records,
            _ => &[],
        }
    }

    /// Bumped on every completed fetch, successful or not.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    /// The list request to issue now, if a refresh is pending and nothing is
    /// in flight. Rows already loaded stay visible while it runs.
    pub fn begin_fetch(&mut self) -> Option<HttpRequest> {
        if !self.stale || self.in_flight {
            return None;
        }
        self.stale = false;
        self.in_flight = true;
        if !matches!(self.state, ListState::Loaded(_)) {
            self.state = ListState::Loading;
        }
        Some(self.client.build_list_records())
    }

    pub fn complete_fetch(&mut self, response: Result<HttpResponse, ApiError>) {
        self.in_flight = false;
        self.generation += 1;
        self.state = match response.and_then(|r| self.client.parse_list_records(r)) {
            Ok(records) => ListState::Loaded(records),
            Err(err) => ListState::Failed {
                message: err.user_message(),
            },
        };
    }
}

impl Refresh for RecordStore {
    fn refresh(&mut self) {
        self.stale = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(body: &str) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    const ONE_ROW: &str = r#"[{"id":1,"name":"Al","salary":1,"city":"NY"}]"#;

    #[test]
    fn first_fetch_starts_loading() {
        let mut store = RecordStore::new(RecordClient::default());
        assert!(store.begin_fetch().is_some());
        assert_eq!(store.state(), &ListState::Loading);
        assert!(store.begin_fetch().is_none(), "already in flight");

        store.complete_fetch(ok(ONE_ROW));
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.generation(), 1);
        assert!(store.begin_fetch().is_none(), "nothing pending");
    }

    #[test]
    fn refresh_calls_coalesce() {
        let mut store = RecordStore::new(RecordClient::default());
        store.begin_fetch();
        store.complete_fetch(ok(ONE_ROW));

        store.refresh();
        store.refresh();
        assert!(store.begin_fetch().is_some());
        store.complete_fetch(ok("[]"));
        assert!(store.begin_fetch().is_none());
    }

    #[test]
    fn refetch_keeps_rows_visible() {
        let mut store = RecordStore::new(RecordClient::default());
        store.begin_fetch();
        store.complete_fetch(ok(ONE_ROW));

        store.refresh();
        store.begin_fetch();
        assert_eq!(store.records().len(), 1);
        assert!(store.is_fetching());
    }

    #[test]
    fn refresh_during_fetch_is_queued() {
        let mut store = RecordStore::new(RecordClient::default());
        store.begin_fetch();
        store.refresh();
        store.complete_fetch(ok("[]"));
        assert!(store.begin_fetch().is_some());
    }

    #[test]
    fn failed_fetch_reports_message() {
        let mut store = RecordStore::new(RecordClient::default());
        store.begin_fetch();
        store.complete_fetch(Err(ApiError::Transport("connection refused".to_string())));
        assert_eq!(
            store.state(),
            &ListState::Failed {
                message: "connection refused".to_string()
            }
        );
        assert!(store.records().is_empty());
    }
}
