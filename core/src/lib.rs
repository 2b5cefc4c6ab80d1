//! Client core for a remote employee collection.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network, and models the three interactive pieces of an
//! employee manager on top of that: the create form, the table with its
//! confirmed delete, and the edit panel.
//!
//! # Design
//! - `RecordClient` is stateless; each operation is a `build_*`/`parse_*` pair.
//! - Components are state machines that return requests and accept
//!   responses. `Session` drives them over any `Transport`.
//! - Dialogs are a capability (`Notifier`) and list invalidation is an
//!   explicit contract (`Refresh`), both injected into mutating components.

pub mod client;
pub mod config;
pub mod edit;
pub mod error;
pub mod form;
pub mod http;
pub mod notify;
pub mod session;
pub mod store;
pub mod table;
pub mod transport;
pub mod types;
pub mod validation;

pub use client::{RecordClient, DEFAULT_BASE_URL};
pub use config::ClientConfig;
pub use edit::{EditOutcome, EditPanel};
pub use error::ApiError;
pub use form::{FormState, RecordForm, SubmitBlocked};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notify::{NoticeKind, Notifier};
pub use session::{ActionError, Session};
pub use store::{ListState, RecordStore, Refresh};
pub use table::{RecordTable, TableView, EMPTY_MESSAGE};
pub use transport::Transport;
pub use types::{Record, RecordFields, RecordId};
pub use validation::{Field, FieldErrors, FormInput, ValidationError};
