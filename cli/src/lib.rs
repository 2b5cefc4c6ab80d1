//! Terminal host for `roster-core`: a reqwest transport, a prompt-based
//! notifier, and plain-text rendering of the employee table.

pub mod render;
pub mod terminal;
pub mod transport;

pub use terminal::TerminalNotifier;
pub use transport::ReqwestTransport;
