//! User-facing side effects behind a capability trait.
//!
//! Components never talk to a dialog toolkit directly; the host injects a
//! `Notifier`. Every mutation attempt ends in exactly one `notify` call, and
//! every delete is gated by exactly one `confirm` call.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

pub trait Notifier {
    /// Ask a yes/no question. Only `true` lets a destructive action proceed.
    fn confirm(&mut self, question: &str) -> bool;

    fn notify(&mut self, kind: NoticeKind, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn confirm(&mut self, question: &str) -> bool {
        (**self).confirm(question)
    }

    fn notify(&mut self, kind: NoticeKind, message: &str) {
        (**self).notify(kind, message)
    }
}

pub(crate) mod text {
    pub const CREATED: &str = "Employee created successfully!";
    pub const UPDATED: &str = "Employee updated successfully!";
    pub const DELETED: &str = "Employee has been deleted successfully.";

    pub fn create_failed(message: &str) -> String {
        format!("Error creating employee: {message}")
    }

    pub fn update_failed(message: &str) -> String {
        format!("Error updating employee: {message}")
    }

    pub fn delete_failed(message: &str) -> String {
        format!("Error deleting employee: {message}")
    }

    pub fn confirm_delete(name: &str) -> String {
        format!("Are you sure? You are about to delete {name}. This action cannot be undone.")
    }
}
