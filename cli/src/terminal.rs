//! `Notifier` backed by a line-oriented terminal.

use std::io::{BufRead, Write};

use roster_core::{NoticeKind, Notifier};
use tracing::warn;

pub struct TerminalNotifier<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> TerminalNotifier<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            assume_yes: false,
        }
    }

    /// Answer every confirmation with yes without prompting.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.output, "{line}").and_then(|()| self.output.flush()) {
            warn!(error = %err, "terminal write failed");
        }
    }
}

impl<R: BufRead, W: Write> Notifier for TerminalNotifier<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if let Err(err) = write!(self.output, "{question} [y/N] ").and_then(|()| self.output.flush())
        {
            warn!(error = %err, "terminal write failed");
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            // No answer is a no.
            Err(_) => false,
        }
    }

    fn notify(&mut self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => self.write_line(&format!("Success! {message}")),
            NoticeKind::Error => self.write_line(&format!("Error! {message}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(answer: &str) -> (bool, String) {
        let mut notifier = TerminalNotifier::new(Cursor::new(answer.to_string()), Vec::new());
        let confirmed = notifier.confirm("Delete Al?");
        (confirmed, String::from_utf8(notifier.into_output()).unwrap())
    }

    #[test]
    fn only_yes_confirms() {
        assert!(prompt("y\n").0);
        assert!(prompt("YES\n").0);
        assert!(!prompt("\n").0);
        assert!(!prompt("n\n").0);
        assert!(!prompt("").0, "end of input declines");
    }

    #[test]
    fn prompt_shows_question() {
        assert_eq!(prompt("n\n").1, "Delete Al? [y/N] ");
    }

    #[test]
    fn assume_yes_skips_the_prompt() {
        let mut notifier = TerminalNotifier::new(Cursor::new(String::new()), Vec::new())
            .assume_yes(true);
        assert!(notifier.confirm("Delete Al?"));
        assert!(notifier.into_output().is_empty());
    }

    #[test]
    fn notices_are_prefixed_by_kind() {
        let mut notifier = TerminalNotifier::new(Cursor::new(String::new()), Vec::new());
        notifier.notify(NoticeKind::Success, "Employee created successfully!");
        notifier.notify(NoticeKind::Error, "Error deleting employee: not found");
        assert_eq!(
            String::from_utf8(notifier.into_output()).unwrap(),
            "Success! Employee created successfully!\nError! Error deleting employee: not found\n"
        );
    }
}
