use std::io::{self, Write};

use contoso_chat::format::render_plain;
use contoso_chat::{Role, TranscriptSnapshot};

pub const TITLE: &str = "Contoso Outdoors GenAI Chat:";
pub const DISCLAIMER: &str = "Disclaimer: This chat application uses AI to generate responses. \
                              Please verify the information provided.";
pub const PLACEHOLDER: &str = "Ask a question...";
pub const TYPING: &str = "System is typing...";

/// Writes transcript changes to a terminal as they are committed.
///
/// User entries are not echoed; the typed line is already on screen.
pub struct TerminalPrinter<W> {
    out: W,
    printed: usize,
    was_pending: bool,
    last_error: Option<String>,
    showed_placeholder: bool,
}

impl<W: Write> TerminalPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            printed: 0,
            was_pending: false,
            last_error: None,
            showed_placeholder: false,
        }
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{TITLE}")?;
        writeln!(self.out, "{DISCLAIMER}")?;
        self.out.flush()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "\nUser: ")?;
        self.out.flush()
    }

    pub fn render(&mut self, state: &TranscriptSnapshot) -> io::Result<()> {
        if state.is_placeholder() && !self.showed_placeholder {
            writeln!(self.out, "{PLACEHOLDER}")?;
            self.showed_placeholder = true;
        }

        if state.pending && !self.was_pending {
            writeln!(self.out, "{TYPING}")?;
        }
        self.was_pending = state.pending;

        for message in state.messages.iter().skip(self.printed) {
            if message.role == Role::System {
                writeln!(self.out, "{}: {}", message.role, render_plain(&message.content))?;
            }
        }
        self.printed = state.messages.len();

        if state.last_error != self.last_error {
            if let Some(err) = &state.last_error {
                writeln!(self.out, "[error] {err}")?;
            }
            self.last_error = state.last_error.clone();
        }

        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
