//! Colored console messages

use crossterm::style::Stylize;

use crate::commands::{Reply, Tone};
use crate::error::ContactsError;

/// Applies (or skips) terminal colors to user-facing messages
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Green text for a change that succeeded
    pub fn success(&self, message: &str) -> String {
        if self.color {
            message.green().to_string()
        } else {
            message.to_string()
        }
    }

    /// Red text for a failure
    pub fn failure(&self, message: &str) -> String {
        if self.color {
            message.red().to_string()
        } else {
            message.to_string()
        }
    }

    /// Render a handler reply according to its tone
    pub fn reply(&self, reply: &Reply) -> String {
        match reply.tone {
            Tone::Success => self.success(&reply.message),
            Tone::Info => reply.message.clone(),
        }
    }

    /// Render an error as a single line
    pub fn error(&self, err: &ContactsError) -> String {
        self.failure(&err.to_string())
    }
}
