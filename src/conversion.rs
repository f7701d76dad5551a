//! Selection conversion: the workflow behind the global hotkey and the
//! collaborator contracts it relies on.
//!
//! The OS side (sending the copy shortcut, reading and writing the clipboard,
//! replaying paste) is behind [`SelectionSource`], [`TextSink`] and
//! [`ClipboardWriter`] so the workflow itself stays platform neutral.

pub mod selection;

use std::{error::Error, fmt};

pub use selection::convert_selection;

/// Copies whatever is currently selected in the foreground application.
pub trait SelectionSource {
    /// Returns the selected text. An empty string means nothing was selected.
    fn selected_text(&mut self) -> Result<String, SelectionError>;
}

/// Surfaces converted text to the user.
pub trait TextSink {
    /// Puts `text` on the clipboard and pastes it over the current selection.
    fn deliver(&mut self, text: &str) -> Result<(), DeliveryError>;
}

pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), DeliveryError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No automation backend on this platform.
    Unsupported,
    /// The copy shortcut or the clipboard read failed.
    Copy(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => f.write_str("selection capture is not supported"),
            Self::Copy(reason) => write!(f, "failed to copy selection: {reason}"),
        }
    }
}

impl Error for SelectionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    Unsupported,
    Clipboard(String),
    Paste(String),
}

impl DeliveryError {
    pub fn user_text(&self) -> &'static str {
        match self {
            Self::Unsupported => "Text delivery is not supported",
            Self::Clipboard(_) => "Failed to write the clipboard",
            Self::Paste(_) => "Failed to paste converted text",
        }
    }
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => f.write_str(self.user_text()),
            Self::Clipboard(reason) | Self::Paste(reason) => {
                write!(f, "{}: {reason}", self.user_text())
            }
        }
    }
}

impl Error for DeliveryError {}
