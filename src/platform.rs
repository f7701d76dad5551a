//! Platform without OS automation, used by the command-line front end.
//!
//! It keeps track of the accelerator it was asked to bind but cannot capture or
//! paste text.

use crate::{
    conversion::{ClipboardWriter, DeliveryError, SelectionError, SelectionSource, TextSink},
    hotkeys::{HotkeyRegistrar, RegisterError},
};

#[derive(Debug, Default)]
pub struct Headless {
    bound: Option<String>,
}

impl Headless {
    pub fn bound_hotkey(&self) -> Option<&str> {
        self.bound.as_deref()
    }
}

impl SelectionSource for Headless {
    fn selected_text(&mut self) -> Result<String, SelectionError> {
        Err(SelectionError::Unsupported)
    }
}

impl TextSink for Headless {
    fn deliver(&mut self, _text: &str) -> Result<(), DeliveryError> {
        Err(DeliveryError::Unsupported)
    }
}

impl ClipboardWriter for Headless {
    fn write_text(&mut self, _text: &str) -> Result<(), DeliveryError> {
        Err(DeliveryError::Unsupported)
    }
}

impl HotkeyRegistrar for Headless {
    fn unregister_all(&mut self) {
        self.bound = None;
    }

    fn register(&mut self, accelerator: &str) -> Result<(), RegisterError> {
        if accelerator.trim().is_empty() {
            return Err(RegisterError::new(accelerator, "empty accelerator"));
        }
        self.bound = Some(accelerator.to_string());
        Ok(())
    }
}
