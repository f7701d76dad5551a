use std::{
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    conversion::{ClipboardWriter, DeliveryError, SelectionError, SelectionSource, TextSink},
    hotkeys::{HotkeyRegistrar, RegisterError},
};

pub fn unique_temp_dir(prefix: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "layout-flip-tests-{prefix}-{}-{ts}-{n}",
        std::process::id()
    ))
}

/// Scriptable platform that records everything the app asks of it.
#[derive(Debug)]
pub struct FakePlatform {
    pub selection: Result<String, SelectionError>,
    pub selection_reads: usize,
    pub delivered: Vec<String>,
    pub deliver_error: Option<DeliveryError>,
    pub clipboard: Vec<String>,
    pub clipboard_error: Option<DeliveryError>,
    pub refused: Vec<String>,
    pub bound: Option<String>,
    pub registered: Vec<String>,
    pub unregister_calls: usize,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self {
            selection: Ok(String::new()),
            selection_reads: 0,
            delivered: Vec::new(),
            deliver_error: None,
            clipboard: Vec::new(),
            clipboard_error: None,
            refused: Vec::new(),
            bound: None,
            registered: Vec::new(),
            unregister_calls: 0,
        }
    }
}

impl FakePlatform {
    pub fn with_selection(text: &str) -> Self {
        Self {
            selection: Ok(text.to_string()),
            ..Default::default()
        }
    }
}

impl SelectionSource for FakePlatform {
    fn selected_text(&mut self) -> Result<String, SelectionError> {
        self.selection_reads += 1;
        self.selection.clone()
    }
}

impl TextSink for FakePlatform {
    fn deliver(&mut self, text: &str) -> Result<(), DeliveryError> {
        if let Some(e) = self.deliver_error.clone() {
            return Err(e);
        }
        self.delivered.push(text.to_string());
        Ok(())
    }
}

impl ClipboardWriter for FakePlatform {
    fn write_text(&mut self, text: &str) -> Result<(), DeliveryError> {
        if let Some(e) = self.clipboard_error.clone() {
            return Err(e);
        }
        self.clipboard.push(text.to_string());
        Ok(())
    }
}

impl HotkeyRegistrar for FakePlatform {
    fn unregister_all(&mut self) {
        self.unregister_calls += 1;
        self.bound = None;
    }

    fn register(&mut self, accelerator: &str) -> Result<(), RegisterError> {
        self.registered.push(accelerator.to_string());
        if self.refused.iter().any(|r| r == accelerator) {
            return Err(RegisterError::new(accelerator, "already taken"));
        }
        self.bound = Some(accelerator.to_string());
        Ok(())
    }
}
