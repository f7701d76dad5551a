//! Application state and the request/response boundary.
//!
//! `App` owns the settings store, the cached config and the platform
//! collaborators. The hotkey callback goes through [`App::on_hotkey`]; the
//! settings window talks to it only through [`App::handle`].

use crate::{
    config::{Config, ConfigStore},
    conversion::{self, ClipboardWriter, SelectionSource, TextSink},
    domain::{outcome::ActionOutcome, text::Converter},
    hotkeys::{self, HotkeyRegistrar},
};

/// Everything the host platform has to provide.
pub trait Platform: SelectionSource + TextSink + ClipboardWriter + HotkeyRegistrar {}

impl<T> Platform for T where T: SelectionSource + TextSink + ClipboardWriter + HotkeyRegistrar {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    GetConfig,
    SaveConfig(Config),
    ConvertText(String),
    PasteConverted(String),
    Quit,
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetConfig => "get_config",
            Self::SaveConfig(_) => "save_config",
            Self::ConvertText(_) => "convert_text",
            Self::PasteConverted(_) => "paste_converted",
            Self::Quit => "quit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Config(Config),
    Saved,
    Converted(String),
    Pasted { converted: String },
    Quitting,
    /// User facing error message.
    Error(String),
}

#[derive(Debug)]
pub struct App<P> {
    store: ConfigStore,
    config: Config,
    converter: Converter<'static>,
    platform: P,
    hotkey_bound: bool,
    quitting: bool,
}

impl<P: Platform> App<P> {
    /// Loads settings and binds the configured hotkey.
    ///
    /// Neither step is fatal: an unreadable store falls back to the defaults and a
    /// refused hotkey leaves the app running without one.
    pub fn start(store: ConfigStore, mut platform: P) -> Self {
        let config = store.load().unwrap_or_else(|e| {
            tracing::warn!(
                path = %store.path().display(),
                error = %e,
                "config load failed, using defaults"
            );
            Config::default()
        });

        let hotkey_bound = hotkeys::rebind(&mut platform, &config.hotkey);

        Self {
            store,
            config,
            converter: Converter::default(),
            platform,
            hotkey_bound,
            quitting: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn hotkey_bound(&self) -> bool {
        self.hotkey_bound
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Hotkey callback.
    pub fn on_hotkey(&mut self) -> ActionOutcome {
        let outcome =
            conversion::convert_selection(&self.config, &self.converter, &mut self.platform);
        tracing::debug!(?outcome, "hotkey handled");
        outcome
    }

    #[tracing::instrument(
        level = "debug",
        skip(self, request),
        fields(request = request.name())
    )]
    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::GetConfig => Response::Config(self.config.clone()),
            Request::SaveConfig(cfg) => self.save_config(cfg),
            Request::ConvertText(text) => Response::Converted(self.converter.convert(&text)),
            Request::PasteConverted(text) => self.paste_converted(&text),
            Request::Quit => self.quit(),
        }
    }

    fn save_config(&mut self, cfg: Config) -> Response {
        let cfg = Config {
            hotkey: cfg.hotkey.trim().to_string(),
            ..cfg
        };

        if let Err(e) = cfg.validate() {
            tracing::debug!(error = %e, "config rejected");
            return Response::Error(e);
        }

        if let Err(e) = self.store.save(&cfg) {
            tracing::warn!(
                path = %self.store.path().display(),
                error = %e,
                "config save failed"
            );
            return Response::Error(format!("Failed to save configuration: {e}"));
        }

        let hotkey_changed = cfg.hotkey != self.config.hotkey;
        self.config = cfg;

        if hotkey_changed {
            self.hotkey_bound = hotkeys::rebind(&mut self.platform, &self.config.hotkey);
        }

        Response::Saved
    }

    fn paste_converted(&mut self, text: &str) -> Response {
        let converted = self.converter.convert(text);

        match self.platform.write_text(&converted) {
            Ok(()) => Response::Pasted { converted },
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                Response::Error(e.user_text().to_string())
            }
        }
    }

    fn quit(&mut self) -> Response {
        if !self.quitting {
            self.platform.unregister_all();
            self.hotkey_bound = false;
            self.quitting = true;
            tracing::info!("quit requested");
        }
        Response::Quitting
    }
}
