pub const APP_NAME: &str = "layout-flip";
pub const CONFIG_NAME: &str = "config";

pub const DEFAULT_ENABLED: bool = true;
pub const DEFAULT_HOTKEY: &str = "Shift+Cmd+L";

pub const HOTKEY_REQUIRED: &str = "Please enter a hotkey combination";
