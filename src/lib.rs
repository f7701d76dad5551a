pub mod app;
pub mod config;
pub mod conversion;
pub mod domain;
pub mod hotkeys;
pub mod platform;
pub mod utils;

#[cfg(test)]
mod tests;
