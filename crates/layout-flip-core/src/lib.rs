//! Latin (US QWERTY) <-> Cyrillic (ЙЦУКЕН) keyboard layout text conversion.
//!
//! The table lives in [`text::mapping`]; [`text::convert`] applies it to strings.
//! Both are pure: the standard map is built once and shared read-only.

pub mod text;

pub use text::{CharacterMap, Converter, LAYOUT_PAIRS, convert_text};

#[cfg(test)]
mod tests;
