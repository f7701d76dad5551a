pub mod convert;
pub mod mapping;

pub use convert::{Converter, convert_text};
pub use mapping::{CharacterMap, LAYOUT_PAIRS};
