pub use layout_flip_core::text::{CharacterMap, Converter, convert_text};
