//! Theme adapters.
//!
//! - `BasicTheme` - Built-in JSON Resume theme

mod basic_theme;

pub use basic_theme::BasicTheme;
