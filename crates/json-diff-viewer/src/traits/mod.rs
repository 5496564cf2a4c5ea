//! Extension traits for customizing diff tree rendering.

mod theme_provider;

pub use theme_provider::{DefaultTheme, ThemeProvider};
