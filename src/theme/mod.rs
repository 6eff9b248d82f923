mod controller;
mod registry;
mod store;
mod tokens;

pub use controller::ThemeController;
pub use registry::{
    DEFAULT_THEME, ParticlePattern, ParticleSettings, ThemeColors, ThemePreset, ThemeRegistry,
};
pub use store::{FileThemeStore, MemoryThemeStore, StoreError, THEME_KEY, ThemeStore};
pub use tokens::{SharedTokens, StyleTokens, TokenName};
