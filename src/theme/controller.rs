use tracing::{debug, info, warn};

use super::registry::{ThemePreset, ThemeRegistry};
use super::store::{THEME_KEY, ThemeStore};
use super::tokens::{SharedTokens, StyleTokens};

/// Owns the active theme name. `select` is the only mutator; every change
/// is persisted best-effort and republished on the token channel.
pub struct ThemeController<S: ThemeStore> {
    registry: ThemeRegistry,
    active: &'static str,
    store: S,
    tokens: SharedTokens,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn new(registry: ThemeRegistry, store: S, tokens: SharedTokens) -> Self {
        let active = registry.default_preset().name;
        Self {
            registry,
            active,
            store,
            tokens,
        }
    }

    pub fn initialize(&mut self) {
        let stored = match self.store.load(THEME_KEY) {
            Ok(stored) => stored,
            Err(error) => {
                warn!(%error, "failed to read persisted theme; using default");
                None
            }
        };

        self.active = match stored.as_deref().and_then(|name| self.registry.get(name)) {
            Some(preset) => preset.name,
            None => {
                if let Some(name) = &stored {
                    warn!(theme = %name, "ignoring unknown persisted theme");
                }
                self.registry.default_preset().name
            }
        };

        info!(theme = self.active, "theme initialized");
        self.publish();
    }

    /// Returns `false` and leaves everything untouched for unknown names.
    pub fn select(&mut self, name: &str) -> bool {
        let Some(preset) = self.registry.get(name) else {
            debug!(theme = name, "ignoring unknown theme");
            return false;
        };

        self.active = preset.name;
        debug!(theme = self.active, "theme selected");
        self.persist_best_effort();
        self.publish();
        true
    }

    pub fn current(&self) -> &ThemePreset {
        self.registry
            .get(self.active)
            .unwrap_or_else(|| self.registry.default_preset())
    }

    pub fn active_name(&self) -> &'static str {
        self.active
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn tokens(&self) -> &SharedTokens {
        &self.tokens
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn persist_best_effort(&mut self) {
        if let Err(error) = self.store.save(THEME_KEY, self.active) {
            warn!(%error, theme = self.active, "failed to persist theme");
        }
    }

    fn publish(&self) {
        self.tokens
            .publish(StyleTokens::from_colors(&self.current().colors));
    }
}
