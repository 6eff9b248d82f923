use eframe::egui::Color32;

pub const DEFAULT_THEME: &str = "transformer";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticlePattern {
    Random,
    Layered,
    Temporal,
    Bidirectional,
    Opposing,
}

impl ParticlePattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Layered => "layered",
            Self::Temporal => "temporal",
            Self::Bidirectional => "bidirectional",
            Self::Opposing => "opposing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSettings {
    pub count: usize,
    pub speed: f32,
    pub pattern: ParticlePattern,
}

impl ParticleSettings {
    pub fn is_valid(&self) -> bool {
        self.count > 0 && self.speed.is_finite() && self.speed > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub accent: Color32,
    pub domain_a: Color32,
    pub domain_b: Color32,
    pub domain_c: Color32,
}

impl ThemeColors {
    pub fn domains(&self) -> [Color32; 3] {
        [self.domain_a, self.domain_b, self.domain_c]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemePreset {
    pub name: &'static str,
    pub display_name: &'static str,
    pub colors: ThemeColors,
    pub particles: ParticleSettings,
    pub description: &'static str,
}

impl ThemePreset {
    pub fn fallback() -> &'static ThemePreset {
        &TRANSFORMER
    }
}

const CYAN: Color32 = Color32::from_rgb(0x22, 0xd3, 0xee);
const ORANGE: Color32 = Color32::from_rgb(0xf9, 0x73, 0x16);
const PURPLE: Color32 = Color32::from_rgb(0xa8, 0x55, 0xf7);

const TRANSFORMER: ThemePreset = ThemePreset {
    name: "transformer",
    display_name: "Transformer",
    colors: ThemeColors {
        primary: CYAN,
        secondary: PURPLE,
        accent: Color32::from_rgb(0x0e, 0xa5, 0xe9),
        domain_a: CYAN,
        domain_b: ORANGE,
        domain_c: PURPLE,
    },
    particles: ParticleSettings {
        count: 60,
        speed: 1.0,
        pattern: ParticlePattern::Bidirectional,
    },
    description: "Attention flowing both ways across the sequence",
};

fn catalogue() -> Vec<ThemePreset> {
    vec![
        TRANSFORMER,
        ThemePreset {
            name: "cnn",
            display_name: "Convolutional",
            colors: ThemeColors {
                primary: ORANGE,
                secondary: Color32::from_rgb(0xfb, 0x92, 0x3c),
                accent: Color32::from_rgb(0xea, 0x58, 0x0c),
                domain_a: ORANGE,
                domain_b: Color32::from_rgb(0xfa, 0xcc, 0x15),
                domain_c: Color32::from_rgb(0xef, 0x44, 0x44),
            },
            particles: ParticleSettings {
                count: 80,
                speed: 0.5,
                pattern: ParticlePattern::Layered,
            },
            description: "Horizontal feature maps stacked layer on layer",
        },
        ThemePreset {
            name: "rnn",
            display_name: "Recurrent",
            colors: ThemeColors {
                primary: Color32::from_rgb(0x00, 0xff, 0x41),
                secondary: Color32::from_rgb(0x22, 0xc5, 0x5e),
                accent: Color32::from_rgb(0x10, 0xb9, 0x81),
                domain_a: Color32::from_rgb(0x00, 0xff, 0x41),
                domain_b: Color32::from_rgb(0x22, 0xc5, 0x5e),
                domain_c: Color32::from_rgb(0x10, 0xb9, 0x81),
            },
            particles: ParticleSettings {
                count: 50,
                speed: 0.8,
                pattern: ParticlePattern::Temporal,
            },
            description: "State carried right to left through time",
        },
        ThemePreset {
            name: "gan",
            display_name: "Adversarial",
            colors: ThemeColors {
                primary: PURPLE,
                secondary: Color32::from_rgb(0xec, 0x48, 0x99),
                accent: Color32::from_rgb(0x8b, 0x5c, 0xf6),
                domain_a: PURPLE,
                domain_b: Color32::from_rgb(0xec, 0x48, 0x99),
                domain_c: Color32::from_rgb(0x8b, 0x5c, 0xf6),
            },
            particles: ParticleSettings {
                count: 70,
                speed: 1.5,
                pattern: ParticlePattern::Opposing,
            },
            description: "Generator and discriminator pulling in opposite directions",
        },
        ThemePreset {
            name: "classic",
            display_name: "Classic",
            colors: ThemeColors {
                primary: CYAN,
                secondary: ORANGE,
                accent: PURPLE,
                domain_a: CYAN,
                domain_b: ORANGE,
                domain_c: PURPLE,
            },
            particles: ParticleSettings {
                count: 40,
                speed: 1.0,
                pattern: ParticlePattern::Random,
            },
            description: "Vision, audio and reasoning drifting freely",
        },
    ]
}

#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    presets: Vec<ThemePreset>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry {
    pub fn builtin() -> Self {
        Self {
            presets: catalogue(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ThemePreset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn presets(&self) -> impl Iterator<Item = &ThemePreset> {
        self.presets.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.presets.iter().map(|preset| preset.name)
    }

    pub fn default_preset(&self) -> &ThemePreset {
        self.get(DEFAULT_THEME)
            .unwrap_or(ThemePreset::fallback())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn lookup_returns_none_for_unknown_names() {
        let registry = ThemeRegistry::builtin();
        assert!(registry.get("cnn").is_some());
        assert!(registry.get("vaporwave").is_none());
        assert!(registry.get("").is_none());
    }

    #[test]
    fn catalogue_entries_are_well_formed() {
        let registry = ThemeRegistry::builtin();
        let names = registry.names().collect::<HashSet<_>>();
        assert_eq!(names.len(), registry.presets().count());
        assert!(registry.contains(DEFAULT_THEME));

        for preset in registry.presets() {
            assert!(preset.particles.is_valid(), "{} particles", preset.name);
        }
    }

    #[test]
    fn every_pattern_is_used_by_some_preset() {
        let registry = ThemeRegistry::builtin();
        let patterns = registry
            .presets()
            .map(|preset| preset.particles.pattern)
            .collect::<HashSet<_>>();
        assert_eq!(patterns.len(), 5);
    }

    #[test]
    fn default_preset_is_transformer() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.default_preset().name, "transformer");
        assert_eq!(registry.default_preset(), ThemePreset::fallback());
        assert_eq!(ThemePreset::fallback().name, DEFAULT_THEME);
    }
}
