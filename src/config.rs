#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub category_radius: f32,
    pub member_radius: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            category_radius: 200.0,
            member_radius: 60.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineConfig {
    pub layout: LayoutConfig,
    pub canvas: CanvasSize,
    /// Fixed particle seed; `None` seeds from entropy.
    pub particle_seed: Option<u64>,
}
