pub mod config;
pub mod graph;
pub mod highlight;
pub mod hooks;
pub mod layout;
pub mod network;
pub mod particles;
pub mod scene;
pub mod theme;

pub use config::{CanvasSize, EngineConfig, LayoutConfig};
pub use graph::{BuildIssue, BuildOutcome, Graph, GraphNode, NodeDeclaration};
pub use highlight::{HighlightMachine, HighlightState, NodeEmphasis};
pub use hooks::{HookId, InteractionHooks};
pub use layout::{NodePositions, radial_layout};
pub use network::{LayeredNetwork, NavigationRequest};
pub use particles::{MAX_LIVE_PARTICLES, Particle, ParticleGenerator};
pub use scene::Scene;
pub use theme::{SharedTokens, ThemeController, ThemePreset, ThemeRegistry, ThemeStore};
