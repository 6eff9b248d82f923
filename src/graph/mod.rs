mod build;
mod data;
mod model;

pub use build::{BuildIssue, BuildOutcome, build};
pub use data::{builtin_declarations, load_declarations, parse_declarations};
pub use model::{Graph, GraphNode, MAX_WEIGHT, MIN_WEIGHT, NodeDeclaration};
