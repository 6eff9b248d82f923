use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use super::model::NodeDeclaration;

const BUILTIN_TECH_STACK: &str = include_str!("../../data/tech_stack.json");

pub fn parse_declarations(raw: &str) -> Result<Vec<NodeDeclaration>> {
    let declarations: Vec<NodeDeclaration> =
        serde_json::from_str(raw).context("invalid graph declaration JSON")?;

    if declarations.is_empty() {
        Err(anyhow!("graph declaration list is empty"))
    } else {
        Ok(declarations)
    }
}

pub fn builtin_declarations() -> Result<Vec<NodeDeclaration>> {
    parse_declarations(BUILTIN_TECH_STACK).context("built-in tech stack catalogue is malformed")
}

pub fn load_declarations(path: &Path) -> Result<Vec<NodeDeclaration>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read graph data from {}", path.display()))?;
    parse_declarations(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{BuildIssue, build};

    #[test]
    fn builtin_catalogue_parses() {
        let declarations = builtin_declarations().expect("built-in data parses");
        assert_eq!(declarations.first().map(|d| d.id.as_str()), Some("Python"));

        let outcome = build(&declarations);
        assert_eq!(outcome.graph.len(), declarations.len());
        assert_eq!(
            outcome.graph.categories(),
            vec![
                "language",
                "ml",
                "framework",
                "vision",
                "audio",
                "symbolic",
                "cloud",
                "tool"
            ]
        );
    }

    #[test]
    fn builtin_catalogue_has_known_dangling_references() {
        let declarations = builtin_declarations().expect("built-in data parses");
        let outcome = build(&declarations);

        assert!(outcome.issues.contains(&BuildIssue::DanglingNeighbor {
            node: "Git".to_owned(),
            neighbor: "JavaScript".to_owned(),
        }));
        assert!(
            outcome
                .issues
                .iter()
                .all(|issue| matches!(issue, BuildIssue::DanglingNeighbor { .. }))
        );
    }

    #[test]
    fn missing_weight_and_neighbors_default() {
        let declarations =
            parse_declarations(r#"[{ "id": "Rust", "category": "language" }]"#).expect("parses");
        assert_eq!(declarations[0].weight, 0.0);
        assert!(declarations[0].neighbors.is_empty());
    }

    #[test]
    fn empty_or_invalid_input_is_rejected() {
        assert!(parse_declarations("[]").is_err());
        assert!(parse_declarations("{\"id\": 1}").is_err());
    }
}
