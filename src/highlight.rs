//! Hover/pin highlighting over the directed graph.
//!
//! A connection `u → v` is lit only when the active node's own declared
//! neighbors contain the other endpoint, so one-sided declarations light up
//! from one side only.

use std::collections::HashSet;

use crate::graph::Graph;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HighlightState {
    #[default]
    Idle,
    Hovering(String),
    Pinned(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeEmphasis {
    Active,
    Connected,
    Dimmed,
    Normal,
}

impl NodeEmphasis {
    pub fn opacity(self) -> f32 {
        match self {
            Self::Active => 1.0,
            Self::Connected => 0.8,
            Self::Dimmed | Self::Normal => 0.5,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HighlightMachine {
    state: HighlightState,
}

impl HighlightMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self.state, HighlightState::Pinned(_))
    }

    pub fn active(&self) -> Option<&str> {
        match &self.state {
            HighlightState::Idle => None,
            HighlightState::Hovering(id) | HighlightState::Pinned(id) => Some(id.as_str()),
        }
    }

    pub fn pointer_enter(&mut self, id: &str) {
        if self.is_pinned() {
            return;
        }
        self.state = HighlightState::Hovering(id.to_owned());
    }

    pub fn pointer_leave(&mut self, id: &str) {
        if let HighlightState::Hovering(current) = &self.state
            && current == id
        {
            self.state = HighlightState::Idle;
        }
    }

    pub fn click(&mut self, id: &str) {
        self.state = match &self.state {
            HighlightState::Pinned(current) if current == id => HighlightState::Idle,
            _ => HighlightState::Pinned(id.to_owned()),
        };
    }

    pub fn reset(&mut self) {
        self.state = HighlightState::Idle;
    }

    pub fn active_connections<'g>(&self, graph: &'g Graph) -> HashSet<&'g str> {
        self.active()
            .and_then(|id| graph.node(id))
            .map(|node| node.neighbors.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_connection_active(&self, graph: &Graph, source: &str, target: &str) -> bool {
        let Some(active) = self.active() else {
            return false;
        };
        let other = if active == source {
            target
        } else if active == target {
            source
        } else {
            return false;
        };

        graph
            .node(active)
            .is_some_and(|node| node.has_neighbor(other))
    }

    pub fn emphasis(&self, graph: &Graph, id: &str) -> NodeEmphasis {
        match self.active() {
            None => NodeEmphasis::Normal,
            Some(active) if active == id => NodeEmphasis::Active,
            Some(active) => {
                if graph.node(active).is_some_and(|node| node.has_neighbor(id)) {
                    NodeEmphasis::Connected
                } else {
                    NodeEmphasis::Dimmed
                }
            }
        }
    }
}
