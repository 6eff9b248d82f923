use eframe::egui::{Color32, Pos2, pos2};

use crate::theme::ThemeColors;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    Vision,
    Audio,
    Reasoning,
}

impl Domain {
    pub fn label(self) -> &'static str {
        match self {
            Self::Vision => "Vision",
            Self::Audio => "Audio",
            Self::Reasoning => "Reasoning",
        }
    }

    pub fn color(self, colors: &ThemeColors) -> Color32 {
        match self {
            Self::Vision => colors.domain_a,
            Self::Audio => colors.domain_b,
            Self::Reasoning => colors.domain_c,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Input,
    Hidden,
    Output,
}

impl Tier {
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Input | Self::Output)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct NetworkLayer {
    pub id: &'static str,
    pub label: &'static str,
    pub neurons: usize,
    /// Horizontal placement as a percentage of the canvas width.
    pub x_percent: f32,
    pub tier: Tier,
    pub domains: &'static [Domain],
}

const IO_DOMAINS: &[Domain] = &[Domain::Vision, Domain::Audio, Domain::Reasoning];

pub const NETWORK_LAYERS: [NetworkLayer; 5] = [
    NetworkLayer {
        id: "input",
        label: "Input",
        neurons: 3,
        x_percent: 15.0,
        tier: Tier::Input,
        domains: IO_DOMAINS,
    },
    NetworkLayer {
        id: "hidden1",
        label: "Feature Extraction",
        neurons: 5,
        x_percent: 35.0,
        tier: Tier::Hidden,
        domains: &[],
    },
    NetworkLayer {
        id: "hidden2",
        label: "Processing",
        neurons: 4,
        x_percent: 55.0,
        tier: Tier::Hidden,
        domains: &[],
    },
    NetworkLayer {
        id: "hidden3",
        label: "Integration",
        neurons: 3,
        x_percent: 75.0,
        tier: Tier::Hidden,
        domains: &[],
    },
    NetworkLayer {
        id: "output",
        label: "Output",
        neurons: 3,
        x_percent: 95.0,
        tier: Tier::Output,
        domains: IO_DOMAINS,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NeuronRef {
    pub layer: usize,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neuron {
    pub id: NeuronRef,
    pub position: Pos2,
    pub tier: Tier,
    pub domain: Option<Domain>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeuronConnection {
    pub from: NeuronRef,
    pub to: NeuronRef,
    /// Domain of the source neuron; hidden sources have none.
    pub domain: Option<Domain>,
    pub delay: usize,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub category: String,
}

impl NavigationRequest {
    pub fn query(&self) -> String {
        format!("category={}", self.category)
    }
}

pub struct LayeredNetwork {
    layers: Vec<NetworkLayer>,
    neurons: Vec<Vec<Neuron>>,
}

impl LayeredNetwork {
    pub fn new(layers: &[NetworkLayer], width: f32, height: f32) -> Self {
        let neurons = layers
            .iter()
            .enumerate()
            .map(|(layer_index, layer)| {
                let spacing = height / (layer.neurons + 1) as f32;
                let x = width * layer.x_percent / 100.0;
                (0..layer.neurons)
                    .map(|index| Neuron {
                        id: NeuronRef {
                            layer: layer_index,
                            index,
                        },
                        position: pos2(x, spacing * (index + 1) as f32),
                        tier: layer.tier,
                        domain: layer.domains.get(index).copied(),
                    })
                    .collect()
            })
            .collect();

        Self {
            layers: layers.to_vec(),
            neurons,
        }
    }

    pub fn standard(width: f32, height: f32) -> Self {
        Self::new(&NETWORK_LAYERS, width, height)
    }

    pub fn layers(&self) -> &[NetworkLayer] {
        &self.layers
    }

    pub fn layer_neurons(&self, layer: usize) -> &[Neuron] {
        self.neurons.get(layer).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn neurons(&self) -> impl Iterator<Item = &Neuron> {
        self.neurons.iter().flatten()
    }

    pub fn neuron(&self, id: NeuronRef) -> Option<&Neuron> {
        self.neurons.get(id.layer)?.get(id.index)
    }

    pub fn hover_target(&self, id: NeuronRef) -> Option<NeuronRef> {
        self.neuron(id)
            .filter(|neuron| neuron.tier.is_interactive())
            .map(|neuron| neuron.id)
    }

    pub fn connections(&self, hovered: Option<NeuronRef>) -> Vec<NeuronConnection> {
        let mut connections = Vec::new();
        for pair in self.neurons.windows(2) {
            let [current, next] = pair else {
                continue;
            };
            for from in current {
                for to in next {
                    connections.push(NeuronConnection {
                        from: from.id,
                        to: to.id,
                        domain: from.domain,
                        delay: from.id.index + to.id.index,
                        active: hovered == Some(from.id),
                    });
                }
            }
        }
        connections
    }

    pub fn click(&self, id: NeuronRef) -> Option<NavigationRequest> {
        let neuron = self.neuron(id)?;
        if !neuron.tier.is_interactive() {
            return None;
        }
        neuron.domain.map(|domain| NavigationRequest {
            category: domain.label().to_owned(),
        })
    }

    pub fn hit_test(&self, point: Pos2, radius_for: impl Fn(Tier) -> f32) -> Option<NeuronRef> {
        self.neurons()
            .filter_map(|neuron| {
                let distance = neuron.position.distance(point);
                (distance <= radius_for(neuron.tier)).then_some((neuron.id, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> LayeredNetwork {
        LayeredNetwork::standard(700.0, 300.0)
    }

    #[test]
    fn neurons_are_spaced_evenly_within_layers() {
        let network = network();
        let input = network.layer_neurons(0);
        assert_eq!(input.len(), 3);
        assert_eq!(input[0].position, pos2(105.0, 75.0));
        assert_eq!(input[2].position, pos2(105.0, 225.0));

        let hidden = network.layer_neurons(1);
        assert_eq!(hidden.len(), 5);
        assert_eq!(hidden[0].position.y, 50.0);
    }

    #[test]
    fn only_io_neurons_carry_domains() {
        let network = network();
        assert_eq!(network.layer_neurons(0)[1].domain, Some(Domain::Audio));
        assert_eq!(network.layer_neurons(4)[2].domain, Some(Domain::Reasoning));
        assert!(network.layer_neurons(2).iter().all(|n| n.domain.is_none()));
    }

    #[test]
    fn connections_fully_link_adjacent_layers() {
        let connections = network().connections(None);
        assert_eq!(connections.len(), 3 * 5 + 5 * 4 + 4 * 3 + 3 * 3);
        assert!(connections.iter().all(|connection| !connection.active));
    }

    #[test]
    fn hovering_lights_outgoing_connections_only() {
        let hovered = NeuronRef { layer: 0, index: 1 };
        let connections = network().connections(Some(hovered));

        let active = connections
            .iter()
            .filter(|connection| connection.active)
            .collect::<Vec<_>>();
        assert_eq!(active.len(), 5);
        assert!(active.iter().all(|connection| connection.from == hovered));
        assert!(active.iter().all(|c| c.domain == Some(Domain::Audio)));
    }

    #[test]
    fn clicking_io_neurons_requests_navigation() {
        let network = network();
        let request = network.click(NeuronRef { layer: 4, index: 0 });
        assert_eq!(
            request,
            Some(NavigationRequest {
                category: "Vision".to_owned()
            })
        );
        assert_eq!(request.map(|r| r.query()), Some("category=Vision".to_owned()));

        assert_eq!(network.click(NeuronRef { layer: 2, index: 0 }), None);
        assert_eq!(network.click(NeuronRef { layer: 9, index: 0 }), None);
    }

    #[test]
    fn hidden_neurons_are_not_hover_targets() {
        let network = network();
        assert_eq!(network.hover_target(NeuronRef { layer: 1, index: 0 }), None);
        assert!(network.hover_target(NeuronRef { layer: 0, index: 0 }).is_some());
    }

    #[test]
    fn hit_test_picks_the_closest_neuron() {
        let network = network();
        let hit = network.hit_test(pos2(107.0, 76.0), |tier| {
            if tier.is_interactive() { 24.0 } else { 14.0 }
        });
        assert_eq!(hit, Some(NeuronRef { layer: 0, index: 0 }));
        assert_eq!(network.hit_test(pos2(0.0, 0.0), |_| 24.0), None);
    }
}
