use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use eframe::egui::{self, Context};
use tracing::info;

use techgraph::graph::{NodeDeclaration, build};
use techgraph::network::NeuronRef;
use techgraph::theme::FileThemeStore;
use techgraph::{
    CanvasSize, EngineConfig, InteractionHooks, LayeredNetwork, Scene, SharedTokens,
    ThemeController, ThemeRegistry,
};

mod controls;
mod network_view;
mod render_utils;
mod view;

const NETWORK_WIDTH: f32 = 700.0;
const NETWORK_HEIGHT: f32 = 300.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewTab {
    TechStack,
    Network,
}

pub struct TechGraphApp {
    theme: ThemeController<FileThemeStore>,
    tokens: SharedTokens,
    scene: Scene,
    canvas: CanvasSize,
    network: LayeredNetwork,
    network_hover: Option<NeuronRef>,
    hovered_node: Option<String>,
    hooks: InteractionHooks,
    identity_clicks: Rc<Cell<u32>>,
    tab: ViewTab,
    last_navigation: Option<String>,
    build_issues: usize,
}

impl TechGraphApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        declarations: &[NodeDeclaration],
        settings_path: PathBuf,
        config: &EngineConfig,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let tokens = SharedTokens::new();
        let mut theme = ThemeController::new(
            ThemeRegistry::builtin(),
            FileThemeStore::new(settings_path),
            tokens.clone(),
        );
        theme.initialize();

        let outcome = build(declarations);
        let build_issues = outcome.issues.len();
        info!(
            nodes = outcome.graph.len(),
            edges = outcome.graph.edge_count(),
            issues = build_issues,
            "graph built"
        );

        let mut scene = Scene::new(outcome.graph, config);
        scene.mount();

        let identity_clicks = Rc::new(Cell::new(0));
        let mut hooks = InteractionHooks::new();
        {
            let identity_clicks = Rc::clone(&identity_clicks);
            hooks.register(move || identity_clicks.set(identity_clicks.get() + 1));
        }

        Self {
            theme,
            tokens,
            scene,
            canvas: config.canvas,
            network: LayeredNetwork::standard(NETWORK_WIDTH, NETWORK_HEIGHT),
            network_hover: None,
            hovered_node: None,
            hooks,
            identity_clicks,
            tab: ViewTab::TechStack,
            last_navigation: None,
            build_issues,
        }
    }

    fn switch_tab(&mut self, tab: ViewTab) {
        if self.tab == tab {
            return;
        }

        match tab {
            ViewTab::TechStack => self.scene.mount(),
            ViewTab::Network => {
                self.scene.unmount();
                self.hovered_node = None;
            }
        }
        self.network_hover = None;
        self.tab = tab;
    }

    fn navigate(&mut self, query: String) {
        info!(%query, "navigation requested");
        self.last_navigation = Some(query);
    }
}

impl eframe::App for TechGraphApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            ViewTab::TechStack => self.draw_tech_graph(ui),
            ViewTab::Network => self.draw_network(ui),
        });

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}
