use eframe::{run_native, App, CreationContext};
use egui::{Context, Style, Visuals};
use egui_graphs::{GraphView, SettingsInteraction, SettingsStyle};
use itertools::Itertools;
use log::info;
use petgraph::prelude::StableDiGraph;
use petgraph::stable_graph::DefaultIx;
use petgraph::visit::EdgeRef;
use petgraph::Directed;

use crate::flow::{Capacity, CapacityNetwork, FlowSolution};
use crate::visualization::edge::{CustomEdgeShape, EdgeData};
use crate::visualization::node::{CustomNodeShape, CutSide, NodeData};

type FlowGraph =
    egui_graphs::Graph<NodeData, EdgeData, Directed, DefaultIx, CustomNodeShape, CustomEdgeShape>;

struct GraphApp {
    graph: FlowGraph,
    max_flow: Capacity,
    cut_capacity: Capacity,
    source_side: String,
    sink_side: String,
}

impl GraphApp {
    fn new(network: &CapacityNetwork, solution: &FlowSolution, _: &CreationContext<'_>) -> Self {
        let cut = solution.min_cut();
        Self {
            graph: generate_graph(network, solution),
            max_flow: solution.max_flow(),
            cut_capacity: cut.capacity,
            source_side: vertex_list(&cut.source_set),
            sink_side: vertex_list(&cut.sink_set),
        }
    }
}

impl App for GraphApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        let settings_style = &SettingsStyle::new().with_labels_always(true);
        let interaction_settings = &SettingsInteraction::new()
            .with_dragging_enabled(true)
            .with_node_clicking_enabled(true)
            .with_node_selection_enabled(true);

        egui::SidePanel::left("summary").show(ctx, |ui| {
            ui.heading("Max flow / min cut");
            ui.label(format!("Max flow: {}", self.max_flow));
            ui.label(format!("Cut capacity: {}", self.cut_capacity));
            ui.label(format!("Source side: {}", self.source_side));
            ui.label(format!("Sink side: {}", self.sink_side));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(
                &mut GraphView::<_, _, _, _, CustomNodeShape, CustomEdgeShape>::new(
                    &mut self.graph,
                )
                .with_styles(settings_style)
                .with_interactions(interaction_settings),
            );
        });
    }
}

fn vertex_list(vertices: &[usize]) -> String {
    vertices.iter().map(|vertex| vertex + 1).join(", ")
}

fn generate_graph(network: &CapacityNetwork, solution: &FlowSolution) -> FlowGraph {
    let capacities = network.to_graph();
    let cut = solution.min_cut();
    let (source, sink) = (network.source(), network.sink());

    let mut g = StableDiGraph::with_capacity(capacities.node_count(), capacities.edge_count());
    (0usize..capacities.node_count()).for_each(|vertex| {
        let side = match cut.is_source_side(vertex) {
            true => CutSide::Source,
            false => CutSide::Sink,
        };
        g.add_node(NodeData::new(vertex, side, vertex == source || vertex == sink));
    });

    capacities.edge_references().for_each(|edge| {
        let (from, to) = (edge.source().index(), edge.target().index());
        let data = EdgeData::new(
            solution.flow(from, to),
            *edge.weight(),
            cut.is_cut_edge(from, to),
        );
        g.add_edge(edge.source(), edge.target(), data);
    });

    egui_graphs::Graph::from(&g)
}

/// Opens a window showing `network` with the flow and cut of `solution`. Blocks until closed.
pub fn draw_network(
    network: &CapacityNetwork,
    solution: &FlowSolution,
) -> Result<(), eframe::Error> {
    info!("opening viewer for {} vertices", network.vertex_count());
    let network = network.clone();
    let solution = solution.clone();
    let native_options = eframe::NativeOptions::default();
    run_native(
        "Max Flow / Min Cut",
        native_options,
        Box::new(move |cc| {
            let style = Style {
                visuals: Visuals::dark(),
                ..Style::default()
            };
            cc.egui_ctx.set_style(style);
            Box::new(GraphApp::new(&network, &solution, cc))
        }),
    )
}
