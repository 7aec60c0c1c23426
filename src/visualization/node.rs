use eframe::emath::{Pos2, Vec2};
use eframe::epaint::{CircleShape, FontFamily, FontId, Shape, Stroke, TextShape};
use egui::Color32;
use egui_graphs::{DisplayNode, DrawContext, NodeProps};
use petgraph::stable_graph::IndexType;
use petgraph::EdgeType;

pub(crate) trait CutSideInfo {
    fn cut_side(&self) -> CutSide;
    fn is_terminal(&self) -> bool;
    fn vertex_label(&self) -> String;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CutSide {
    Source,
    Sink,
}

#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    label: String,
    side: CutSide,
    terminal: bool,
}

impl NodeData {
    /// `vertex` is 0-based and shown 1-based, like in the text output.
    pub(crate) fn new(vertex: usize, side: CutSide, terminal: bool) -> Self {
        Self {
            label: (vertex + 1).to_string(),
            side,
            terminal,
        }
    }
}

impl CutSideInfo for NodeData {
    fn cut_side(&self) -> CutSide {
        self.side
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn vertex_label(&self) -> String {
        self.label.clone()
    }
}

const RADIUS: f32 = 5.0;
const TERMINAL_RADIUS: f32 = 7.5;

fn side_color(side: CutSide, is_interacted: bool) -> Color32 {
    match (side, is_interacted) {
        (CutSide::Source, false) => Color32::from_rgb(0x80, 0x80, 0xFF),
        (CutSide::Source, true) => Color32::from_rgb(0xB0, 0xB0, 0xFF),
        (CutSide::Sink, false) => Color32::from_rgb(0xFF, 0x80, 0x80),
        (CutSide::Sink, true) => Color32::from_rgb(0xFF, 0xB0, 0xB0),
    }
}

#[derive(Clone)]
pub(crate) struct CustomNodeShape {
    pos: Pos2,
    label_text: String,
    selected: bool,
    dragged: bool,

    radius: f32,
    side: CutSide,
}

impl<N: Clone + CutSideInfo> From<NodeProps<N>> for CustomNodeShape {
    fn from(node_props: NodeProps<N>) -> Self {
        let radius = match node_props.payload.is_terminal() {
            true => TERMINAL_RADIUS,
            false => RADIUS,
        };
        Self {
            pos: node_props.location,
            label_text: node_props.payload.vertex_label(),
            selected: node_props.selected,
            dragged: node_props.dragged,
            radius,
            side: node_props.payload.cut_side(),
        }
    }
}

impl<N: Clone + CutSideInfo, E: Clone, Ty: EdgeType, Ix: IndexType> DisplayNode<N, E, Ty, Ix>
    for CustomNodeShape
{
    fn closest_boundary_point(&self, dir: Vec2) -> Pos2 {
        self.pos + dir.normalized() * self.radius
    }

    fn shapes(&mut self, ctx: &DrawContext) -> Vec<Shape> {
        let fill = side_color(self.side, self.selected || self.dragged);

        let center = ctx.meta.canvas_to_screen_pos(self.pos);
        let radius = ctx.meta.canvas_to_screen_size(self.radius);
        let circle = CircleShape {
            center,
            radius,
            fill,
            stroke: Stroke::default(),
        };

        let galley = ctx.ctx.fonts(|f| {
            f.layout_no_wrap(
                self.label_text.clone(),
                FontId::new(radius, FontFamily::Monospace),
                Color32::BLACK,
            )
        });
        // centered on the circle
        let label_pos = Pos2::new(
            center.x - galley.size().x / 2.,
            center.y - galley.size().y / 2.,
        );
        let label = TextShape::new(label_pos, galley, Color32::BLACK);

        vec![circle.into(), label.into()]
    }

    fn update(&mut self, state: &NodeProps<N>) {
        self.pos = state.location;
        self.label_text = state.payload.vertex_label();
        self.selected = state.selected;
        self.dragged = state.dragged;
        self.side = state.payload.cut_side();
    }

    fn is_inside(&self, pos: Pos2) -> bool {
        (pos - self.pos).length() <= self.radius
    }
}
