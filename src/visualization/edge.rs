use eframe::emath::{Pos2, Vec2};
use eframe::epaint::{FontFamily, FontId, Shape, TextShape};
use egui::{Color32, Stroke};
use egui_graphs::{DisplayEdge, DisplayNode, DrawContext, EdgeProps, Metadata, Node};
use petgraph::stable_graph::IndexType;
use petgraph::EdgeType;

use crate::flow::Capacity;

pub(crate) trait FlowInfo {
    fn flow(&self) -> Capacity;
    fn capacity(&self) -> Capacity;
    fn is_cut_edge(&self) -> bool;
}

#[derive(Clone, Debug)]
pub(crate) struct EdgeData {
    flow: Capacity,
    capacity: Capacity,
    is_cut_edge: bool,
}

impl EdgeData {
    pub(crate) fn new(flow: Capacity, capacity: Capacity, is_cut_edge: bool) -> Self {
        Self {
            flow,
            capacity,
            is_cut_edge,
        }
    }
}

impl FlowInfo for EdgeData {
    fn flow(&self) -> Capacity {
        self.flow
    }

    fn capacity(&self) -> Capacity {
        self.capacity
    }

    fn is_cut_edge(&self) -> bool {
        self.is_cut_edge
    }
}

const CUT_EDGE: Color32 = Color32::from_rgb(0x90, 0xEE, 0x90);
const IDLE_WIDTH: f32 = 1.;
const FLOW_WIDTH: f32 = 2.5;
// keeps u -> v and v -> u apart
const SIDE_OFFSET: f32 = 2.;

#[derive(Clone)]
pub(crate) struct CustomEdgeShape {
    selected: bool,
    label_text: String,

    width: f32,
    tip_size: f32,
    tip_angle: f32,
    is_cut_edge: bool,
    carries_flow: bool,
}

impl<E: Clone + FlowInfo> From<EdgeProps<E>> for CustomEdgeShape {
    fn from(edge_props: EdgeProps<E>) -> Self {
        let carries_flow = edge_props.payload.flow() > 0;
        Self {
            selected: edge_props.selected,
            label_text: flow_label(&edge_props.payload),

            width: match carries_flow {
                true => FLOW_WIDTH,
                false => IDLE_WIDTH,
            },
            tip_size: 10.,
            tip_angle: std::f32::consts::TAU / 30.,
            is_cut_edge: edge_props.payload.is_cut_edge(),
            carries_flow,
        }
    }
}

fn flow_label<E: FlowInfo>(payload: &E) -> String {
    format!("{}/{}", payload.flow().max(0), payload.capacity())
}

impl CustomEdgeShape {
    fn color(&self, ctx: &DrawContext) -> Color32 {
        if self.is_cut_edge {
            return CUT_EDGE;
        }
        let style = ctx.ctx.style();
        match self.selected || self.carries_flow {
            true => style.visuals.widgets.active.fg_stroke.color,
            false => style.visuals.widgets.inactive.fg_stroke.color,
        }
    }

    /// Arrow head at `end`, the line is shortened to start of the head.
    fn tip_points(&self, start: Pos2, end: &mut Pos2) -> Vec<Pos2> {
        let dir = (*end - start).normalized();
        let tip = *end;
        let side_1 = tip - rotate_vector(dir, self.tip_angle) * self.tip_size;
        let side_2 = tip - rotate_vector(dir, -self.tip_angle) * self.tip_size;
        *end = tip - dir * self.tip_size;
        vec![tip, side_1, side_2]
    }

    fn to_screen(metadata: &Metadata, points: &mut [Pos2]) {
        for point in points.iter_mut() {
            *point = metadata.canvas_to_screen_pos(*point);
        }
    }
}

impl<N: Clone, E: Clone + FlowInfo, Ty: EdgeType, Ix: IndexType, D: DisplayNode<N, E, Ty, Ix>>
    DisplayEdge<N, E, Ty, Ix, D> for CustomEdgeShape
{
    fn shapes(
        &mut self,
        start_node: &Node<N, E, Ty, Ix, D>,
        end_node: &Node<N, E, Ty, Ix, D>,
        ctx: &DrawContext,
    ) -> Vec<Shape> {
        let color = self.color(ctx);
        let mut stroke = Stroke::new(self.width, color);
        stroke.width = ctx.meta.canvas_to_screen_size(stroke.width);

        let dir = (end_node.location() - start_node.location()).normalized();
        let offset = dir.rot90() * SIDE_OFFSET;
        let start = start_node.display().closest_boundary_point(dir) + offset;
        let mut end = end_node.display().closest_boundary_point(-dir) + offset;

        let mut tip_points = match ctx.is_directed {
            true => self.tip_points(start, &mut end),
            false => vec![],
        };
        let mut line_points = [start, end];
        Self::to_screen(ctx.meta, &mut line_points);
        Self::to_screen(ctx.meta, &mut tip_points);

        let mut res = vec![Shape::line_segment(line_points, stroke)];
        if !tip_points.is_empty() {
            res.push(Shape::convex_polygon(tip_points, color, Stroke::default()));
        }

        let galley = ctx.ctx.fonts(|f| {
            f.layout_no_wrap(
                self.label_text.clone(),
                FontId::new(ctx.meta.canvas_to_screen_size(4.), FontFamily::Monospace),
                color,
            )
        });
        let middle = ctx
            .meta
            .canvas_to_screen_pos(start + (end - start) / 2. + offset * 2.);
        let label_pos = Pos2::new(
            middle.x - galley.size().x / 2.,
            middle.y - galley.size().y / 2.,
        );
        res.push(TextShape::new(label_pos, galley, color).into());

        res
    }

    fn update(&mut self, state: &EdgeProps<E>) {
        self.selected = state.selected;
        self.label_text = flow_label(&state.payload);
    }

    fn is_inside(
        &self,
        start: &Node<N, E, Ty, Ix, D>,
        end: &Node<N, E, Ty, Ix, D>,
        pos: Pos2,
    ) -> bool {
        distance_to_segment(start.location(), end.location(), pos) <= self.width
    }
}

fn distance_to_segment(a: Pos2, b: Pos2, point: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq == 0. {
        return (point - a).length();
    }
    let t = ((point - a).dot(ab) / length_sq).clamp(0., 1.);
    (point - (a + ab * t)).length()
}

fn rotate_vector(vec: Vec2, angle: f32) -> Vec2 {
    let cos = angle.cos();
    let sin = angle.sin();
    Vec2::new(cos * vec.x - sin * vec.y, sin * vec.x + cos * vec.y)
}
