use std::io::{self, Write};
use std::iter;

use itertools::Itertools;

use crate::flow::FlowSolution;

/// Renders a solution with 1-based vertices: the max flow, the count and list of `u v flow`
/// edges carrying flow, then the count and list of source-side vertices.
pub fn format_solution(solution: &FlowSolution) -> String {
    let flow_edges = solution.flow_edges();
    let source_set = &solution.min_cut().source_set;

    let header = [
        solution.max_flow().to_string(),
        flow_edges.len().to_string(),
    ];
    let edge_lines = flow_edges
        .iter()
        .map(|edge| format!("{} {} {}", edge.from + 1, edge.to + 1, edge.flow));
    let cut_lines = iter::once(source_set.len().to_string())
        .chain(source_set.iter().map(|vertex| (vertex + 1).to_string()));

    let mut text = header
        .into_iter()
        .chain(edge_lines)
        .chain(cut_lines)
        .join("\n");
    text.push('\n');
    text
}

pub fn write_solution<W: Write>(writer: &mut W, solution: &FlowSolution) -> io::Result<()> {
    writer.write_all(format_solution(solution).as_bytes())
}
