use crate::flow::cut::MinCut;
use crate::flow::network::Capacity;
use crate::flow::residual::FlowMatrix;

/// An edge carrying strictly positive flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowEdge {
    pub from: usize,
    pub to: usize,
    pub flow: Capacity,
}

/// Result of a max-flow run.
#[derive(Clone, Debug)]
pub struct FlowSolution {
    max_flow: Capacity,
    flow: FlowMatrix,
    cut: MinCut,
    rounds: usize,
}

impl FlowSolution {
    pub(crate) fn new(max_flow: Capacity, flow: FlowMatrix, cut: MinCut, rounds: usize) -> Self {
        Self {
            max_flow,
            flow,
            cut,
            rounds,
        }
    }

    pub fn max_flow(&self) -> Capacity {
        self.max_flow
    }

    /// Net flow on `from -> to`, negative when flow runs the other way.
    pub fn flow(&self, from: usize, to: usize) -> Capacity {
        self.flow.get(from, to)
    }

    pub fn min_cut(&self) -> &MinCut {
        &self.cut
    }

    /// Number of augmenting paths used.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Edges with strictly positive flow, ordered by source then target.
    pub fn flow_edges(&self) -> Vec<FlowEdge> {
        self.flow
            .positive_entries()
            .map(|(from, to, flow)| FlowEdge { from, to, flow })
            .collect()
    }
}
