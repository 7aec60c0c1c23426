use petgraph::graph::NodeIndex;
use petgraph::visit::Dfs;

use crate::flow::network::Capacity;
use crate::flow::residual::ResidualNetwork;

/// An s-t cut given by the vertices still reachable from the source in the residual graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinCut {
    /// Reachable vertices, ascending.
    pub source_set: Vec<usize>,
    /// Remaining vertices, ascending.
    pub sink_set: Vec<usize>,
    /// Edges with positive capacity leaving the source set, in row-major order.
    pub cut_set: Vec<(usize, usize)>,
    /// Summed capacity of `cut_set`.
    pub capacity: Capacity,
}

impl MinCut {
    /// Reads the cut off a residual network. Only a maximum flow yields a minimum cut.
    pub fn extract(residual: &ResidualNetwork, source: usize) -> Self {
        let reachable = reachable_from(residual, source);
        let (source_set, sink_set): (Vec<usize>, Vec<usize>) =
            (0..reachable.len()).partition(|&vertex| reachable[vertex]);

        let network = residual.network();
        let mut cut_set = vec![];
        let mut capacity = 0;
        for &from in &source_set {
            for &to in &sink_set {
                let edge_capacity = network.capacity(from, to);
                if edge_capacity > 0 {
                    cut_set.push((from, to));
                    capacity += edge_capacity;
                }
            }
        }

        Self {
            source_set,
            sink_set,
            cut_set,
            capacity,
        }
    }

    pub fn is_source_side(&self, vertex: usize) -> bool {
        self.source_set.binary_search(&vertex).is_ok()
    }

    pub fn is_cut_edge(&self, from: usize, to: usize) -> bool {
        self.is_source_side(from) && !self.is_source_side(to)
    }
}

fn reachable_from(residual: &ResidualNetwork, source: usize) -> Vec<bool> {
    let graph = residual.residual_graph();
    let mut reachable = vec![false; residual.vertex_count()];
    let mut dfs = Dfs::new(&graph, NodeIndex::new(source));
    while let Some(vertex) = dfs.next(&graph) {
        reachable[vertex.index()] = true;
    }
    reachable
}
