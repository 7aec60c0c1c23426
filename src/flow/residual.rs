use petgraph::graph::{Graph, NodeIndex};
use petgraph::Directed;

use crate::flow::network::{Capacity, CapacityNetwork};

/// Edges of the residual graph, weighted by their strictly positive residual capacity.
pub type ResidualGraph = Graph<(), Capacity, Directed, usize>;

/// Flow on top of a borrowed capacity network.
///
/// Flow is kept skew-symmetric: pushing `x` units along `u -> v` records `-x` on `v -> u`, so
/// the residual capacity `capacity - flow` of the reverse entry grows by `x`.
#[derive(Clone, Debug)]
pub struct ResidualNetwork<'a> {
    network: &'a CapacityNetwork,
    flow: Vec<Vec<Capacity>>,
}

impl<'a> ResidualNetwork<'a> {
    pub fn new(network: &'a CapacityNetwork) -> Self {
        let vertex_count = network.vertex_count();
        Self {
            network,
            flow: vec![vec![0; vertex_count]; vertex_count],
        }
    }

    pub fn network(&self) -> &'a CapacityNetwork {
        self.network
    }

    pub fn vertex_count(&self) -> usize {
        self.flow.len()
    }

    pub fn flow(&self, from: usize, to: usize) -> Capacity {
        self.flow[from][to]
    }

    pub fn residual(&self, from: usize, to: usize) -> Capacity {
        self.network.capacity(from, to) - self.flow(from, to)
    }

    /// Pushes `amount` units along `from -> to`.
    ///
    /// Callers must only push a positive amount that fits into the residual capacity; anything
    /// else is a bug and panics.
    pub fn augment(&mut self, from: usize, to: usize, amount: Capacity) {
        assert!(amount > 0, "augmenting ({from}, {to}) by non-positive amount {amount}");
        let residual = self.residual(from, to);
        assert!(
            amount <= residual,
            "augmenting ({from}, {to}) by {amount} exceeds residual capacity {residual}"
        );
        self.flow[from][to] += amount;
        self.flow[to][from] -= amount;
    }

    /// Builds the residual graph, node `i` being vertex `i`.
    pub fn residual_graph(&self) -> ResidualGraph {
        let vertex_count = self.vertex_count();
        let mut graph = ResidualGraph::with_capacity(vertex_count, 0);
        for _ in 0..vertex_count {
            graph.add_node(());
        }
        for from in 0..vertex_count {
            for to in 0..vertex_count {
                let residual = self.residual(from, to);
                if residual > 0 {
                    graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), residual);
                }
            }
        }
        graph
    }

    /// Releases the network borrow, keeping the final flow.
    pub fn freeze(self) -> FlowMatrix {
        FlowMatrix { flow: self.flow }
    }
}

/// Final, read-only flow assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowMatrix {
    flow: Vec<Vec<Capacity>>,
}

impl FlowMatrix {
    pub fn get(&self, from: usize, to: usize) -> Capacity {
        self.flow[from][to]
    }

    /// Entries with strictly positive flow in row-major order.
    pub fn positive_entries(&self) -> impl Iterator<Item = (usize, usize, Capacity)> + '_ {
        self.flow.iter().enumerate().flat_map(|(from, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &flow)| flow > 0)
                .map(move |(to, &flow)| (from, to, flow))
        })
    }
}

#[cfg(test)]
mod tests {
    use petgraph::visit::EdgeRef;

    use crate::flow::network::CapacityNetwork;
    use crate::flow::residual::ResidualNetwork;

    fn chain() -> CapacityNetwork {
        CapacityNetwork::from_adjacency(3, vec![vec![(1, 5)], vec![(2, 3)]]).unwrap()
    }

    #[test]
    fn residual_starts_at_capacity() {
        let network = chain();
        let residual = ResidualNetwork::new(&network);
        assert_eq!(5, residual.residual(0, 1));
        assert_eq!(0, residual.residual(1, 0));
        assert_eq!(0, residual.flow(0, 1));
    }

    #[test]
    fn augment_keeps_skew_symmetry() {
        let network = chain();
        let mut residual = ResidualNetwork::new(&network);
        residual.augment(0, 1, 2);

        assert_eq!(2, residual.flow(0, 1));
        assert_eq!(-2, residual.flow(1, 0));
        assert_eq!(3, residual.residual(0, 1));
        // flow can be sent back along the reverse entry
        assert_eq!(2, residual.residual(1, 0));

        residual.augment(1, 0, 2);
        assert_eq!(0, residual.flow(0, 1));
        assert_eq!(0, residual.flow(1, 0));
    }

    #[test]
    #[should_panic(expected = "exceeds residual capacity")]
    fn augment_beyond_residual_panics() {
        let network = chain();
        let mut residual = ResidualNetwork::new(&network);
        residual.augment(1, 2, 4);
    }

    #[test]
    #[should_panic(expected = "non-positive amount")]
    fn augment_by_zero_panics() {
        let network = chain();
        let mut residual = ResidualNetwork::new(&network);
        residual.augment(0, 1, 0);
    }

    #[test]
    fn residual_graph_contains_reverse_edges() {
        let network = chain();
        let mut residual = ResidualNetwork::new(&network);
        residual.augment(0, 1, 3);
        residual.augment(1, 2, 3);

        let graph = residual.residual_graph();
        let mut edges: Vec<_> = graph
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index(), *edge.weight()))
            .collect();
        edges.sort();
        assert_eq!(vec![(0, 1, 2), (1, 0, 3), (2, 1, 3)], edges);
    }

    #[test]
    fn frozen_flow_lists_positive_entries() {
        let network = chain();
        let mut residual = ResidualNetwork::new(&network);
        residual.augment(0, 1, 3);
        residual.augment(1, 2, 3);

        let flow = residual.freeze();
        assert_eq!(-3, flow.get(2, 1));
        let entries: Vec<_> = flow.positive_entries().collect();
        assert_eq!(vec![(0, 1, 3), (1, 2, 3)], entries);
    }
}
