use petgraph::graph::{DiGraph, NodeIndex};
use thiserror::Error;

/// Integer capacity (and flow) value.
pub type Capacity = i64;

/// Largest accepted edge capacity. Keeps residuals and flow totals far from `i64` overflow.
pub const MAX_CAPACITY: Capacity = i32::MAX as Capacity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("a flow network needs at least one vertex")]
    EmptyNetwork,
    #[error("vertex {vertex} is out of range for a network of {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
    #[error("edge ({from}, {to}) has negative capacity {capacity}")]
    NegativeCapacity {
        from: usize,
        to: usize,
        capacity: Capacity,
    },
    #[error("edge ({from}, {to}) has capacity {capacity}, above the limit of {}", MAX_CAPACITY)]
    CapacityTooLarge {
        from: usize,
        to: usize,
        capacity: Capacity,
    },
}

/// Directed capacities between every ordered pair of vertices.
///
/// Vertex `0` is the source and vertex `n - 1` the sink. Missing edges have capacity `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapacityNetwork {
    capacity: Vec<Vec<Capacity>>,
}

impl CapacityNetwork {
    pub fn new(vertex_count: usize) -> Result<Self, FlowError> {
        if vertex_count == 0 {
            return Err(FlowError::EmptyNetwork);
        }
        Ok(Self {
            capacity: vec![vec![0; vertex_count]; vertex_count],
        })
    }

    /// Builds a network from one row of `(neighbor, capacity)` pairs per vertex, starting at
    /// vertex `0`. Vertices without a row have no outgoing edges.
    pub fn from_adjacency<R, E>(vertex_count: usize, rows: R) -> Result<Self, FlowError>
    where
        R: IntoIterator<Item = E>,
        E: IntoIterator<Item = (usize, Capacity)>,
    {
        let mut network = Self::new(vertex_count)?;
        for (from, row) in rows.into_iter().enumerate() {
            for (to, capacity) in row {
                network.set_capacity(from, to, capacity)?;
            }
        }
        Ok(network)
    }

    /// Sets the capacity of `from -> to`, replacing any earlier value.
    pub fn set_capacity(
        &mut self,
        from: usize,
        to: usize,
        capacity: Capacity,
    ) -> Result<(), FlowError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if capacity < 0 {
            return Err(FlowError::NegativeCapacity { from, to, capacity });
        }
        if capacity > MAX_CAPACITY {
            return Err(FlowError::CapacityTooLarge { from, to, capacity });
        }
        self.capacity[from][to] = capacity;
        Ok(())
    }

    /// Panics if either vertex is out of range.
    pub fn capacity(&self, from: usize, to: usize) -> Capacity {
        self.capacity[from][to]
    }

    pub fn vertex_count(&self) -> usize {
        self.capacity.len()
    }

    pub fn source(&self) -> usize {
        0
    }

    pub fn sink(&self) -> usize {
        self.vertex_count() - 1
    }

    /// Edges with positive capacity in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Capacity)> + '_ {
        self.capacity.iter().enumerate().flat_map(|(from, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &capacity)| capacity > 0)
                .map(move |(to, &capacity)| (from, to, capacity))
        })
    }

    /// One graph edge per positive capacity, node `i` being vertex `i`.
    pub fn to_graph(&self) -> DiGraph<(), Capacity> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edges().count());
        for _ in 0..self.vertex_count() {
            graph.add_node(());
        }
        for (from, to, capacity) in self.edges() {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), capacity);
        }
        graph
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), FlowError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(FlowError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::flow::network::{CapacityNetwork, FlowError, MAX_CAPACITY};

    #[test]
    fn empty_network_is_rejected() {
        assert_eq!(Err(FlowError::EmptyNetwork), CapacityNetwork::new(0));
    }

    #[test]
    fn source_and_sink() {
        let network = CapacityNetwork::new(5).unwrap();
        assert_eq!(0, network.source());
        assert_eq!(4, network.sink());

        let single = CapacityNetwork::new(1).unwrap();
        assert_eq!(single.source(), single.sink());
    }

    #[test]
    fn last_declaration_wins() {
        let network =
            CapacityNetwork::from_adjacency(3, vec![vec![(1, 5), (2, 4), (1, 7)], vec![]]).unwrap();
        assert_eq!(7, network.capacity(0, 1));
        assert_eq!(4, network.capacity(0, 2));
        assert_eq!(0, network.capacity(1, 0));
    }

    #[test]
    fn capacities_are_directed() {
        let network = CapacityNetwork::from_adjacency(2, vec![vec![(1, 3)], vec![]]).unwrap();
        assert_eq!(3, network.capacity(0, 1));
        assert_eq!(0, network.capacity(1, 0));
    }

    #[test]
    fn sink_edges_are_kept() {
        let network =
            CapacityNetwork::from_adjacency(2, vec![vec![], vec![(0, 2)]]).unwrap();
        assert_eq!(2, network.capacity(1, 0));
    }

    #[test]
    fn out_of_range_neighbor() {
        let result = CapacityNetwork::from_adjacency(2, vec![vec![(2, 1)]]);
        assert_eq!(
            Err(FlowError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            }),
            result
        );
    }

    #[test]
    fn too_many_rows() {
        let result = CapacityNetwork::from_adjacency(1, vec![vec![], vec![(0, 1)]]);
        assert!(matches!(
            result,
            Err(FlowError::VertexOutOfRange { vertex: 1, .. })
        ));
    }

    #[test]
    fn negative_capacity() {
        let mut network = CapacityNetwork::new(2).unwrap();
        assert_eq!(
            Err(FlowError::NegativeCapacity {
                from: 0,
                to: 1,
                capacity: -3
            }),
            network.set_capacity(0, 1, -3)
        );
        assert_eq!(0, network.capacity(0, 1));
    }

    #[test]
    fn capacity_limit() {
        let mut network = CapacityNetwork::new(2).unwrap();
        assert_eq!(Ok(()), network.set_capacity(0, 1, MAX_CAPACITY));
        assert_eq!(
            Err(FlowError::CapacityTooLarge {
                from: 1,
                to: 0,
                capacity: i64::MAX
            }),
            network.set_capacity(1, 0, i64::MAX)
        );
        assert_eq!(MAX_CAPACITY, network.capacity(0, 1));
        assert_eq!(0, network.capacity(1, 0));
    }

    #[test]
    fn to_petgraph_graph() {
        let network =
            CapacityNetwork::from_adjacency(3, vec![vec![(2, 1), (1, 8)], vec![(2, 0)]]).unwrap();
        let graph = network.to_graph();
        assert_eq!(3, graph.node_count());
        let edges: Vec<_> = graph
            .raw_edges()
            .iter()
            .map(|edge| (edge.source().index(), edge.target().index(), edge.weight))
            .collect();
        assert_eq!(vec![(0, 1, 8), (0, 2, 1)], edges);
    }
}
