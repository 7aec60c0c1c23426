use std::collections::VecDeque;
use std::iter;

use itertools::Itertools;
use log::trace;

use crate::flow::network::Capacity;
use crate::flow::residual::ResidualNetwork;

/// Source to sink path in the residual graph, kept as the parent pointers of a BFS.
#[derive(Debug)]
pub struct AugmentingPath {
    parent: Vec<Option<usize>>,
    source: usize,
    sink: usize,
}

impl AugmentingPath {
    /// Path vertices walked back from the sink to the source.
    fn vertices_from_sink(&self) -> impl Iterator<Item = usize> + '_ {
        iter::successors(Some(self.sink), move |&vertex| {
            if vertex == self.source {
                None
            } else {
                self.parent[vertex]
            }
        })
    }

    /// Path vertices in source to sink order.
    pub fn vertices(&self) -> Vec<usize> {
        let mut vertices: Vec<usize> = self.vertices_from_sink().collect();
        vertices.reverse();
        vertices
    }

    /// Path edges `(from, to)`, starting with the edge into the sink.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices_from_sink()
            .tuple_windows::<(usize, usize)>()
            .map(|(to, from)| (from, to))
    }

    /// Smallest residual capacity along the path.
    pub fn bottleneck(&self, residual: &ResidualNetwork) -> Capacity {
        self.edges()
            .map(|(from, to)| residual.residual(from, to))
            .min()
            .unwrap_or(0)
    }
}

/// Breadth-first search for a shortest path with positive residual capacity on every edge.
///
/// Returns `None` if the sink cannot be reached, or if source and sink coincide.
pub fn find_augmenting_path(
    residual: &ResidualNetwork,
    source: usize,
    sink: usize,
) -> Option<AugmentingPath> {
    if source == sink {
        return None;
    }

    let vertex_count = residual.vertex_count();
    let mut parent = vec![None; vertex_count];
    let mut queue = VecDeque::new();
    parent[source] = Some(source);
    queue.push_back(source);

    while let Some(vertex) = queue.pop_front() {
        if vertex == sink {
            break;
        }
        for next in 0..vertex_count {
            if parent[next].is_none() && residual.residual(vertex, next) > 0 {
                trace!("bfs reached {} from {}", next, vertex);
                parent[next] = Some(vertex);
                queue.push_back(next);
            }
        }
    }

    if parent[sink].is_none() {
        return None;
    }
    Some(AugmentingPath {
        parent,
        source,
        sink,
    })
}
