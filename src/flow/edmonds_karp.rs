use log::{debug, info};

use crate::flow::augmenting_path::{find_augmenting_path, AugmentingPath};
use crate::flow::cut::MinCut;
use crate::flow::network::{Capacity, CapacityNetwork};
use crate::flow::residual::ResidualNetwork;
use crate::flow::solution::FlowSolution;

enum SearchState {
    Searching,
    Done,
}

/// Maximum flow from vertex `0` to vertex `n - 1`, with the resulting minimum cut.
pub fn solve(network: &CapacityNetwork) -> FlowSolution {
    run(network, network.source(), network.sink())
}

fn run(network: &CapacityNetwork, source: usize, sink: usize) -> FlowSolution {
    info!(
        "computing max flow from {} to {} over {} vertices",
        source,
        sink,
        network.vertex_count()
    );

    let mut residual = ResidualNetwork::new(network);
    let mut total_flow: Capacity = 0;
    let mut rounds = 0usize;

    // a single vertex network carries no flow
    let mut state = if source == sink {
        SearchState::Done
    } else {
        SearchState::Searching
    };

    while let SearchState::Searching = state {
        state = match find_augmenting_path(&residual, source, sink) {
            Some(path) => {
                let bottleneck = augment_along(&mut residual, &path);
                total_flow += bottleneck;
                rounds += 1;
                debug!(
                    "round {}: pushed {} along {:?}",
                    rounds,
                    bottleneck,
                    path.vertices()
                );
                SearchState::Searching
            }
            None => SearchState::Done,
        };
    }

    let cut = MinCut::extract(&residual, source);
    info!(
        "max flow {} after {} rounds, {} vertices on the source side",
        total_flow,
        rounds,
        cut.source_set.len()
    );
    debug_assert_eq!(total_flow, cut.capacity);

    FlowSolution::new(total_flow, residual.freeze(), cut, rounds)
}

/// Pushes the bottleneck amount along `path` and returns it.
fn augment_along(residual: &mut ResidualNetwork, path: &AugmentingPath) -> Capacity {
    let bottleneck = path.bottleneck(residual);
    for (from, to) in path.edges() {
        residual.augment(from, to, bottleneck);
    }
    bottleneck
}
