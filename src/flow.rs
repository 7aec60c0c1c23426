mod augmenting_path;
mod cut;
mod edmonds_karp;
mod network;
mod residual;
mod solution;

pub use edmonds_karp::solve;
pub use network::{Capacity, CapacityNetwork, FlowError, MAX_CAPACITY};
pub use solution::FlowSolution;
