use std::io::BufRead;

use itertools::Itertools;
use log::{debug, warn};
use thiserror::Error;

use crate::flow::{Capacity, CapacityNetwork, FlowError, MAX_CAPACITY};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("input does not start with a vertex count")]
    MissingVertexCount,
    #[error("invalid vertex count {0:?}")]
    InvalidVertexCount(String),
    #[error(transparent)]
    Network(#[from] FlowError),
}

/// Reasons an edge row is dropped.
#[derive(Debug, Error, PartialEq, Eq)]
enum RowError {
    #[error("{0:?} is not an integer")]
    NotANumber(String),
    #[error("expected neighbor/capacity pairs, got {0} numbers")]
    OddLength(usize),
    #[error("neighbor {0} is not a vertex")]
    NeighborOutOfRange(i64),
    #[error("capacity {0} is negative")]
    NegativeCapacity(i64),
    #[error("capacity {0} exceeds {}", MAX_CAPACITY)]
    CapacityTooLarge(i64),
}

/// Reads a network in the line format
///
/// ```text
/// n
/// neighbor capacity neighbor capacity ...   (vertex 1)
/// ...                                       (vertex n - 1)
/// ```
///
/// with 1-based neighbors. The sink has no row. A row that does not parse leaves its vertex
/// without outgoing edges.
pub fn read_network<R: BufRead>(reader: R) -> Result<CapacityNetwork, InputError> {
    let mut lines = reader.lines();

    let count_line = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(InputError::MissingVertexCount),
        }
    };
    let vertex_count = parse_vertex_count(&count_line)?;

    let mut rows = Vec::with_capacity(vertex_count.saturating_sub(1));
    for vertex in 0..vertex_count.saturating_sub(1) {
        let Some(line) = lines.next().transpose()? else {
            debug!("input ends before the row of vertex {}", vertex + 1);
            break;
        };
        let edges = parse_edge_row(&line, vertex_count).unwrap_or_else(|err| {
            warn!("ignoring edges of vertex {}: {}", vertex + 1, err);
            vec![]
        });
        rows.push(edges);
    }

    Ok(CapacityNetwork::from_adjacency(vertex_count, rows)?)
}

fn parse_vertex_count(line: &str) -> Result<usize, InputError> {
    let token = line.split_whitespace().next().unwrap_or_default();
    token
        .parse()
        .map_err(|_| InputError::InvalidVertexCount(token.to_string()))
}

/// Parses `neighbor capacity` pairs into 0-based `(neighbor, capacity)` edges.
fn parse_edge_row(line: &str, vertex_count: usize) -> Result<Vec<(usize, Capacity)>, RowError> {
    let numbers: Vec<i64> = line
        .split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| RowError::NotANumber(token.to_string()))
        })
        .collect::<Result<_, _>>()?;

    if numbers.len() % 2 != 0 {
        return Err(RowError::OddLength(numbers.len()));
    }

    numbers
        .into_iter()
        .tuples::<(i64, i64)>()
        .map(|(neighbor, capacity)| {
            let index = usize::try_from(neighbor)
                .ok()
                .filter(|&index| (1..=vertex_count).contains(&index))
                .ok_or(RowError::NeighborOutOfRange(neighbor))?;
            if capacity < 0 {
                return Err(RowError::NegativeCapacity(capacity));
            }
            if capacity > MAX_CAPACITY {
                return Err(RowError::CapacityTooLarge(capacity));
            }
            Ok((index - 1, capacity))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::flow::solve;
    use crate::input::{parse_edge_row, read_network, InputError, RowError};

    #[test]
    fn parses_linear_chain() {
        let network = read_network("3\n2 5\n3 3\n".as_bytes()).unwrap();
        assert_eq!(3, network.vertex_count());
        assert_eq!(5, network.capacity(0, 1));
        assert_eq!(3, network.capacity(1, 2));
        assert_eq!(0, network.capacity(0, 2));
    }

    #[test]
    fn edge_row() {
        assert_eq!(Ok(vec![(1, 7), (4, 9)]), parse_edge_row("2 7 5 9", 8));
        assert_eq!(Ok(vec![]), parse_edge_row("", 8));
        assert_eq!(Ok(vec![(2, 1)]), parse_edge_row("  3\t1  ", 8));
    }

    #[test]
    fn malformed_edge_rows() {
        assert_eq!(
            Err(RowError::NotANumber("x".to_string())),
            parse_edge_row("2 x", 3)
        );
        assert_eq!(Err(RowError::OddLength(3)), parse_edge_row("2 5 3", 3));
        assert_eq!(Err(RowError::NeighborOutOfRange(4)), parse_edge_row("4 1", 3));
        assert_eq!(Err(RowError::NeighborOutOfRange(0)), parse_edge_row("0 1", 3));
        assert_eq!(Err(RowError::NeighborOutOfRange(-2)), parse_edge_row("-2 1", 3));
        assert_eq!(Err(RowError::NegativeCapacity(-1)), parse_edge_row("2 -1", 3));
    }

    #[test]
    fn oversized_capacity_drops_row() {
        assert_eq!(
            Err(RowError::CapacityTooLarge(2147483648)),
            parse_edge_row("2 2147483648", 3)
        );
        assert_eq!(Ok(vec![(1, 2147483647)]), parse_edge_row("2 2147483647", 3));

        let network = read_network("3\n2 1\n1 9223372036854775807 3 1\n".as_bytes()).unwrap();
        assert_eq!(0, network.capacity(1, 0));
        assert_eq!(0, network.capacity(1, 2));
        assert_eq!(0, solve(&network).max_flow());
    }

    #[test]
    fn malformed_row_is_empty() {
        let network = read_network("3\n2 five\n3 3\n".as_bytes()).unwrap();
        assert_eq!(0, network.capacity(0, 1));
        assert_eq!(3, network.capacity(1, 2));
    }

    #[test]
    fn repeated_neighbor_last_wins() {
        let network = read_network("2\n2 4 2 1\n".as_bytes()).unwrap();
        assert_eq!(1, network.capacity(0, 1));
    }

    #[test]
    fn sink_row_is_ignored() {
        let network = read_network("2\n2 4\n1 9\n".as_bytes()).unwrap();
        assert_eq!(4, network.capacity(0, 1));
        assert_eq!(0, network.capacity(1, 0));
    }

    #[test]
    fn missing_rows_are_empty() {
        let network = read_network("4\n2 4".as_bytes()).unwrap();
        assert_eq!(4, network.vertex_count());
        assert_eq!(4, network.capacity(0, 1));
        assert_eq!(0, network.capacity(1, 2));
    }

    #[test]
    fn single_vertex_has_no_rows() {
        let network = read_network("1\n".as_bytes()).unwrap();
        assert_eq!(1, network.vertex_count());
    }

    #[test]
    fn leading_blank_lines_are_skipped() {
        let network = read_network("\n\n2\n2 1\n".as_bytes()).unwrap();
        assert_eq!(1, network.capacity(0, 1));
    }

    #[test]
    fn vertex_count_errors() {
        assert!(matches!(
            read_network("".as_bytes()),
            Err(InputError::MissingVertexCount)
        ));
        assert!(matches!(
            read_network("abc\n".as_bytes()),
            Err(InputError::InvalidVertexCount(token)) if token == "abc"
        ));
        assert!(matches!(
            read_network("-3\n".as_bytes()),
            Err(InputError::InvalidVertexCount(_))
        ));
        assert!(matches!(
            read_network("0\n".as_bytes()),
            Err(InputError::Network(_))
        ));
    }
}
