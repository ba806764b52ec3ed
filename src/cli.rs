/*!
# Command Line Support

Shared by the `tourgraphs` and `tourgraphs-convert` binaries.
*/

use tracing_subscriber::EnvFilter;

use crate::prelude::*;

/// Logs to stderr, filtered by `RUST_LOG` (default `warn`)
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns the lines printed for a loaded graph: the Eulerian circuit (or why there is none)
/// and, for adjacency-list input only, the Hamiltonian verdict.
pub fn report<B>(graph: &mut Graph<B>) -> Vec<String>
where
    B: GraphBackend,
{
    let mut lines = vec![match graph.eulerian_circuit() {
        Ok(circuit) => format!("Eulerian circuit found: {circuit}"),
        Err(reason) => format!("No Eulerian circuit: {reason}"),
    }];

    // the check is exponential in the number of nodes
    if graph.is_adjacency_list() {
        lines.push(graph.check_hamiltonian().to_string());
    }

    lines
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::FileFormat;

    #[test]
    fn report_adjacency_list() {
        let mut graph = Graph::try_from_lines(&["1,2", "0,2", "0,1"]).unwrap();

        assert_eq!(
            report(&mut graph),
            vec![
                "Eulerian circuit found: 0 -> 1 -> 2 -> 0".to_string(),
                "The graph may be Hamiltonian!".to_string(),
            ]
        );

        // star with center 0
        let mut graph = Graph::try_from_lines(&["1,2,3", "0", "0", "0"]).unwrap();
        assert_eq!(
            report(&mut graph),
            vec![
                "No Eulerian circuit: node 0 has odd degree 3, so the graph has no Eulerian circuit"
                    .to_string(),
                "The graph is not Hamiltonian! Removing {0} leaves 3 components.".to_string(),
            ]
        );
    }

    #[test]
    fn report_matrices_without_verdict() {
        let mut graph = Graph::try_from_lines(&["0 1 1", "1 0 1", "1 1 0"]).unwrap();
        assert!(!graph.is_adjacency_list());
        assert_eq!(
            report(&mut graph),
            vec!["Eulerian circuit found: 0 -> 1 -> 2 -> 0".to_string()]
        );

        let mut graph = Graph::try_from_lines(&["1 0 1 0", "1 1 0 0", "0 1 1 2"]).unwrap();
        assert_eq!(graph.format(), FileFormat::IncidenceMatrix);
        assert_eq!(report(&mut graph).len(), 1);
    }
}
