use digraph::{Graph, GraphError};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), GraphError> {
    init_tracing();

    let mut graph = Graph::new();

    let alice = graph.add_node("Alice".to_string());
    let bob = graph.add_node("Bob".to_string());
    let charlie = graph.add_node("Charlie".to_string());

    graph.add_edge(alice, bob)?;
    graph.add_edge(bob, charlie)?;
    graph.add_edge(alice, charlie)?;
    info!(nodes = graph.len(), edges = graph.edge_count(), "built demo graph");

    let neighbors: Vec<_> = graph.neighbor_nodes(alice)?.map(|n| n.data().as_str()).collect();
    println!("Neighbors of Alice: {}", neighbors.join(", "));

    print!("{}", graph.describe());
    Ok(())
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
