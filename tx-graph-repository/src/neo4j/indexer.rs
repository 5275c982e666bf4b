// Neo4j constraint creation
use neo4rs::{Graph, Query};
use tracing::{info, warn};

/// Create the unique constraint backing `MERGE (:Address {address})`.
///
/// `DETACH DELETE` leaves constraints in place, so this only does work on the
/// first connection to a fresh database. Failure is logged and ignored.
pub async fn create_address_constraint(graph: &Graph) {
    let constraint_query = Query::new(
        "CREATE CONSTRAINT address_unique IF NOT EXISTS FOR (a:Address) REQUIRE a.address IS UNIQUE"
            .to_string(),
    );
    match graph.run(constraint_query).await {
        Ok(_) => info!("✓ Ensured unique constraint on Address.address"),
        Err(e) => warn!(
            "Failed to create constraint on Address.address (may already exist): {}",
            e
        ),
    }
}
