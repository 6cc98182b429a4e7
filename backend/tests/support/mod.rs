//! Shared helpers for integration suites that need a real PostgreSQL.
//!
//! Suites compile as separate crates, so the cluster skip policy and the
//! per-test database provisioning live here rather than in each file.

use diesel::{Connection, PgConnection, RunQueryDsl};
use pg_embedded_setup_unpriv::TestCluster;
use uuid::Uuid;

/// Returns true when `SKIP_TEST_CLUSTER` is "1", "true" or "yes"
/// (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Report an embedded cluster setup failure.
///
/// Prints a skip marker and returns `None` when `SKIP_TEST_CLUSTER` is set;
/// otherwise panics so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Create an empty, uniquely named database and return its URL.
///
/// `CREATE DATABASE` cannot run inside a transaction, so this goes through a
/// plain synchronous connection to the maintenance database.
pub fn fresh_database(cluster: &TestCluster) -> Result<String, String> {
    let name = format!("catalogue_{}", Uuid::new_v4().simple());
    let admin_url = cluster.connection().database_url("postgres");
    let mut admin = PgConnection::establish(&admin_url).map_err(|err| err.to_string())?;
    diesel::sql_query(format!("CREATE DATABASE \"{name}\""))
        .execute(&mut admin)
        .map_err(|err| format!("create database {name}: {err}"))?;
    Ok(cluster.connection().database_url(&name))
}
