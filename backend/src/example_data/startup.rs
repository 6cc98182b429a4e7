//! Startup seeding orchestration.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError};
use crate::example_data::config::ExampleDataSettings;
use crate::outbound::persistence::{DbPool, DieselProductSeedRepository};

/// Apply example data on startup when enabled.
///
/// Seeding is skipped with a warning when no database is configured, since
/// the fixture store cannot hold rows.
///
/// # Examples
///
/// ```rust,no_run
/// use catalogue_backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: Some(false),
///     seed: 42,
///     count: 10,
///     min_price: 30_000,
///     max_price: 150_000,
/// };
/// let outcome = seed_example_data_on_startup(&settings, None).await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`ExampleDataSeedingError`] when generation or persistence fails.
pub async fn seed_example_data_on_startup(
    settings: &ExampleDataSettings,
    db_pool: Option<&DbPool>,
) -> Result<Option<ExampleDataSeedOutcome>, ExampleDataSeedingError> {
    if !settings.is_enabled() {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let Some(db_pool) = db_pool else {
        warn!("example data seeding enabled but no database URL is configured; skipping");
        return Ok(None);
    };

    let repository = DieselProductSeedRepository::new(db_pool.clone());
    let seeder = ExampleDataSeeder::new(Arc::new(repository));
    let outcome = seeder.seed(settings.seed_request()).await?;

    info!(
        first_sku = outcome.first_number,
        generated = outcome.generated,
        inserted = outcome.inserted,
        "example data seeding applied"
    );

    Ok(Some(outcome))
}
