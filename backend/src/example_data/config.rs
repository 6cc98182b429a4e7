//! Example data configuration loaded via OrthoConfig.

use std::ffi::OsString;

use ortho_config::{OrthoConfig, OrthoResult};
use serde::Deserialize;

use crate::domain::ExampleDataSeedRequest;

/// Configuration values controlling example product seeding at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Enable example data seeding on startup; absent means `false`.
    pub enabled: Option<bool>,
    /// RNG seed driving generated prices.
    #[ortho_config(default = 42)]
    pub seed: u64,
    /// Number of products generated per startup.
    #[ortho_config(default = 30_000)]
    pub count: usize,
    /// Inclusive lower price bound in minor units.
    #[ortho_config(default = 30_000)]
    pub min_price: i64,
    /// Inclusive upper price bound in minor units.
    #[ortho_config(default = 150_000)]
    pub max_price: i64,
}

impl ExampleDataSettings {
    /// Load settings from the environment and configuration files only.
    ///
    /// The process command line is parsed by the server settings; only the
    /// program name from `args` reaches this parser, so server flags such as
    /// `--port` cannot fail it.
    ///
    /// # Errors
    ///
    /// Returns the OrthoConfig error when environment or file values are
    /// malformed.
    pub fn load_without_cli<I, T>(args: I) -> OrthoResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::load_from_iter(args.into_iter().take(1))
    }

    /// Return whether seeding is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// Generation parameters for the seeder.
    pub const fn seed_request(&self) -> ExampleDataSeedRequest {
        ExampleDataSeedRequest {
            seed: self.seed,
            count: self.count,
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}
