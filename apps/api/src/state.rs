use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::directory::Directory;
use crate::matching::engine::{LevelRatioScorer, MatchScorer};
use crate::mock::fixtures::demo_population;
use crate::mock::generator::MockGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// In-memory engineers, positions and the latest result set.
    /// Handlers clone snapshots out; the lock is never held across a matching run.
    pub directory: Arc<RwLock<Directory>>,
    /// Pluggable pair scorer. Default: LevelRatioScorer.
    pub scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    /// Builds state with the configured demo population already loaded.
    pub fn new(config: Config) -> Self {
        let mut generator = match config.mock_seed {
            Some(seed) => MockGenerator::with_seed(seed),
            None => MockGenerator::new(),
        };
        let (engineers, positions) =
            demo_population(&mut generator, config.mock_engineers, config.mock_positions);

        Self::with_directory(config, Directory::new(engineers, positions, generator))
    }

    pub fn with_directory(config: Config, directory: Directory) -> Self {
        Self {
            config,
            directory: Arc::new(RwLock::new(directory)),
            scorer: Arc::new(LevelRatioScorer),
        }
    }
}
