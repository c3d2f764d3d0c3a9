//! The `geoquiz play` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use geoquiz_core::catalog::CountryCatalog;
use geoquiz_core::config::{load_config_from, GeoquizConfig, ScoreFormat};
use geoquiz_core::engine::{QuizEngine, SessionConfig, TracingReporter};
use geoquiz_core::round::SessionTotals;
use geoquiz_core::store::ScoreStore;
use geoquiz_core::traits::{Console, LineConsole, RngChoices};

/// Command-line overrides for the configured session settings.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Directory holding a.txt .. z.txt
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// File the session result is appended to
    #[arg(long)]
    pub score_file: Option<PathBuf>,

    /// What to append when the session ends: totals or record
    #[arg(long)]
    pub format: Option<ScoreFormat>,

    /// Seed for reproducible question order
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Overrides {
    pub fn apply(self, mut config: GeoquizConfig) -> GeoquizConfig {
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if let Some(file) = self.score_file {
            config.score_file = file;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

pub fn execute(config_path: Option<PathBuf>, overrides: Overrides) -> Result<()> {
    let config = overrides.apply(load_config_from(config_path.as_deref())?);
    let mut console = LineConsole::new(io::stdin().lock(), io::stdout());

    let catalog = load_catalog(&config)?;
    play_session(&config, &catalog, &mut console)?;
    Ok(())
}

pub fn load_catalog(config: &GeoquizConfig) -> Result<CountryCatalog> {
    let catalog = CountryCatalog::load_non_empty(&config.data_dir)
        .with_context(|| format!("failed to load countries from {}", config.data_dir.display()))?;
    tracing::debug!("loaded {} countries", catalog.len());
    Ok(catalog)
}

/// Run one session on `console` with the given settings.
pub fn play_session(
    config: &GeoquizConfig,
    catalog: &CountryCatalog,
    console: &mut dyn Console,
) -> Result<SessionTotals> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut choices = RngChoices::new(rng);
    let session = SessionConfig {
        store: ScoreStore::new(&config.score_file),
        format: config.format,
    };

    let mut engine = QuizEngine::new(catalog, &mut choices, &TracingReporter);
    engine.run_session(console, &session).with_context(|| {
        format!(
            "session aborted (score file: {})",
            config.score_file.display()
        )
    })
}
