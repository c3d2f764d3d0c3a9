//! The `geoquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use geoquiz_core::catalog::CountryCatalog;
use geoquiz_core::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<()> {
    let dir = match data_dir {
        Some(d) => d,
        None => load_config_from(config_path.as_deref())?.data_dir,
    };

    let catalog = CountryCatalog::load_non_empty(&dir)?;
    println!("Loaded {} countries from {}", catalog.len(), dir.display());

    for w in catalog.warnings() {
        let file = w
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("  [{file}:{}] WARNING: {}", w.line, w.message);
    }

    let total_warnings = catalog.warnings().len();
    if total_warnings == 0 {
        println!("All country files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
