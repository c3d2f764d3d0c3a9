//! Country data loader.
//!
//! Country files live in one directory, one file per first letter
//! (`a.txt` through `z.txt`). Each record is four lines:
//!
//! ```text
//! Name:Capital
//! Fact one
//! Fact two
//! Fact three
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{QuizError, Result};
use crate::model::CountryRecord;
use crate::traits::ChoiceSource;

/// An issue found while loading that did not stop the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// File the issue was found in.
    pub file: PathBuf,
    /// 1-based line number of the record header.
    pub line: usize,
    /// What was wrong.
    pub message: String,
}

/// Immutable, indexable set of countries sorted by name.
#[derive(Debug, Clone, Default)]
pub struct CountryCatalog {
    countries: Vec<CountryRecord>,
    warnings: Vec<LoadWarning>,
    source: Option<PathBuf>,
}

impl CountryCatalog {
    /// Build a catalog from records. Later duplicates replace earlier ones.
    pub fn from_records(records: impl IntoIterator<Item = CountryRecord>) -> Self {
        let by_name: BTreeMap<String, CountryRecord> = records
            .into_iter()
            .map(|c| (c.name().to_string(), c))
            .collect();
        Self {
            countries: by_name.into_values().collect(),
            warnings: Vec::new(),
            source: None,
        }
    }

    /// Load every `<letter>.txt` present in `dir`. Missing files are skipped.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut records = Vec::new();
        let mut warnings = Vec::new();

        for letter in 'a'..='z' {
            let path = dir.join(format!("{letter}.txt"));
            if !path.is_file() {
                tracing::debug!("no country file at {}", path.display());
                continue;
            }
            let content = std::fs::read_to_string(&path)?;
            let before = records.len();
            parse_country_file(&content, &path, &mut records, &mut warnings);
            tracing::debug!(
                "loaded {} countries from {}",
                records.len() - before,
                path.display()
            );
        }

        for w in &warnings {
            tracing::warn!("{}:{}: {}", w.file.display(), w.line, w.message);
        }

        let mut catalog = Self::from_records(records);
        catalog.warnings = warnings;
        catalog.source = Some(dir.to_path_buf());
        Ok(catalog)
    }

    /// Load and fail with [`QuizError::EmptyCatalog`] if nothing was found.
    pub fn load_non_empty(dir: &Path) -> Result<Self> {
        let catalog = Self::load(dir)?;
        if catalog.is_empty() {
            return Err(QuizError::EmptyCatalog {
                dir: dir.to_path_buf(),
            });
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// Look a country up by its exact name.
    pub fn get(&self, name: &str) -> Option<&CountryRecord> {
        self.countries
            .binary_search_by(|c| c.name().cmp(name))
            .ok()
            .map(|i| &self.countries[i])
    }

    /// Pick a country uniformly. Returns `None` for an empty catalog.
    pub fn pick(&self, choices: &mut dyn ChoiceSource) -> Option<&CountryRecord> {
        if self.countries.is_empty() {
            return None;
        }
        self.countries.get(choices.choose(self.countries.len()))
    }

    /// Directory the catalog was loaded from, if any.
    pub fn source_dir(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Non-fatal issues from the last [`CountryCatalog::load`].
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }
}

fn parse_country_file(
    content: &str,
    path: &Path,
    records: &mut Vec<CountryRecord>,
    warnings: &mut Vec<LoadWarning>,
) {
    let mut lines = content.lines().enumerate();

    while let Some((idx, raw)) = lines.next() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() != 2 {
            warnings.push(LoadWarning {
                file: path.to_path_buf(),
                line: idx + 1,
                message: format!("skipping line, expected `Name:Capital`: {line}"),
            });
            continue;
        }

        let facts: Vec<String> = lines.by_ref().take(3).map(|(_, f)| f.to_string()).collect();
        let Ok(facts) = <[String; 3]>::try_from(facts) else {
            warnings.push(LoadWarning {
                file: path.to_path_buf(),
                line: idx + 1,
                message: "record cut short by end of file".into(),
            });
            break;
        };

        match CountryRecord::new(parts[0].trim(), parts[1].trim(), facts) {
            Ok(country) => records.push(country),
            Err(e) => warnings.push(LoadWarning {
                file: path.to_path_buf(),
                line: idx + 1,
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedChoices;

    const N_FILE: &str = "\
Norway:Oslo
Home of the fjords.
Land of the midnight sun.
Runs a huge sovereign wealth fund.

Nepal:Kathmandu
Has eight of the ten highest peaks.
Its flag is not rectangular.
Birthplace of Siddhartha Gautama.
";

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn loads_records_across_letters() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "n.txt", N_FILE);
        write(
            dir.path(),
            "j.txt",
            "Japan:Tokyo\nIsland nation.\nBullet trains.\nCherry blossoms.\n",
        );

        let catalog = CountryCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.warnings().is_empty());
        let names: Vec<&str> = catalog.countries().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Japan", "Nepal", "Norway"]);
        assert_eq!(catalog.get("Nepal").unwrap().capital(), "Kathmandu");
        assert!(catalog.get("nepal").is_none());
    }

    #[test]
    fn missing_directory_or_files_give_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = CountryCatalog::load(dir.path()).unwrap();
        assert!(catalog.is_empty());

        let err = CountryCatalog::load_non_empty(dir.path()).unwrap_err();
        assert!(matches!(err, QuizError::EmptyCatalog { .. }));
    }

    #[test]
    fn malformed_header_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "b.txt",
            "Just a stray line\nBrazil:Brasilia\nSamba.\nAmazon.\nCarnival.\n",
        );
        let catalog = CountryCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.warnings().len(), 1);
        assert_eq!(catalog.warnings()[0].line, 1);
    }

    #[test]
    fn truncated_record_stops_the_file() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "c.txt",
            "Chile:Santiago\nLong.\nThin.\nAndes.\nCuba:Havana\nCigars.\n",
        );
        let catalog = CountryCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Cuba").is_none());
        assert!(catalog.warnings()[0].message.contains("cut short"));
    }

    #[test]
    fn blank_fact_fails_validation_and_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "p.txt",
            "Peru:Lima\nMachu Picchu.\n   \nCeviche.\nPoland:Warsaw\nPierogi.\nChopin.\nAmber.\n",
        );
        let catalog = CountryCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.countries()[0].name(), "Poland");
        assert!(catalog.warnings()[0].message.contains("fact2"));
    }

    #[test]
    fn duplicate_names_keep_the_last() {
        let a = CountryRecord::new(
            "Chad",
            "Old",
            ["x".into(), "y".into(), "z".into()],
        )
        .unwrap();
        let b = CountryRecord::new(
            "Chad",
            "N'Djamena",
            ["x".into(), "y".into(), "z".into()],
        )
        .unwrap();
        let catalog = CountryCatalog::from_records([a, b]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Chad").unwrap().capital(), "N'Djamena");
    }

    #[test]
    fn pick_uses_choice_index() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "n.txt", N_FILE);
        let catalog = CountryCatalog::load(dir.path()).unwrap();

        let mut choices = ScriptedChoices::new([1, 0]);
        assert_eq!(catalog.pick(&mut choices).unwrap().name(), "Norway");
        assert_eq!(catalog.pick(&mut choices).unwrap().name(), "Nepal");

        let empty = CountryCatalog::default();
        assert!(empty.pick(&mut choices).is_none());
    }
}
