//! Extraction Session
//!
//! Owns the class and enum catalogs of one run. Inputs are fed one at a time
//! (or as a batch) and each is merged all-or-nothing: an input that fails to
//! parse or collides with an existing name leaves the catalogs as they were.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::catalog::{Catalog, Catalogs, DuplicatePolicy};
use crate::error::{Result, SkipReason};
use crate::extractors::base::{ClassRecord, EnumRecord};
use crate::extractors::ExtractorManager;

/// Session configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How name collisions between declarations are resolved
    pub duplicate_policy: DuplicatePolicy,
}

/// An input the session did not extract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedInput {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of feeding one input to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Number of classes and enums the input stored; duplicates discarded
    /// under `KeepFirst` are not counted
    Extracted { classes: usize, enums: usize },
    Skipped(SkipReason),
}

/// Totals for a batch of inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub processed: Vec<PathBuf>,
    pub skipped: Vec<SkippedInput>,
}

#[derive(Debug, Default)]
pub struct ExtractionSession {
    config: SessionConfig,
    manager: ExtractorManager,
    catalogs: Catalogs,
    skipped: Vec<SkippedInput>,
}

impl ExtractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Extract one file into the session
    ///
    /// Missing, unreadable or non-`.cs` paths are recorded as skipped and are
    /// not an error.
    pub fn extract_path(&mut self, path: impl AsRef<Path>) -> Result<InputOutcome> {
        let path = path.as_ref();
        let staged = self
            .manager
            .extract_file(path, self.config.duplicate_policy);
        self.absorb(path, staged)
    }

    /// Extract in-memory C# source; `label` names the input in errors
    pub fn extract_source(&mut self, label: &str, source: &str) -> Result<InputOutcome> {
        let path = Path::new(label);
        let staged =
            self.manager
                .extract_content(path, source, "csharp", self.config.duplicate_policy);
        self.absorb(path, staged)
    }

    /// Extract inputs sequentially in the given order
    ///
    /// Stops at the first parse or duplicate error; inputs merged before it
    /// stay in the session.
    pub fn extract_paths<I, P>(&mut self, paths: I) -> Result<ExtractionSummary>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut summary = ExtractionSummary::default();
        for path in paths {
            let path = path.as_ref();
            let outcome = self.extract_path(path)?;
            summary.record(path, outcome);
        }
        Ok(summary)
    }

    /// Parse inputs on the rayon pool, then merge them serially in the given order
    ///
    /// Produces the same catalogs and errors as [`extract_paths`](Self::extract_paths).
    pub fn extract_paths_parallel<P>(&mut self, paths: &[P]) -> Result<ExtractionSummary>
    where
        P: AsRef<Path> + Sync,
    {
        let manager = self.manager;
        let policy = self.config.duplicate_policy;
        let staged: Vec<Result<Catalogs>> = paths
            .par_iter()
            .map(|path| manager.extract_file(path.as_ref(), policy))
            .collect();

        let mut summary = ExtractionSummary::default();
        for (path, staged) in paths.iter().zip(staged) {
            let path = path.as_ref();
            let outcome = self.absorb(path, staged)?;
            summary.record(path, outcome);
        }
        Ok(summary)
    }

    fn absorb(&mut self, path: &Path, staged: Result<Catalogs>) -> Result<InputOutcome> {
        let catalogs = match staged {
            Ok(catalogs) => catalogs,
            Err(e) => {
                let reason = e.skip_reason().ok_or(e)?;
                debug!("Skipping {}: {}", path.display(), reason);
                self.skipped.push(SkippedInput {
                    path: path.to_path_buf(),
                    reason,
                });
                return Ok(InputOutcome::Skipped(reason));
            }
        };

        let count = self
            .catalogs
            .merge(catalogs, self.config.duplicate_policy, path)?;
        let outcome = InputOutcome::Extracted {
            classes: count.classes,
            enums: count.enums,
        };

        info!(
            "Extracted {} from {} (session now holds {} classes, {} enums)",
            outcome,
            path.display(),
            self.catalogs.classes.len(),
            self.catalogs.enums.len()
        );
        Ok(outcome)
    }

    pub fn classes(&self) -> &Catalog<ClassRecord> {
        &self.catalogs.classes
    }

    pub fn enums(&self) -> &Catalog<EnumRecord> {
        &self.catalogs.enums
    }

    pub fn class(&self, name: &str) -> Option<&ClassRecord> {
        self.catalogs.classes.get(name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&EnumRecord> {
        self.catalogs.enums.get(name)
    }

    /// Inputs skipped so far, in the order they were seen
    pub fn skipped(&self) -> &[SkippedInput] {
        &self.skipped
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Hand the catalogs to a renderer, ending the session
    pub fn into_catalogs(self) -> Catalogs {
        self.catalogs
    }
}

impl ExtractionSummary {
    fn record(&mut self, path: &Path, outcome: InputOutcome) {
        match outcome {
            InputOutcome::Extracted { .. } => self.processed.push(path.to_path_buf()),
            InputOutcome::Skipped(reason) => self.skipped.push(SkippedInput {
                path: path.to_path_buf(),
                reason,
            }),
        }
    }
}

impl std::fmt::Display for InputOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputOutcome::Extracted { classes, enums } => {
                write!(f, "{} classes and {} enums", classes, enums)
            }
            InputOutcome::Skipped(reason) => write!(f, "nothing ({})", reason),
        }
    }
}
