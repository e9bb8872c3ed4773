//! Report output directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::dot::{render_dot, should_render};
use crate::text::render_text;
use crate::types::Report;
use crate::{ResultsError, ResultsResult};
use sl_labeling::Labeling;

/// Files produced for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub text: PathBuf,
    pub json: PathBuf,
    pub dot: Option<PathBuf>,
}

/// Writes `<stem>.txt`, `<stem>.json` and optionally `<stem>.dot` under a
/// root directory. Writing the same stem again replaces the previous files.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    root_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(root_dir: impl Into<PathBuf>) -> ResultsResult<Self> {
        let root_dir = root_dir.into();
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn path(&self, stem: &str, ext: &str) -> PathBuf {
        self.root_dir.join(format!("{stem}.{ext}"))
    }

    /// Write the text and JSON forms of `report`.
    pub fn write(&self, stem: &str, report: &Report) -> ResultsResult<ReportPaths> {
        let text = self.path(stem, "txt");
        fs::write(&text, render_text(report))?;

        let json = self.path(stem, "json");
        fs::write(&json, serde_json::to_string_pretty(report)?)?;

        debug!(stem, dir = %self.root_dir.display(), "report written");
        Ok(ReportPaths {
            text,
            json,
            dot: None,
        })
    }

    /// Write the report plus a DOT diagram when the graph is small enough
    /// or `force` is set.
    pub fn write_with_diagram(
        &self,
        stem: &str,
        report: &Report,
        labeling: &Labeling,
        force: bool,
    ) -> ResultsResult<ReportPaths> {
        let mut paths = self.write(stem, report)?;
        let dot = self.path(stem, "dot");
        if should_render(labeling.params(), force) {
            fs::write(&dot, render_dot(labeling))?;
            paths.dot = Some(dot);
        } else {
            warn!(
                stem,
                n = labeling.params().n(),
                m = labeling.params().m(),
                "graph too large to draw; skipping diagram"
            );
            // A stale diagram from an earlier, smaller run would be misleading
            if dot.exists() {
                fs::remove_file(&dot)?;
            }
        }
        Ok(paths)
    }

    pub fn has_report(&self, stem: &str) -> bool {
        self.path(stem, "json").exists()
    }

    pub fn load(&self, stem: &str) -> ResultsResult<Report> {
        let json = self.path(stem, "json");
        if !json.exists() {
            return Err(ResultsError::ReportNotFound {
                stem: stem.to_string(),
            });
        }
        let content = fs::read_to_string(json)?;
        Ok(serde_json::from_str(&content)?)
    }
}
