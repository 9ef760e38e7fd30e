// src/extract/tabula.rs
use super::{Cell, RawTable, TableExtractor};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    process::Command,
};
use tracing::{debug, info};

/// Shells out to tabula-java in stream + guess mode and reads its JSON.
#[derive(Debug, Clone)]
pub struct TabulaExtractor {
    pub java: String,
    pub jar: PathBuf,
}

/// One table in tabula's `--format JSON` output. Geometry fields are ignored.
#[derive(Debug, Deserialize)]
struct TabulaTable {
    #[serde(default)]
    data: Vec<Vec<TabulaCell>>,
}

#[derive(Debug, Deserialize)]
struct TabulaCell {
    #[serde(default)]
    text: String,
}

impl TabulaExtractor {
    pub fn new(java: impl Into<String>, jar: impl Into<PathBuf>) -> Self {
        Self {
            java: java.into(),
            jar: jar.into(),
        }
    }

    fn command(&self, pdf: &Path) -> Command {
        let mut cmd = Command::new(&self.java);
        cmd.arg("-jar")
            .arg(&self.jar)
            .args(["--pages", "all", "--stream", "--guess", "--format", "JSON"])
            .arg(pdf);
        cmd
    }
}

impl TableExtractor for TabulaExtractor {
    #[tracing::instrument(level = "info", skip(self, pdf), fields(path = %pdf.display(), jar = %self.jar.display()))]
    fn extract(&self, pdf: &Path) -> Result<Vec<RawTable>> {
        let output = self
            .command(pdf)
            .output()
            .with_context(|| format!("spawning {} -jar {}", self.java, self.jar.display()))?;
        if !output.status.success() {
            bail!(
                "tabula exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        debug!(bytes = output.stdout.len(), "tabula output");

        let tables = parse_tabula_json(&output.stdout)
            .with_context(|| format!("parsing tabula output for {}", pdf.display()))?;
        info!(tables = tables.len(), "tabula tables");
        Ok(tables)
    }

    fn name(&self) -> &'static str {
        "tabula"
    }
}

/// Convert tabula JSON into raw tables. The first row of each table is its
/// header; tables with no data rows are dropped.
pub fn parse_tabula_json(bytes: &[u8]) -> Result<Vec<RawTable>> {
    let parsed: Vec<TabulaTable> = serde_json::from_slice(bytes)?;

    Ok(parsed
        .into_iter()
        .filter_map(|t| {
            let mut rows = t.data.into_iter();
            let headers = rows
                .next()?
                .into_iter()
                .enumerate()
                .map(|(i, c)| {
                    if c.text.trim().is_empty() {
                        format!("unnamed: {}", i)
                    } else {
                        c.text
                    }
                })
                .collect();
            let rows: Vec<Vec<Cell>> = rows
                .map(|r| r.into_iter().map(|c| Cell::text(c.text)).collect())
                .collect();
            Some(RawTable::new(headers, rows)).filter(|t| !t.is_empty())
        })
        .collect())
}
