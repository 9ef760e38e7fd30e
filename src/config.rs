// src/config.rs
use crate::extract::{TableExtractor, TabulaExtractor, TextTableExtractor};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_SOURCE: &str = "https://www.msfirm.com/bids/bidsonline.pdf";
pub const DEFAULT_OUT_PATH: &str = "bids.json";

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractorKind {
    /// Built-in text-layer column splitter
    Text,
    /// tabula-java via `java -jar`
    Tabula,
}

/// Scrape the foreclosure sale listing PDF into JSON.
#[derive(Parser, Debug, Clone)]
#[command(name = "bidscraper", version)]
pub struct Config {
    /// PDF to read: http(s) URL, file:// URL or local path
    #[arg(long, env = "BIDSONLINE_URL", default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Where to write the JSON array
    #[arg(long, env = "OUT_PATH", default_value = DEFAULT_OUT_PATH)]
    pub out: PathBuf,

    /// Table extraction backend
    #[arg(long, env = "BIDS_EXTRACTOR", value_enum, default_value_t = ExtractorKind::Text)]
    pub extractor: ExtractorKind,

    /// tabula-java jar, required with `--extractor tabula`
    #[arg(long, env = "TABULA_JAR")]
    pub tabula_jar: Option<PathBuf>,

    /// Java executable used to run tabula
    #[arg(long, env = "JAVA_BIN", default_value = "java")]
    pub java: String,
}

impl Config {
    pub fn build_extractor(&self) -> Result<Box<dyn TableExtractor>> {
        Ok(match self.extractor {
            ExtractorKind::Text => Box::new(TextTableExtractor),
            ExtractorKind::Tabula => {
                let jar = self
                    .tabula_jar
                    .clone()
                    .context("--tabula-jar (or TABULA_JAR) is required for the tabula extractor")?;
                Box::new(TabulaExtractor::new(self.java.clone(), jar))
            }
        })
    }
}
