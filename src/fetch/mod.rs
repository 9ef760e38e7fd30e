// src/fetch/mod.rs
use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use std::path::{Path, PathBuf};
use tracing::info;
use url::Url;

pub mod download;

pub use download::download_pdf;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Where the PDF comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(Url),
    Local(PathBuf),
}

impl Source {
    /// `http(s)://` is remote, `file://` and anything that is not a URL is a
    /// local path. Other URL schemes are rejected.
    pub fn parse(s: &str) -> Result<Self> {
        match Url::parse(s) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Source::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(Source::Local)
                    .map_err(|_| anyhow::anyhow!("invalid file URL {}", s)),
                // single letters are Windows drive prefixes, not schemes
                scheme if scheme.len() == 1 => Ok(Source::Local(PathBuf::from(s))),
                scheme => bail!("unsupported URL scheme {:?} in {}", scheme, s),
            },
            Err(_) => Ok(Source::Local(PathBuf::from(s))),
        }
    }
}

/// Resolve `source` to a PDF on disk, downloading into `scratch` if needed.
pub fn fetch_pdf(source: &Source, scratch: &Path) -> Result<PathBuf> {
    match source {
        Source::Remote(url) => {
            let client = Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .context("building HTTP client")?;
            download_pdf(&client, url, scratch)
        }
        Source::Local(path) => {
            if !path.is_file() {
                bail!("PDF not found at {}", path.display());
            }
            info!(path = %path.display(), "using local PDF");
            Ok(path.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_source_parse() -> Result<()> {
        assert!(matches!(
            Source::parse("https://www.msfirm.com/bids/bidsonline.pdf")?,
            Source::Remote(_)
        ));
        assert_eq!(
            Source::parse("data/bids.pdf")?,
            Source::Local(PathBuf::from("data/bids.pdf"))
        );
        assert_eq!(
            Source::parse("file:///tmp/bids.pdf")?,
            Source::Local(PathBuf::from("/tmp/bids.pdf"))
        );
        assert!(Source::parse("ftp://example.com/bids.pdf").is_err());
        Ok(())
    }

    #[test]
    fn test_fetch_local() -> Result<()> {
        let dir = tempdir()?;
        let pdf = dir.path().join("bids.pdf");
        std::fs::write(&pdf, b"%PDF-1.4")?;

        let got = fetch_pdf(&Source::Local(pdf.clone()), dir.path())?;
        assert_eq!(got, pdf);
        assert!(fetch_pdf(&Source::Local(dir.path().join("missing.pdf")), dir.path()).is_err());
        Ok(())
    }
}
