// src/fetch/download.rs
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;
use url::Url;

/// Download `url` into `dest_dir` under its own filename and return the
/// saved path.
#[tracing::instrument(level = "info", skip(client, url, dest_dir), fields(url = %url))]
pub fn download_pdf(client: &Client, url: &Url, dest_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dest_path = dest_dir.as_ref().join(file_name_for(url));

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating download directory {:?}", parent))?;
    }

    let bytes = client
        .get(url.as_str())
        .send()
        .with_context(|| format!("GET {}", url))?
        .error_for_status()?
        .bytes()
        .with_context(|| format!("reading body from {}", url))?;
    fs::write(&dest_path, &bytes)
        .with_context(|| format!("writing {}", dest_path.display()))?;

    info!(bytes = bytes.len(), path = %dest_path.display(), "downloaded");
    Ok(dest_path)
}

/// Last path segment of the URL, or a fixed name when the URL has none.
pub fn file_name_for(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.last())
        .filter(|name| !name.is_empty())
        .unwrap_or("download.pdf")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_for() -> Result<()> {
        let u = Url::parse("https://www.msfirm.com/bids/bidsonline.pdf")?;
        assert_eq!(file_name_for(&u), "bidsonline.pdf");
        let u = Url::parse("https://www.msfirm.com/bids/")?;
        assert_eq!(file_name_for(&u), "download.pdf");
        Ok(())
    }
}
