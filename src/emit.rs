// src/emit.rs
use crate::record::OutputRecord;
use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

/// Write `records` as an indented JSON array to `path`.
///
/// Missing parent directories are created. The file is written next to
/// its destination and renamed over it, so readers never see a partial array.
pub fn write_records(path: impl AsRef<Path>, records: &[OutputRecord]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("creating output directory {:?}", dir))?;

    let file_name = path
        .file_name()
        .with_context(|| format!("output path {:?} has no file name", path))?;
    let tmp_path = dir.join(format!(".{}.tmp", file_name.to_string_lossy()));

    let tmp = fs::File::create(&tmp_path).with_context(|| format!("creating {:?}", tmp_path))?;
    let mut w = BufWriter::new(tmp);
    serde_json::to_writer_pretty(&mut w, records).context("serializing records")?;
    w.write_all(b"\n")?;
    w.flush().with_context(|| format!("flushing {:?}", tmp_path))?;
    drop(w);

    fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;
    Ok(())
}
