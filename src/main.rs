use anyhow::Result;
use bidscraper::{config::Config, pipeline};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) configure ────────────────────────────────────────────────
    let config = Config::parse();
    info!(source = %config.source, out = %config.out.display(), extractor = ?config.extractor, "startup");
    let extractor = config.build_extractor()?;

    // ─── 3) fetch → extract → normalize → write ──────────────────────
    let summary = pipeline::run(&config, extractor.as_ref())?;

    println!(
        "Wrote {} records to {}",
        summary.records,
        summary.out_path.display()
    );
    Ok(())
}
