//! version-set-gen
//!
//! Offline generator for the known-version literal used by `mcver-version`.
//! Reads a launcher version manifest and writes
//! `libs/version/src/version_set.rs`, or with `--check` verifies that the
//! checked-in file still matches the manifest.
//!
//! The manifest is not checked in. Fetch the current copy from the launcher
//! metadata endpoint into the default location, then run from the
//! repository root:
//!
//! ```text
//! curl -o test/version_manifest.json \
//!     https://piston-meta.mojang.com/mc/game/version_manifest_v2.json
//! version-set-gen
//! version-set-gen --check
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod manifest;
mod render;

use manifest::Manifest;

/// Where the launcher publishes the version manifest.
const MANIFEST_URL: &str = "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json";

/// Generate the known-version set from a launcher version manifest.
#[derive(Debug, Parser)]
#[command(name = "version-set-gen", version)]
struct Args {
    /// Path to the version manifest JSON.
    #[arg(
        long,
        env = "MCVER_MANIFEST",
        default_value = "test/version_manifest.json"
    )]
    manifest: PathBuf,

    /// Path of the generated Rust source.
    #[arg(
        long,
        env = "MCVER_VERSION_SET",
        default_value = "libs/version/src/version_set.rs"
    )]
    output: PathBuf,

    /// Compare against the existing output instead of writing it.
    #[arg(long)]
    check: bool,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    if !args.manifest.exists() {
        bail!(
            "manifest not found: {} (download it from {MANIFEST_URL})",
            args.manifest.display()
        );
    }
    let manifest = Manifest::load(&args.manifest)?;
    let ids = manifest.ids();

    let duplicates = manifest.versions.len() - ids.len();
    if duplicates > 0 {
        warn!(duplicates, "manifest lists duplicate ids; keeping first occurrence");
    }
    info!(
        manifest = %args.manifest.display(),
        entries = ids.len(),
        latest_release = %manifest.latest.release,
        latest_snapshot = %manifest.latest.snapshot,
        types = ?manifest.type_counts(),
        max_compliance_level = ?manifest.max_compliance_level(),
        "Manifest loaded"
    );
    if let (Some(updated), Some((first, last))) =
        (manifest.last_updated(), manifest.release_span())
    {
        info!(
            %updated,
            first_release = %first,
            last_release = %last,
            "Manifest time range"
        );
    }

    let source = render::render(&ids, &manifest.latest, Utc::now());

    if args.check {
        let existing = std::fs::read_to_string(&args.output)
            .with_context(|| format!("failed to read {}", args.output.display()))?;
        render::check_drift(&existing, &source, &args.output)?;
        info!(output = %args.output.display(), "Version set is up to date");
        return Ok(());
    }

    render::write_atomic(&args.output, &source)?;
    info!(
        output = %args.output.display(),
        sha256 = %render::sha256_hex(render::strip_timestamp(&source).as_bytes()),
        "Version set written"
    );
    Ok(())
}
