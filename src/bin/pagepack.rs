use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use pagepack::pipeline::{RunSummary, Stage};

#[derive(Parser, Debug)]
#[command(name = "pagepack", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rebuild the catalog and every redirect page.
    Build,
    /// Pack the four item thumbnails into the atlas PNG.
    Pack,
    /// Run both pipelines; the atlas runs even if the catalog fails.
    All,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Site root that configured paths are relative to.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Build configuration JSON. Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured public base URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print the SHA-256 of every written artifact.
    #[arg(long, global = true)]
    dump_digests: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.common.verbose);

    let stage = match cli.cmd {
        Command::Build => Stage::Build,
        Command::Pack => Stage::Pack,
        Command::All => Stage::All,
    };

    let mut config = match &cli.common.config {
        Some(path) => pagepack::BuildConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => pagepack::BuildConfig::default(),
    };
    if let Some(base_url) = cli.common.base_url {
        config.base_url = base_url;
    }
    let site = config.resolve(&cli.common.root)?;

    let summary = pagepack::pipeline::run(stage, &site);
    report(&summary, cli.common.dump_digests);

    let mut failures = Vec::new();
    if let Some(Err(e)) = &summary.catalog {
        failures.push(format!("catalog: {e}"));
    }
    if let Some(Err(e)) = &summary.atlas {
        failures.push(format!("atlas: {e}"));
    }
    if !summary.succeeded() {
        anyhow::bail!("{}", failures.join("; "));
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn report(summary: &RunSummary, dump_digests: bool) {
    if let Some(Ok(catalog)) = &summary.catalog {
        for file in &catalog.failed {
            eprintln!("skipped {file}");
        }
        for missing in &catalog.missing_images {
            eprintln!(
                "missing image for {}: {}",
                missing.id,
                missing.path.display()
            );
        }
    }

    for artifact in summary.artifacts() {
        eprintln!("wrote {}", artifact.path.display());
        if dump_digests {
            println!("{}  {}", artifact.sha256, artifact.path.display());
        }
    }
}
