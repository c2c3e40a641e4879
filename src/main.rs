use anyhow::Result;
use clap::Parser;
use ideadeck::{catalog, config, tui};

#[derive(Parser, Debug)]
#[command(name = "ideadeck")]
#[command(about = "Terminal browser for a personal idea-disclosure catalog")]
#[command(version)]
struct Args {
    /// Catalog location (URL or path), overrides the config file
    #[arg(long)]
    catalog: Option<String>,

    /// Fetch and validate the catalog, print a summary, and exit
    #[arg(long)]
    check: bool,

    /// Write a starter configuration file
    #[arg(long)]
    init: bool,

    /// Path to config file
    #[arg(long, short)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ideadeck=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.init {
        config::init(args.config.as_deref())?;
        return Ok(());
    }

    let mut config = config::load(args.config.as_deref())?;
    if let Some(source) = args.catalog {
        config.catalog.source = source;
    }

    if args.check {
        let catalog = catalog::load_catalog(&config.catalog.source).await?;
        println!(
            "{}: {} ({})",
            config.catalog.source,
            ideadeck::data::filter::count_label(catalog.ideas.len()),
            catalog.last_updated.as_deref().unwrap_or("last update unknown"),
        );
        return Ok(());
    }

    // Run TUI
    tui::run(config).await
}
