use std::{io, path::PathBuf};

use catsearch::logging;
use catsearch_tui::{
    TuiAppBuilder,
    batch::{self, OutputFormat},
    options,
};
use clap::Parser;
use color_eyre::eyre::Result;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "catsearch-tui")]
#[command(about = "Filter the category list as you type", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON widget options, same shape as the browser options object
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON array of category records replacing the built-in catalog
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Log every per-category match decision
    #[arg(long)]
    debug: bool,

    /// Print the categories matching QUERY and exit instead of opening the prompt
    #[arg(short, long, value_name = "QUERY")]
    query: Option<String>,

    /// With --query, print list item markup instead of labels
    #[arg(long, requires = "query")]
    html: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut level = logging::level_for_verbosity(cli.verbose);
    if cli.debug {
        level = level.max(LevelFilter::DEBUG);
    }
    logging::init(level);

    let mut config = options::load_config(cli.config.as_deref())?;
    if cli.debug {
        config = config.with_debug(true);
    }
    let catalog = options::load_catalog(cli.catalog.as_deref())?;

    if let Some(query) = cli.query {
        let format = if cli.html {
            OutputFormat::Html
        } else {
            OutputFormat::Labels
        };
        let outcome = batch::write_matches(&mut io::stdout().lock(), config, catalog, &query, format)?;
        tracing::debug!(visible = outcome.visible_count(), "printed matching categories");
        return Ok(());
    }

    let mut app = TuiAppBuilder::new()
        .with_config(config)
        .with_catalog(catalog)
        .build()?;
    app.run()?;
    Ok(())
}
