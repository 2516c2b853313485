mod error;
mod term;
mod widgets;

use std::fs::File;

use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use slidemeta_lib::SlideClient;
use slidemeta_lib::model::SlideHeader;
use slidemeta_lib::table::{TableOptions, properties_table};

use crate::error::Error;
use crate::widgets::table::GroupedTable;

/// Terminal viewer for slide image properties.
#[derive(Debug, Parser)]
#[command(
    name = "slidemeta-tui",
    about = "Grouped property table viewer for histology slide servers"
)]
struct Args {
    /// Base URL of the slide server.
    #[arg(long)]
    url: String,

    /// Project the slide belongs to.
    #[arg(long)]
    project: String,

    /// Numeric slide id.
    #[arg(long)]
    slide: u32,

    /// Image resource the header belongs to.
    #[arg(long, default_value = "raw")]
    resource: String,

    /// Viewport height in rows.
    #[arg(long)]
    height: Option<u16>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_file = File::create("slidemeta-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let client = SlideClient::builder().base_url(args.url.as_str()).build()?;

    info!(
        "Fetching slide {} ({}) header from {}",
        args.slide, args.resource, args.url
    );
    let header = client
        .header(&args.project, args.slide, &args.resource)
        .await?;
    let entries = header.entries();
    info!("Header carries {} properties", entries.len());

    // Rows are single terminal lines, so newlines show as a visible marker
    let mut options = TableOptions {
        line_break: "⏎".to_string(),
        ..TableOptions::default()
    };
    if let Some(height) = args.height {
        options.scroll_rows = height;
    }

    let config = properties_table(options);
    let mut table = GroupedTable::new(entries, &config);
    if let Some(status) = status_line(&header) {
        table = table.status(status);
    }
    table.run()?;

    Ok(())
}

/// Pyramid summary for the footer, when the header reports one.
fn status_line(header: &SlideHeader) -> Option<String> {
    let (width, height) = header.base_dimensions()?;
    Some(format!(
        "{} levels, {}x{} px",
        header.level_count(),
        width,
        height
    ))
}
