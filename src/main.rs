use clap::Parser;
use countries::RegionFilter;
use countries::core::config::{self, CliOverrides, CountriesConfig};
use countries::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "countries", about = "Browse, search and filter the world's countries")]
struct Args {
    /// Initial region filter
    #[arg(short, long, value_enum)]
    region: Option<RegionFilter>,

    /// Rows added to the list per scroll page
    #[arg(short, long)]
    page_size: Option<usize>,

    /// API base URL (mirror or local server)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to countries.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("countries.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        CountriesConfig::default()
    });
    let cli = CliOverrides {
        region: args.region,
        page_size: args.page_size,
        base_url: args.base_url,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Countries starting up: base_url={}, page_size={}, region={:?}",
        resolved.base_url,
        resolved.page_size,
        resolved.region
    );

    tui::run(resolved)
}
