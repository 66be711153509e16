use bookings::LogLevel;
use bookings::core::config;
use bookings::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookings", about = "Track bookings and their date ranges")]
struct Args {
    /// Config file to use instead of ~/.bookings/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// strftime pattern for displayed dates (default %m/%d/%Y)
    #[arg(long)]
    date_format: Option<String>,

    /// Log verbosity for bookings.log
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to bookings.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let level = config::resolve_log_level(args.log_level.map(Into::into));
    if let Ok(log_file) = File::create("bookings.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Bookings starting up");

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        log::warn!("{}, using default config", e);
        config::BookingsConfig::default()
    });
    let resolved = config::resolve(&file_config, args.date_format.as_deref());

    tui::run(resolved)
}
