use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The sqlite database file. `:memory:` keeps everything in memory.
    #[arg(
        short = 'n',
        long,
        value_name = "DATABASE_NAME",
        default_value = "data/golf-rounds.db"
    )]
    pub db_name: String,
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// If specified, this sql is run on program startup, after the schema is created. Separate several files with `;`.
    #[arg(long, value_name = "DATABASE_STARTUP_SCRIPT", value_parser = crate::args::validation::check_readable_file)]
    pub db_startup_script: Option<String>,
    /// A json list of clubs to add to the bag on startup.
    #[arg(
        long,
        value_name = "CLUBS_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub db_populate_json: Option<Value>,
    /// Add the default bag (driver, hybrid, iron, wedge) if those clubs are missing.
    #[arg(long)]
    pub seed_default_clubs: bool,
    /// Also write logs to a daily-rolling file in this directory.
    #[arg(long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_name: String,
    pub host: String,
    pub port: u16,
    pub db_populate_json: Option<Value>,
    pub seed_default_clubs: bool,
    pub log_dir: Option<PathBuf>,
    pub combined_sql_script: String,
}
