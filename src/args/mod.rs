use clap::Parser;
use std::fs;
use tracing::warn;

pub mod database;
pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// Parses and validates the command line. Turn the result into
/// [`CleanArgs`] once logging is up, so script read failures get reported.
///
/// # Errors
///
/// Will return `Err` if the arguments are invalid
pub fn args_checks() -> Result<Args, String> {
    let mut xx = Args::parse();
    xx.validate()?;
    Ok(xx)
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        let mut combined_sql_script = String::new();
        if let Some(db_startup_script) = &args.db_startup_script {
            let files = db_startup_script.split(';');
            for file in files {
                let file = file.trim();
                if file.is_empty() {
                    continue;
                }

                match fs::read_to_string(file) {
                    Ok(script) => {
                        combined_sql_script.push_str(&script);
                        // push a newline just in case
                        combined_sql_script.push('\n');
                    }
                    Err(e) => {
                        // Continue with other files rather than failing completely
                        warn!("Failed to read SQL startup script '{file}': {e}");
                    }
                }
            }
        }
        CleanArgs {
            db_name: args.db_name,
            host: args.host,
            port: args.port,
            db_populate_json: args.db_populate_json,
            seed_default_clubs: args.seed_default_clubs,
            log_dir: args.log_dir,
            combined_sql_script,
        }
    }
}
