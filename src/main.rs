use golf_rounds::args::{self, CleanArgs};
use golf_rounds::controller::{self, db_prefill};
use golf_rounds::log;
use golf_rounds::storage::{SqliteStorage, Storage};

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks()?;
    let _log_guard = log::init_log(args.log_dir.as_deref());
    let args = CleanArgs::new(args);

    let storage = match SqliteStorage::open(&args.db_name) {
        Ok(storage) => storage,
        Err(e) => {
            error!("Could not open database '{}': {e}", args.db_name);
            std::process::exit(1);
        }
    };
    run_startup_tasks(&args, &storage).await?;

    info!("Listening on {}:{}", args.host, args.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(storage.clone()))
            .configure(controller::configure)
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}

async fn run_startup_tasks(
    args: &CleanArgs,
    storage: &SqliteStorage,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.combined_sql_script.is_empty() {
        storage.execute_batch(&args.combined_sql_script).await?;
        info!("Ran startup script(s)");
    }

    if args.seed_default_clubs {
        let added = db_prefill::db_prefill(&db_prefill::default_bag(), storage).await?;
        info!("Seed complete, {added} club(s) added");
    }

    if let Some(json_data) = &args.db_populate_json {
        let clubs = db_prefill::clubs_from_json(json_data)?;
        let added = db_prefill::db_prefill(&clubs, storage).await?;
        info!("Loaded clubs json, {added} club(s) added");
    }

    Ok(())
}
