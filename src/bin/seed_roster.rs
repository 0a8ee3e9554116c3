use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use std::path::PathBuf;

use mergington::database::SqliteRoster;
use mergington::services::seed_service;

// Prepares a SQLite roster ahead of the first server start.
#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let Some(db_url) = env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()) else {
        eprintln!("seed_roster: DATABASE_URL must be set (e.g. sqlite://roster.db?mode=rwc)");
        std::process::exit(2);
    };
    let seed_path = env::var("ACTIVITIES_SEED").ok().map(PathBuf::from);

    let roster = match seed_service::resolve_roster(seed_path.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("seed_roster: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match SqlitePoolOptions::new().connect(&db_url).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("seed_roster: cannot connect to {}: {}", db_url, e);
            std::process::exit(1);
        }
    };

    let store = SqliteRoster::new(pool);
    let result = match store.ensure_schema().await {
        Ok(()) => store.seed(&roster).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => {
            println!(
                "roster seed: activities={}, inserted={}, skipped={}",
                report.activities, report.inserted, report.skipped
            );
        }
        Err(e) => {
            eprintln!("roster seed failed: {}", e);
            std::process::exit(1);
        }
    }
}
