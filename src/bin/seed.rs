use anyhow::Context;
use clap::Parser;
use tracing::info;

use ticker_portfolio::config::AppConfig;
use ticker_portfolio::db;
use ticker_portfolio::logging::{init_logging, LoggingConfig};
use ticker_portfolio::models::AssetInput;
use ticker_portfolio::services::asset_service;

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Populate the database with a demo user and portfolio")]
struct Args {
    #[arg(long, default_value = "carlos@email.com", help = "Demo account email (also the username)")]
    email: String,

    #[arg(long, default_value = "123456", help = "Demo account password")]
    password: String,

    #[arg(long, help = "Database URL, overrides DATABASE_URL")]
    database_url: Option<String>,
}

// (ticker, quantity, average price, current price)
const DEMO_ASSETS: &[(&str, i64, f64, Option<f64>)] = &[
    ("PETR4", 100, 28.50, Some(32.10)),
    ("VALE3", 50, 61.20, Some(58.75)),
    ("ITUB4", 200, 25.00, Some(30.00)),
    ("BBDC4", 150, 14.80, Some(15.20)),
    ("WEGE3", 40, 35.90, Some(41.30)),
    ("MGLU3", 300, 4.20, None),
    ("BBAS3", 80, 27.40, Some(26.90)),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging(&LoggingConfig::from_env()).map_err(|e| anyhow::anyhow!("logging: {}", e))?;

    let args = Args::parse();
    let database_url = args
        .database_url
        .unwrap_or_else(|| AppConfig::from_env().database_url);

    info!("Seeding database {}", database_url);
    let pool = db::connect(&database_url)
        .await
        .with_context(|| format!("failed to open database {}", database_url))?;

    let user_id = match db::user_queries::fetch_by_username(&pool, &args.email).await? {
        Some(user) => {
            info!("User {} already exists with id {}", args.email, user.id);
            user.id
        }
        None => {
            let hash = ticker_portfolio::auth::hash_password(args.password.clone()).await?;
            let user = db::user_queries::insert(&pool, &args.email, &args.email, &hash).await?;
            info!("Created user {} with id {}", args.email, user.id);
            user.id
        }
    };

    let removed = db::asset_queries::delete_all_for_user(&pool, user_id).await?;
    info!("Removed {} existing assets", removed);

    for &(ticker, quantity, average_price, current_price) in DEMO_ASSETS {
        let input = AssetInput {
            ticker: ticker.to_string(),
            quantity,
            average_price,
            current_price,
        };
        let view = asset_service::create(&pool, user_id, input).await?;
        info!(
            "Inserted {} x{} (invested {:.2}, now {:.2})",
            view.asset.ticker, view.asset.quantity, view.total_invested, view.current_value
        );
    }

    info!("Seed complete: {} assets for {}", DEMO_ASSETS.len(), args.email);
    Ok(())
}
