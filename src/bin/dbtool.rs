//! Operator CLI for database maintenance. Mirrors the /api/dev endpoints so
//! the same tasks can run without a live HTTP server.

use clap::{Parser, Subcommand};
use migration::{Migrator, MigratorTrait};

use restaurant_admin_backend::config::Config;
use restaurant_admin_backend::database::create_pool;
use restaurant_admin_backend::error::AppResult;
use restaurant_admin_backend::services::MaintenanceService;

#[derive(Parser)]
#[command(name = "dbtool", about = "Database maintenance for the restaurant admin backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the column layout of one application table
    Schema {
        /// Table name, e.g. customers or menu_items
        table: String,
    },
    /// Insert sample customers and menu items for a restaurant
    Seed {
        #[arg(long)]
        restaurant_id: i32,
    },
    /// Drop every application table, including migration history
    DropTables,
    /// Apply any pending migrations
    Migrate,
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = Config::from_toml()
        .map_err(|e| restaurant_admin_backend::AppError::Config(e.to_string()))?;
    let pool = std::sync::Arc::new(create_pool(&config.database).await?);
    let maintenance = MaintenanceService::new(pool.clone());

    match cli.command {
        Command::Schema { table } => {
            let columns = maintenance.table_schema(&table).await?;
            for col in columns {
                println!(
                    "{:<24} {:<20} nullable={:<4} default={}",
                    col.column_name,
                    col.data_type,
                    col.is_nullable,
                    col.column_default.as_deref().unwrap_or("-")
                );
            }
        }
        Command::Seed { restaurant_id } => {
            maintenance.seed(restaurant_id).await?;
            println!("Sample data added for restaurant {restaurant_id}");
        }
        Command::DropTables => {
            maintenance.drop_tables().await?;
            println!("All tables dropped");
        }
        Command::Migrate => {
            Migrator::up(pool.as_ref(), None).await?;
            println!("Migrations applied");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("dbtool: {e}");
        std::process::exit(1);
    }
}
