use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use schedule_planner::config::{Cli, Command};
use schedule_planner::display::{format_activity, print_planner};
use schedule_planner::{web, Planner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let data = cli.seed.initial_data()?;
    let catalog = cli.seed.catalog()?;
    tracing::info!(
        days = data.days.len(),
        rows = data.times.len(),
        board = data.activities.len(),
        catalog = catalog.len(),
        "planner seeded"
    );

    match cli.command.unwrap_or(Command::Show) {
        Command::Serve { bind, port } => {
            println!("Access the planner at http://localhost:{}", port);
            web::start_server(&bind, port, Planner::new(data, catalog)).await?;
        }
        Command::Show => {
            print_planner(&data);
            if !catalog.is_empty() {
                println!("\nCatalog:");
                for entry in &catalog {
                    println!("  {} - {}", entry.id, format_activity(entry));
                }
            }
        }
    }

    Ok(())
}
