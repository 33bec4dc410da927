use clap::Parser as _;
use dotenvy::dotenv;
use todo_db_init::cli::{Cli, Commands};
use todo_db_init::setup::{check, setup};
use todo_db_init::utils::logging::init_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Setup { setup_command } => {
            info!("Executing setup command with args: {:?}", setup_command);
            match setup(setup_command).await {
                Ok(report) => {
                    info!(
                        database = %report.database,
                        collection = %report.collection,
                        status = ?report.collection_status,
                        "Database setup completed"
                    );
                }
                Err(e) => {
                    error!(
                        error = %e,
                        error_chain = ?e,
                        "Failed to setup database"
                    );
                    panic!("Failed to setup database: {}", e);
                }
            }
        }
        Commands::Verify { verify_command } => {
            info!("Executing verify command with args: {:?}", verify_command);
            match check(verify_command).await {
                Ok(report) => {
                    info!(collection = %report.collection, "Database schema verified");
                }
                Err(e) => {
                    error!(
                        error = %e,
                        error_chain = ?e,
                        "Failed to verify database"
                    );
                    panic!("Failed to verify database: {}", e);
                }
            }
        }
    }
}
