//! blackhole-client CLI entry point.

use blackhole_client::cli::{Cli, Commands};
use blackhole_client::client::BlackholeClient;
use blackhole_client::output::{pretty, render};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = BlackholeClient::new(&cli.base_url);

    match cli.command {
        Commands::Requests(requests_cmd) => {
            use blackhole_client::cli::requests::RequestsAction;
            match requests_cmd.action {
                RequestsAction::List => {
                    let records = client.list_requests().await?;
                    println!("{}", render(&records[..], cli.format, pretty::format_records)?);
                }
            }
        }
        Commands::Health(health_cmd) => {
            use blackhole_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    client.livez().await?;
                    if !cli.quiet {
                        println!("Server at {} is live", client.base_url());
                    }
                }
                HealthAction::Status => {
                    let health = client.healthz().await?;
                    println!("{}", render(&health, cli.format, pretty::format_health)?);
                }
            }
        }
    }

    Ok(())
}
