use clap::Parser;
use schema_groups::cli::{Cli, handle_error, init_tracing, run_command};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run_command(cli.command).await.unwrap_or_else(handle_error);
}
