use clap::Parser;
use tracing_subscriber::EnvFilter;

use board_sync::{actions, run, Cli};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            // Surface the failure on the workflow output channel before
            // exiting; the runner reads `error` to mark the run failed.
            let message = format!("{e:#}");
            eprintln!("[ERROR] {message}");
            let _ = actions::set_output("error", &message);
            std::process::exit(1);
        }
    }
}
