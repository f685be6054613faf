//! session-vault binary entry point.

use std::process::ExitCode;
use std::sync::Arc;

use session_vault::api::{serve, AppState};
use session_vault::cli::{self, Args};
use session_vault::config::Config;
use session_vault::{logging, MemorySessionManager, SessionManager};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}\nRun with --help for usage.");
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        print!("{}", cli::help_text());
        return ExitCode::SUCCESS;
    }
    if args.version {
        println!("session-vault {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session-vault exited");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args)?;
    // A subscriber may already be installed by an embedding process
    let _ = logging::init(&config.logging.level);

    info!(version = env!("CARGO_PKG_VERSION"), "starting session-vault");

    let manager = Arc::new(MemorySessionManager::new());
    manager.init(&config.store.address, &config.store.options)?;

    serve(config.server_config()?, AppState::with_manager(manager)).await?;
    Ok(())
}
