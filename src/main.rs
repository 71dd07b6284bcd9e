use anyhow::Result;
use clap::Parser;
use lavajato::cli::{print_error, Cli};
use lavajato::utils::get_log_dir;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    // Initialize tracing with file logging; stdout is left to the commands
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "lavajato.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(cli.execute());

    // Flush pending log lines before exiting
    drop(guard);

    if let Err(e) = result {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}
