use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use hours_review::api::{AppState, create_router};
use hours_review::cli::{Cli, Command, ExportArgs, ReportArgs, ServeArgs};
use hours_review::ingest::export_detail_csv;
use hours_review::pipeline::{load_clean_entries, run_review};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for log output
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report(args: &ReportArgs) -> Result<()> {
    let config = args.review_config()?;
    let input = fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let outcome = run_review(&input, &config)?;
    let output = json!({
        "technicians": outcome.entries.technicians(),
        "daily_totals": outcome.daily_totals,
        "report": outcome.report,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn export(args: &ExportArgs) -> Result<()> {
    let config = args.review_config()?;
    let input = fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let entries = load_clean_entries(&input, &config)?;
    let csv = export_detail_csv(&entries, args.technician_filter())?;

    match &args.output {
        Some(path) => {
            fs::write(path, csv).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote detail export");
        }
        None => print!("{}", csv),
    }
    Ok(())
}

async fn serve(args: &ServeArgs) -> Result<()> {
    let config = args.review_config()?;
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("Failed to bind {}", args.addr))?;
    info!(addr = %args.addr, "Starting API server");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    match &cli.command {
        Command::Report(args) => report(args),
        Command::Export(args) => export(args),
        Command::Serve(args) => serve(args).await,
    }
}
