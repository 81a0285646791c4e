//! cliptrail: clipboard history recorder.
//!
//! This crate is the outer shell. It loads configuration, sets up tracing,
//! wires the infra and platform adapters into the use cases and either runs
//! the background tasks or answers one-shot commands from the CLI.

pub mod bootstrap;
pub mod cli;
pub mod commands;

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, SecondsFormat};
use ct_core::clipboard::preview;

use crate::bootstrap::{
    hold_clipboard_until_replaced, init_tracing_subscriber, load_config, resolve_app_dirs, run_app,
};
use crate::cli::{Cli, Command};
use crate::commands::{ClipCommands, ClipRecordDto};
use ct_app::AppPaths;

const LIST_PREVIEW_CHARS: usize = 60;

/// Entry point shared by the binary and integration tests.
pub async fn run(cli: Cli) -> Result<()> {
    let dirs = resolve_app_dirs(cli.config_dir.clone())?;
    let config = load_config(&AppPaths::config_path(&dirs))?;
    let paths = AppPaths::resolve(&dirs, &config);

    let command = cli.command();
    let file_logging = command == Command::Run && config.logging.file_logging;
    init_tracing_subscriber(file_logging.then_some(paths.logs_dir.as_path()))?;

    let (runtime, platform) = bootstrap::wire_runtime(config, &paths)?;
    let runtime = Arc::new(runtime);

    match command {
        Command::Run => run_app(runtime, platform).await,
        Command::List { json } => {
            let commands = ClipCommands::new(runtime);
            if json {
                println!("{}", commands.list_records_json().await);
            } else {
                let records = commands.list_records().await.map_err(anyhow::Error::msg)?;
                for record in &records {
                    println!("{}", format_list_line(record));
                }
            }
            Ok(())
        }
        Command::MarkSecret { key } => ClipCommands::new(runtime)
            .mark_secret(&key)
            .await
            .map_err(anyhow::Error::msg),
        Command::Clear => ClipCommands::new(runtime)
            .clear_all()
            .await
            .map_err(anyhow::Error::msg),
        Command::Copy { text } => {
            ClipCommands::new(runtime.clone())
                .copy_record_content(&text)
                .map_err(anyhow::Error::msg)?;
            if cfg!(target_os = "linux") {
                hold_clipboard_until_replaced(runtime).await?;
            }
            Ok(())
        }
    }
}

fn format_list_line(record: &ClipRecordDto) -> String {
    let when = DateTime::from_timestamp_millis(record.timestamp)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| record.timestamp.to_string());
    let body = if record.is_secret {
        "[secret]".to_string()
    } else {
        preview(&record.content, LIST_PREVIEW_CHARS)
    };
    format!("{}  {}  {}", record.hash, when, body)
}
