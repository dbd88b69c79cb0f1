//! DBInspector CLI - Main entry point

use clap::Parser;
use dbi_cli::commands::compare::QueryArgs;
use dbi_cli::{Cli, Commands};
use dbi_common::config::CacheConfig;
use dbi_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match cli.cache_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        },
    };

    let log_config = if cli.verbose {
        // Verbose mode: debug logs on the console
        LogConfig::builder()
            .level(LogLevel::Debug)
            .output(LogOutput::Console)
            .build()
    } else {
        // Normal mode: info+ to the cache's log directory only
        LogConfig::builder()
            .level(LogLevel::Info)
            .output(LogOutput::File)
            .log_dir(config.logs_dir())
            .build()
    };

    // Environment variables take precedence
    let log_config = log_config.clone().with_env_overrides().unwrap_or(log_config);

    // The CLI works without logging
    let _guard = init_logging(&log_config).ok().flatten();

    if let Err(e) = execute_command(&cli, &config) {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: &CacheConfig) -> dbi_cli::Result<()> {
    match &cli.command {
        Commands::Parse => dbi_cli::commands::parse::run(config),

        Commands::Compare {
            query,
            refseq_id,
            uniprot_id,
            symbol,
            outfile,
            format,
        } => {
            let args = QueryArgs {
                query: query.clone(),
                refseq_id: refseq_id.clone(),
                uniprot_id: uniprot_id.clone(),
                symbol: symbol.clone(),
            };
            dbi_cli::commands::compare::run(config, args, *format, outfile.as_deref())
        },

        Commands::DatabaseSummary { outfile, format } => {
            dbi_cli::commands::summary::run(config, *format, outfile.as_deref())
        },
    }
}
