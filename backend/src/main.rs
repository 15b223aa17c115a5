//! txn-import CLI - send transaction files to the import endpoint
//!
//! ```bash
//! txn-import send jan.csv feb.csv          # Stage both files and import them as one batch
//! txn-import send --dry-run jan.csv        # Only show what would be sent
//! txn-import serve --port 3333             # Run the reference import endpoint
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use import_flow::{ImportFlow, Locale, SubmissionStatus, ACCEPTED_EXTENSIONS};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use txn_import::config::{self, env, ServerConfig};
use txn_import::{HttpImportService, LocalFile};

#[derive(Parser)]
#[command(name = "txn-import")]
#[command(about = "Import transaction files as one batch", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stage files and submit them in a single request
    Send {
        /// Files to import (only CSV is expected)
        files: Vec<PathBuf>,

        /// Base URL of the import API
        #[arg(long, env = env::API_URL, default_value = config::DEFAULT_API_URL)]
        api_url: String,

        /// Display locale (pt-BR or en)
        #[arg(long, env = env::LOCALE, default_value = "pt-BR")]
        locale: Locale,

        /// Show the staged files without sending them
        #[arg(long)]
        dry_run: bool,
    },

    /// Start the reference import endpoint
    Serve {
        /// Port to listen on
        #[arg(short, long, env = env::PORT, default_value_t = config::DEFAULT_PORT)]
        port: u16,

        /// Directory where accepted batches are written
        #[arg(long, env = env::STORE_DIR)]
        store_dir: Option<PathBuf>,

        /// Largest accepted request body, in bytes
        #[arg(long, env = env::MAX_BODY_BYTES, default_value_t = config::DEFAULT_MAX_BODY_BYTES)]
        max_body_bytes: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "txn_import=info,import_flow=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Send {
            files,
            api_url,
            locale,
            dry_run,
        } => cmd_send(&files, &api_url, locale, dry_run).await,

        Commands::Serve {
            port,
            store_dir,
            max_body_bytes,
        } => cmd_serve(ServerConfig {
            port,
            store_dir,
            max_body_bytes,
        })
        .await
        .map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the batch was accepted (or, on a dry run, staged).
async fn cmd_send(
    paths: &[PathBuf],
    api_url: &str,
    locale: Locale,
    dry_run: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let files = LocalFile::open_all(paths).await?;
    warn_unexpected_extensions(paths);

    let mut flow = ImportFlow::new(locale);
    flow.stage_files(files);

    if !flow.staged().is_empty() {
        eprintln!("📄 Staged {} file(s):", flow.staged().len());
        for file in flow.staged() {
            println!("   {} ({})", file.name(), file.readable_size());
        }
    }

    if dry_run {
        return Ok(!flow.staged().is_empty());
    }

    let service = HttpImportService::new(api_url);
    eprintln!("📤 Sending to {}", service.endpoint());

    let status = flow.submit_batch(&service).await;
    if let Some(message) = flow.render_status() {
        println!("{}", message.text);
    }

    Ok(status == SubmissionStatus::Success)
}

/// The CSV restriction is a hint only; nothing is rejected.
fn warn_unexpected_extensions(paths: &[PathBuf]) {
    let expected = ACCEPTED_EXTENSIONS.trim_start_matches('.');
    for path in paths {
        let matches = Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(expected));
        if !matches {
            eprintln!("⚠️  {} is not a {} file", path.display(), ACCEPTED_EXTENSIONS);
        }
    }
}

async fn cmd_serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    txn_import::server::start_server(config).await?;
    Ok(())
}
