mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use autodash_client::{ApiClient, ClientConfig};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "autodash")]
#[command(about = "Automation Dashboard - terminal front-end for the automation API", long_about = None)]
struct Cli {
    /// Backend base URL (overrides DASHBOARD_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Task counters and resource usage (default)
    Overview,

    /// Backend liveness check
    Health,

    /// Backend status and available scripts
    Status,

    /// Aggregate dashboard counters
    Summary,

    /// System monitoring
    #[command(subcommand)]
    System(SystemCommand),

    /// Data upload, analysis and processing
    #[command(subcommand)]
    Data(DataCommand),

    /// File management
    #[command(subcommand)]
    Files(FilesCommand),

    /// Task execution history
    #[command(subcommand)]
    History(HistoryCommand),

    /// Show the resolved client configuration
    Config,
}

#[derive(Subcommand)]
enum SystemCommand {
    /// Full health report with alerts
    Health,
    Cpu,
    Memory,
    Disk {
        /// Path on the filesystem to inspect
        #[arg(short, long)]
        path: Option<String>,
    },
    Network,
    Processes {
        /// Number of processes to list
        #[arg(short, long)]
        top: Option<u32>,
    },
}

#[derive(Subcommand)]
enum DataCommand {
    /// Upload a CSV or JSON file
    Upload { file: PathBuf },
    /// Analyze a previously uploaded file
    Analyze { filename: String },
    /// Clean a file on the backend and save the result
    Process {
        filepath: String,
        #[arg(short, long, default_value = "processed_output.csv")]
        output: String,
    },
}

#[derive(Subcommand)]
enum FilesCommand {
    List {
        #[arg(short, long)]
        dir: Option<String>,
        #[arg(short, long)]
        recursive: bool,
    },
    Size {
        #[arg(short, long)]
        dir: Option<String>,
    },
    /// Delete files older than the given number of days
    Cleanup {
        #[arg(short, long)]
        dir: String,
        #[arg(long, default_value = "30")]
        days: u32,
        /// Only delete files with these suffixes (e.g. .log)
        #[arg(short, long = "ext")]
        extensions: Vec<String>,
    },
    /// Move files into one folder per extension
    Organize {
        #[arg(short, long)]
        dir: String,
    },
    Backup { source: String, destination: String },
}

#[derive(Subcommand)]
enum HistoryCommand {
    Show {
        #[arg(short, long)]
        limit: Option<u32>,
    },
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.api_url {
        Some(url) => ClientConfig::new(url.clone()),
        None => ClientConfig::from_env(),
    };
    let client = ApiClient::from_config(&config)?;
    tracing::debug!(base_url = %client.base_url(), "Using automation API");
    let out = Output { json: cli.json };

    match cli.command.unwrap_or(Commands::Overview) {
        Commands::Overview => cmd_overview(&client, &out).await?,
        Commands::Health => {
            let health = client.health().await?;
            out.emit(&health, render::health_check)?;
        }
        Commands::Status => {
            let status = client.status().await?;
            out.emit(&status, render::api_status)?;
        }
        Commands::Summary => {
            let summary = client.dashboard_summary().await?;
            out.emit(&summary, render::summary)?;
        }
        Commands::System(cmd) => cmd_system(&client, &out, cmd).await?,
        Commands::Data(cmd) => cmd_data(&client, &out, cmd).await?,
        Commands::Files(cmd) => cmd_files(&client, &out, cmd).await?,
        Commands::History(cmd) => cmd_history(&client, &out, cmd).await?,
        Commands::Config => out.emit(&config, |c| format!("API base URL: {}\n", c.base_url))?,
    }

    Ok(())
}

struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            print!("{}", text(value));
        }
        Ok(())
    }
}

async fn cmd_overview(client: &ApiClient, out: &Output) -> Result<()> {
    let (summary, health) = tokio::try_join!(client.dashboard_summary(), client.system_health())
        .context("Failed to load dashboard overview")?;

    if out.json {
        let combined = serde_json::json!({ "summary": summary, "health": health });
        println!("{}", serde_json::to_string_pretty(&combined)?);
        return Ok(());
    }

    println!();
    print!("{}", render::overview(&summary, &health));
    println!();
    Ok(())
}

async fn cmd_system(client: &ApiClient, out: &Output, cmd: SystemCommand) -> Result<()> {
    match cmd {
        SystemCommand::Health => out.emit(&client.system_health().await?, render::system_health),
        SystemCommand::Cpu => out.emit(&client.cpu_stats().await?, render::cpu),
        SystemCommand::Memory => out.emit(&client.memory_stats().await?, render::memory),
        SystemCommand::Disk { path } => {
            out.emit(&client.disk_stats(path.as_deref()).await?, render::disk)
        }
        SystemCommand::Network => out.emit(&client.network_stats().await?, render::network),
        SystemCommand::Processes { top } => {
            out.emit(&client.processes(top).await?, render::processes)
        }
    }
}

async fn cmd_data(client: &ApiClient, out: &Output, cmd: DataCommand) -> Result<()> {
    match cmd {
        DataCommand::Upload { file } => {
            let result = client
                .upload_file(&file)
                .await
                .with_context(|| format!("Failed to upload {}", file.display()))?;
            out.emit(&result, |r| {
                format!("Uploaded {}\n{}", r.filename, render::statistics(&r.statistics))
            })
        }
        DataCommand::Analyze { filename } => {
            let stats = client.analyze_file(&filename).await?;
            out.emit(&stats, render::statistics)
        }
        DataCommand::Process { filepath, output } => {
            let result = client.process_data(&filepath, &output).await?;
            out.emit(&result, |r| format!("{} -> {}\n", r.message, r.output_file))
        }
    }
}

async fn cmd_files(client: &ApiClient, out: &Output, cmd: FilesCommand) -> Result<()> {
    match cmd {
        FilesCommand::List { dir, recursive } => {
            // Only send the flag when it was asked for
            let recursive = recursive.then_some(true);
            let listing = client.list_files(dir.as_deref(), recursive).await?;
            out.emit(&listing, render::file_listing)
        }
        FilesCommand::Size { dir } => {
            let size = client.directory_size(dir.as_deref()).await?;
            out.emit(&size, render::directory_size)
        }
        FilesCommand::Cleanup {
            dir,
            days,
            extensions,
        } => {
            let extensions = (!extensions.is_empty()).then_some(extensions);
            let result = client.cleanup_files(&dir, days, extensions).await?;
            out.emit(&result, |r| format!("Deleted {} files\n", r.deleted_count))
        }
        FilesCommand::Organize { dir } => {
            let result = client.organize_files(&dir).await?;
            out.emit(&result, status_line)
        }
        FilesCommand::Backup {
            source,
            destination,
        } => {
            let result = client.backup_files(&source, &destination).await?;
            out.emit(&result, status_line)
        }
    }
}

async fn cmd_history(client: &ApiClient, out: &Output, cmd: HistoryCommand) -> Result<()> {
    match cmd {
        HistoryCommand::Show { limit } => {
            let page = client.history(limit).await?;
            out.emit(&page, render::history)
        }
        HistoryCommand::Clear => {
            let result = client.clear_history().await?;
            out.emit(&result, status_line)
        }
    }
}

fn status_line(status: &autodash_client::OperationStatus) -> String {
    match &status.message {
        Some(message) => format!("{}: {}\n", status.status, message),
        None => format!("{}\n", status.status),
    }
}
