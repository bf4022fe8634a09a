//! Onboarding CLI
//!
//! Runs the mock HR and directory services, and invokes the onboarding tools
//! against them from the command line.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use onboarding_core::state::DirectoryStore;
use onboarding_core::tools::{
    self, CreateProfileArgs, LookupDirectoryArgs, ScheduleMeetingArgs, ServiceClient, ToolCall,
};
use onboarding_server::{directory_router, hr_router, serve, shutdown_signal, HrState};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Onboarding assistant - mock services and tools")]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Run the HR service (employees and meetings)
    Hr {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(short, long, default_value = "8001")]
        port: u16,
    },
    /// Run the directory lookup service
    Directory {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(short, long, default_value = "8002")]
        port: u16,
        /// JSON array of {email, department, manager} to serve instead of the built-in entries
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Run both services in one process (default)
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8001")]
        hr_port: u16,
        #[arg(long, default_value = "8002")]
        directory_port: u16,
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Call one tool against the configured services and print the result
    Tool {
        #[command(subcommand)]
        tool: ToolCommand,
    },
    /// Print the tool descriptors as JSON
    Tools,
}

#[derive(Subcommand)]
enum ToolCommand {
    /// Create an employee profile
    CreateProfile {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        title: String,
    },
    /// Schedule a meeting
    ScheduleMeeting {
        #[arg(long)]
        subject: String,
        /// Participant email; repeat or comma-separate
        #[arg(short, long = "participant", value_delimiter = ',')]
        participants: Vec<String>,
        #[arg(long)]
        start_time: String,
        #[arg(long)]
        duration_minutes: Option<u32>,
    },
    /// Look up department and manager by email
    LookupDirectory { email: String },
    /// Call a tool by name with JSON arguments
    Invoke {
        name: String,
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

impl ToolCommand {
    fn into_call(self) -> std::result::Result<ToolCall, String> {
        match self {
            ToolCommand::CreateProfile { name, email, title } => {
                Ok(ToolCall::CreateProfile(CreateProfileArgs { name, email, title }))
            }
            ToolCommand::ScheduleMeeting {
                subject,
                participants,
                start_time,
                duration_minutes,
            } => Ok(ToolCall::ScheduleMeeting(ScheduleMeetingArgs {
                subject,
                participants,
                start_time,
                duration_minutes,
            })),
            ToolCommand::LookupDirectory { email } => {
                Ok(ToolCall::LookupDirectory(LookupDirectoryArgs { email }))
            }
            ToolCommand::Invoke { name, args } => {
                let arguments = serde_json::from_str(&args)
                    .map_err(|e| format!("❌ Arguments are not valid JSON: {}", e))?;
                ToolCall::from_json(&name, arguments)
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn directory_store(seed: Option<PathBuf>) -> Result<DirectoryStore> {
    match seed {
        Some(path) => DirectoryStore::from_json_file(path),
        None => Ok(DirectoryStore::seeded()),
    }
}

async fn run_tool(tool: ToolCommand) -> Result<()> {
    let client = ServiceClient::from_env()?;
    let message = match tool.into_call() {
        Ok(call) => tools::dispatch(&client, call).await,
        Err(message) => message,
    };
    println!("{}", message);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be set
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Args::parse();
    let command = args.command.unwrap_or(CliCommand::Serve {
        host: IpAddr::from([127, 0, 0, 1]),
        hr_port: 8001,
        directory_port: 8002,
        seed: None,
    });

    match command {
        CliCommand::Hr { host, port } => {
            let app = hr_router(HrState::default());
            serve("HR", SocketAddr::new(host, port), app, shutdown_signal()).await
        }
        CliCommand::Directory { host, port, seed } => {
            let store = directory_store(seed)?;
            tracing::info!(entries = store.len(), "Directory loaded");
            let app = directory_router(store);
            serve("Directory", SocketAddr::new(host, port), app, shutdown_signal()).await
        }
        CliCommand::Serve {
            host,
            hr_port,
            directory_port,
            seed,
        } => {
            let store = directory_store(seed)?;
            tracing::info!(entries = store.len(), "Directory loaded");

            let hr = serve(
                "HR",
                SocketAddr::new(host, hr_port),
                hr_router(HrState::default()),
                shutdown_signal(),
            );
            let directory = serve(
                "Directory",
                SocketAddr::new(host, directory_port),
                directory_router(store),
                shutdown_signal(),
            );
            tokio::try_join!(hr, directory)?;
            Ok(())
        }
        CliCommand::Tool { tool } => run_tool(tool).await,
        CliCommand::Tools => {
            let json = serde_json::to_string_pretty(&tools::definitions())
                .context("Failed to render tool definitions")?;
            println!("{}", json);
            Ok(())
        }
    }
}
