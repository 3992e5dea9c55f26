pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sapiencia-api")]
#[command(about = "Sapiencia API - REST backend for the scholarship-fund system")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Port to listen on (overrides PORT / SAPIENCIA_API_PORT)")]
        port: Option<u16>,
    },

    #[command(about = "Print a salt and PBKDF2 hash for seeding the usuarios table")]
    HashPassword {
        #[arg(help = "Clear-text password")]
        password: String,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => commands::serve::handle(port).await,
        Commands::HashPassword { password } => commands::hash_password::handle(&password, output_format),
    }
}
