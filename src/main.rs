mod api;
mod commands;
mod hcl;
mod output;
mod registry;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{GenerateCommand, ListCommand};

#[derive(Parser)]
#[command(name = "tfgen")]
#[command(about = "Generate Terraform configuration from live Cloudflare resources", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Terraform resource blocks for existing resources
    Generate(GenerateCommand),

    /// List resource types supported for generation
    List(ListCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(cmd) => cmd.execute(),
        Commands::List(cmd) => cmd.execute(),
    }
}
