//! Qrsmith CLI - styled QR code generation.

mod commands;
mod ui;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrsmith")]
#[command(about = "Styled QR code generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the encoded payload string for the given content
    Encode {
        #[command(subcommand)]
        content: commands::Content,
    },
    /// Print the QR code to the terminal
    Preview {
        #[command(subcommand)]
        content: commands::Content,
    },
    /// Render the QR code to an image file
    Generate(commands::GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("qrsmith=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { content } => commands::encode(content),
        Commands::Preview { content } => commands::preview(content),
        Commands::Generate(args) => commands::generate(args)?,
    }

    Ok(())
}
