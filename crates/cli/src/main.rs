use clap::{Args, Parser, Subcommand};
use anyhow::Result;

mod commands;
use commands::{ServeArgs, execute_serve_command, parse_listen_address, validate_seed_file};

#[derive(Parser)]
#[command(name = "albums")]
#[command(about = "Album catalog - a small JSON API over an in-memory record collection")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the album catalog HTTP server
    Serve(ServeCommandArgs),
    /// Check a seed file without starting the server
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct ServeCommandArgs {
    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    pub port: u16,
    /// Directory of frontend assets served at /
    #[arg(long, default_value = "./views/js")]
    pub static_dir: String,
    /// Do not serve static assets
    #[arg(long)]
    pub no_static: bool,
    /// JSON file with the initial albums (defaults to the built-in catalog)
    #[arg(long)]
    pub seed: Option<String>,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to a JSON seed file
    pub seed: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            let listen_addr = parse_listen_address(&args.host, args.port)?;

            let serve_args = ServeArgs {
                listen_addr,
                static_dir: if args.no_static { None } else { Some(args.static_dir) },
                seed: args.seed,
            };

            execute_serve_command(serve_args).await
        }
        Commands::Validate(args) => {
            validate_seed_file(&args.seed).await
        }
    }
}
