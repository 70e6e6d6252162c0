//! Shimatabi CLI
//!
//! Thin operator surface over the bundler: production builds, a dev server
//! with live reload, and a deploy check. Exit code is 0 on success and 1 on
//! any reported error.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Shimatabi.
#[derive(Parser)]
#[command(
    name = "shimatabi",
    version,
    about = "Build and serve the Shimatabi travel site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Bundle the site for production
    Build {
        /// Skip release optimizations
        #[arg(long)]
        debug: bool,
    },
    /// Start development server with live reload
    Watch {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Open browser automatically
        #[arg(long)]
        open: bool,
    },
    /// Production build plus deployable-artifact verification
    Deploy,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    shimatabi::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { debug } => {
            shimatabi::cmd::build::run(&cli.config, !debug)?;
        }
        Commands::Watch { port, open } => {
            shimatabi::cmd::watch::run(&cli.config, port, open).await?;
        }
        Commands::Deploy => {
            shimatabi::cmd::deploy::run(&cli.config)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_build_command_parsing() {
        let args = ["shimatabi", "build"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("config.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Build { debug } => assert!(!debug),
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_debug_flag() {
        let args = ["shimatabi", "build", "--debug"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Build { debug } => assert!(debug),
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_watch_command_parsing() {
        let args = ["shimatabi", "watch", "--port", "8080", "--open"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Watch { port, open } => {
                assert_eq!(port, Some(8080));
                assert!(open);
            }
            _ => panic!("Expected Watch command"),
        }
    }

    #[test]
    fn test_cli_watch_defaults() {
        let args = ["shimatabi", "watch"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Watch { port, open } => {
                assert!(port.is_none());
                assert!(!open);
            }
            _ => panic!("Expected Watch command"),
        }
    }

    #[test]
    fn test_cli_deploy_command_parsing() {
        let args = ["shimatabi", "deploy"];
        let cli = Cli::parse_from(args);
        assert!(matches!(cli.command, Commands::Deploy));
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["shimatabi", "-vvv", "build"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["shimatabi", "--config", "site.toml", "deploy"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
