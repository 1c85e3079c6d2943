//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::Config;

/// User Directory - In-memory user registry over HTTP
#[derive(Parser, Debug)]
#[command(name = "user-directory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to (overrides SERVER_HOST)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (overrides SERVER_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Listen address: command-line values win over configuration
    pub fn addr(&self, config: &Config) -> String {
        format!(
            "{}:{}",
            self.host.as_deref().unwrap_or(&config.server_host),
            self.port.unwrap_or(config.server_port)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_args_override_config() {
        let cli = Cli::parse_from(["user-directory", "serve", "--port", "9090"]);
        let Commands::Serve(args) = cli.command;

        assert_eq!(args.addr(&Config::default()), "0.0.0.0:9090");
    }

    #[test]
    fn test_serve_args_fall_back_to_config() {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 4000,
        };

        assert_eq!(ServeArgs::default().addr(&config), "127.0.0.1:4000");
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["user-directory", "serve", "-v"]);
        assert!(cli.verbose);
    }
}
