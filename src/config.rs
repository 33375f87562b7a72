//! Command-line and environment configuration.
//!
//! Every flag can also be set through a `PORTFOLIO_*` environment variable;
//! flags win when both are present.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_EXPORT_DIR: &str = "dist";

/// Personal portfolio: serve it, or export it as static HTML
#[derive(Parser, Debug)]
#[command(name = "haley-portfolio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the site over HTTP
    Serve(ServeConfig),

    /// Render every page into a directory of static files
    Export(ExportConfig),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    /// Address to listen on
    #[arg(long, env = "PORTFOLIO_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Directory served under /static
    #[arg(long, env = "PORTFOLIO_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Output directory
    #[arg(short, long, env = "PORTFOLIO_EXPORT_DIR", default_value = DEFAULT_EXPORT_DIR)]
    pub out: PathBuf,

    /// Directory copied to <out>/static
    #[arg(long, env = "PORTFOLIO_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    /// Skip copying static assets
    #[arg(long)]
    pub no_assets: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "haley-portfolio",
            "serve",
            "--bind",
            "127.0.0.1:8080",
            "--static-dir",
            "assets",
        ])
        .expect("parse");
        match cli.command {
            Command::Serve(cfg) => {
                assert_eq!(cfg.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
                assert_eq!(cfg.static_dir, PathBuf::from("assets"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn export_takes_output_dir() {
        let cli = Cli::try_parse_from(["haley-portfolio", "export", "-o", "public", "--no-assets"])
            .expect("parse");
        match cli.command {
            Command::Export(cfg) => {
                assert_eq!(cfg.out, PathBuf::from("public"));
                assert!(cfg.no_assets);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        let err = Cli::try_parse_from(["haley-portfolio", "serve", "--bind", "not-an-addr"]);
        assert!(err.is_err());
    }
}
