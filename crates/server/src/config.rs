//! Command line and environment configuration.
//!
//! Precedence: defaults, then `STOREFRONT_*` environment variables, then flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use storefront_content::{ContentError, SiteContent};
use storefront_observability::LogFormat;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 4321;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront site: dev server and static build")]
pub struct Cli {
    /// Log output format (pretty or json)
    #[arg(long, global = true, env = "STOREFRONT_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve rendered pages over HTTP
    Serve(ServeArgs),
    /// Write rendered pages to a directory
    Build(BuildArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "STOREFRONT_HOST", default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Port to bind
    #[arg(long, env = "STOREFRONT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[command(flatten)]
    pub content: ContentArgs,
}

impl ServeArgs {
    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
        }
    }
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Output directory
    #[arg(long, default_value = "dist")]
    pub out: PathBuf,

    #[command(flatten)]
    pub content: ContentArgs,
}

#[derive(Debug, Args)]
pub struct ContentArgs {
    /// TOML file replacing the compiled-in navigation and products
    #[arg(long = "content", env = "STOREFRONT_CONTENT")]
    pub path: Option<PathBuf>,
}

impl ContentArgs {
    /// Load the content file if one was given, else the seeded content.
    pub fn load(&self) -> Result<SiteContent, ContentError> {
        match &self.path {
            Some(path) => SiteContent::load(path),
            None => Ok(SiteContent::seeded()),
        }
    }
}

/// Dev-server bind settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}
