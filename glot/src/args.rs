use std::path::PathBuf;

use clap::Parser;

/// Glot translation gateway
#[derive(Debug, Parser)]
#[command(name = "glot", about = "Translation gateway speaking several API dialects")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "glot.toml", env = "GLOT_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "GLOT_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
