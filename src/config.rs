//! Server configuration
//!
//! Parsed from command line flags, falling back to environment variables.

use clap::Parser;

/// Default server address
pub const DEFAULT_ADDR: &str = "0.0.0.0:8888";

/// Default capacity of the server command queue
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

#[derive(Parser, Debug, Clone)]
#[command(name = "roomchat", version, about = "Minimal multi-room TCP chat server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(short, long, env = "ROOMCHAT_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// Capacity of the server command queue
    #[arg(
        long,
        env = "ROOMCHAT_CHANNEL_CAPACITY",
        default_value_t = DEFAULT_CHANNEL_CAPACITY,
        value_parser = parse_capacity
    )]
    pub channel_capacity: usize,
}

// mpsc::channel panics on zero
fn parse_capacity(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
