use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::errors::ServerError;

pub const DEFAULT_LOG_FILTER: &str = "activity_server=debug,tower_http=debug";

#[derive(Parser, Debug, Clone)]
#[command(name = "activity-server")]
#[command(about = "Mergington High School extracurricular activities API", long_about = None)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0:8080")]
    pub bind_address: String,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Print a live registration log to the console
    #[arg(long, env = "MONITORING")]
    pub monitoring: bool,

    /// Mount POST /test/reset, which restores the seed activities
    #[arg(long, env = "ENABLE_RESET")]
    pub enable_reset: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        self.bind_address
            .parse()
            .map_err(|source| ServerError::InvalidBindAddress {
                address: self.bind_address.clone(),
                source,
            })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            static_dir: PathBuf::from("static"),
            monitoring: false,
            enable_reset: false,
        }
    }
}
