//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Concurrent shortest-path routing service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address to bind the TCP listener to.
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// TCP port to listen on.
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// CSV file of node records (`id,x,y`).
    #[arg(long, value_name = "FILE")]
    pub nodes_csv: PathBuf,

    /// CSV file of edge records (`id,from,to,base_length,base_speed_limit`).
    #[arg(long, value_name = "FILE")]
    pub edges_csv: PathBuf,

    /// Number of routing worker threads (spec default: 8).
    #[arg(long, default_value_t = routing_engine::DEFAULT_ROUTING_WORKERS)]
    pub routing_workers: usize,

    /// Number of traffic-update worker threads (spec default: 2).
    #[arg(long, default_value_t = routing_engine::DEFAULT_TRAFFIC_WORKERS)]
    pub traffic_workers: usize,

    /// TCP listen backlog (spec requires ≥ 64).
    #[arg(long, default_value_t = 1024)]
    pub backlog: u32,
}

impl Cli {
    /// `bind:port` as a single socket address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
