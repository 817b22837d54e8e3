use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};

use routing_engine::EngineBuilder;
use routing_graph::load_graph_csv;
use routing_server::error::ServerError;
use routing_server::{cli::Cli, listener};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<(), ServerError> {
    info!(
        "loading graph from {:?} / {:?}",
        cli.nodes_csv, cli.edges_csv
    );
    let graph = load_graph_csv(&cli.nodes_csv, &cli.edges_csv)?;
    info!("graph loaded: {} nodes, {} edges", graph.node_count(), graph.edge_count());

    let engine = Arc::new(
        EngineBuilder::new()
            .routing_workers(cli.routing_workers)
            .traffic_workers(cli.traffic_workers)
            .build(graph)?,
    );

    let addr = cli.socket_addr();
    let tcp_listener = listener::bind(&addr, cli.backlog)?;

    listener::serve(tcp_listener, engine);
}
