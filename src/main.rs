use anyhow::Result;

use cluster_hosts::cli::Command;
use cluster_hosts::{handle_count, handle_list, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::List {
            cluster,
            page_size,
            limit,
            file,
        } => handle_list(cluster, *page_size, *limit, file.clone()),
        Command::Count {
            cluster,
            page_size,
            file,
        } => handle_count(cluster, *page_size, file.clone()),
    }
}
