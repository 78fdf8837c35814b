use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Paginated host listing for managed database clusters")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List cluster hosts page by page
    List {
        /// Cluster ID (optional, lists all hosts when omitted)
        #[arg(short, long, default_value = "")]
        cluster: String,
        /// Hosts per page fetch (optional, defaults to 1000)
        #[arg(short, long)]
        page_size: Option<i64>,
        /// Maximum number of hosts to print, 0 for all
        #[arg(short, long, default_value_t = 0)]
        limit: usize,
        /// Hosts JSON file (overrides CLUSTER_HOSTS_PATH)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Count cluster hosts
    Count {
        /// Cluster ID (optional, counts all hosts when omitted)
        #[arg(short, long, default_value = "")]
        cluster: String,
        /// Hosts per page fetch (optional, defaults to 1000)
        #[arg(short, long)]
        page_size: Option<i64>,
        /// Hosts JSON file (overrides CLUSTER_HOSTS_PATH)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
