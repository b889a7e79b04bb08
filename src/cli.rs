//! Command-line surface of the `algotrace` binary

use crate::algorithms::{SearchKind, SortKind};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "algotrace")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Record and replay step-by-step traces of searches and sorts")]
#[command(long_about = r#"
algotrace runs a graph search or a sort, records a snapshot of the subject
after every meaningful step, writes the trace to disk and replays it in a
terminal viewer.

EXAMPLES:
  # Replay a selection sort of fixed values
  algotrace sort --algorithm selection --values "5,3,8,6,2"

  # Sort 20 random values, reproducibly
  algotrace sort --algorithm quick --random 20 --seed 7

  # Breadth-first search from A, printing steps instead of the viewer
  algotrace --no-tui search --algorithm bfs --graph graph.json --start A

ENVIRONMENT VARIABLES:
  ALGOTRACE_LOG_DIR   Trace directory (default: logs)
  ALGOTRACE_LOG       Log level (trace, debug, info, warn, error)
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Directory traces are written to
    #[arg(long, env = "ALGOTRACE_LOG_DIR", global = true, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Log level
    #[arg(long, env = "ALGOTRACE_LOG", global = true)]
    #[arg(value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Print the trace instead of opening the viewer
    #[arg(long, global = true)]
    pub no_tui: bool,

    /// Auto-play delay between steps, in milliseconds
    #[arg(long, global = true, default_value_t = 500)]
    pub interval_ms: u64,
}

impl GlobalOptions {
    pub fn play_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortAlgorithmArg {
    Insertion,
    Selection,
    Merge,
    Quick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchAlgorithmArg {
    Bfs,
    Dfs,
    Ucs,
}

impl From<SortAlgorithmArg> for SortKind {
    fn from(arg: SortAlgorithmArg) -> Self {
        match arg {
            SortAlgorithmArg::Insertion => SortKind::Insertion,
            SortAlgorithmArg::Selection => SortKind::Selection,
            SortAlgorithmArg::Merge => SortKind::Merge,
            SortAlgorithmArg::Quick => SortKind::Quick,
        }
    }
}

impl From<SearchAlgorithmArg> for SearchKind {
    fn from(arg: SearchAlgorithmArg) -> Self {
        match arg {
            SearchAlgorithmArg::Bfs => SearchKind::Bfs,
            SearchAlgorithmArg::Dfs => SearchKind::Dfs,
            SearchAlgorithmArg::Ucs => SearchKind::Ucs,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort a sequence of integers
    Sort {
        #[arg(short, long, value_enum)]
        algorithm: SortAlgorithmArg,

        /// Comma-separated values, e.g. "5,3,8"
        #[arg(long, conflicts_with = "random", required_unless_present = "random")]
        values: Option<String>,

        /// Generate this many random values in 1..=100
        #[arg(long)]
        random: Option<usize>,

        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,
    },

    /// Search a graph loaded from a JSON file
    Search {
        #[arg(short, long, value_enum)]
        algorithm: SearchAlgorithmArg,

        /// Graph description: {"directed": bool, "nodes": [..], "edges": [..]}
        #[arg(short, long)]
        graph: PathBuf,

        /// Node to start from
        #[arg(short, long)]
        start: String,
    },
}
