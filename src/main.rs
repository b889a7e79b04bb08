// algotrace: step-by-step search and sort traces with a replay viewer

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use algotrace::algorithms::{search, sort, SearchKind, SortKind};
use algotrace::cli::{Cli, Commands, GlobalOptions};
use algotrace::subject::{Graph, Sequence};
use algotrace::trace::replay::Replay;
use algotrace::trace::sink::{FileSink, TraceSink};
use algotrace::trace::StepTrace;
use algotrace::ui::App;

fn init_tracing(global: &GlobalOptions) {
    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(global.log_level.as_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_graph(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read graph file {}", path.display()))?;
    let graph = serde_json::from_str(&text)
        .with_context(|| format!("invalid graph description in {}", path.display()))?;
    Ok(graph)
}

/// Clap requires exactly one of `--values` and `--random`
fn build_sequence(
    values: Option<String>,
    random: Option<usize>,
    seed: Option<u64>,
) -> Result<Sequence> {
    if let Some(text) = values {
        return Ok(text.parse()?);
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(Sequence::random(random.unwrap_or_default(), &mut rng))
}

/// Write the trace through the sink; a failure is reported but never fatal
fn persist(sink: &dyn TraceSink, trace: &StepTrace) {
    let name = trace.algorithm().log_name();
    if let Err(err) = sink.persist(name, trace) {
        warn!(error = %err, name, "could not persist trace, continuing with the in-memory copy");
    }
}

fn print_trace(trace: &StepTrace) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{} ({} steps)", trace.algorithm(), trace.len())?;
    for (i, step) in trace.iter().enumerate() {
        writeln!(out, "{:>4}  {}", i + 1, step)?;
    }
    Ok(())
}

fn run_viewer(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore the terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("viewer failed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    let (trace, graph) = match cli.command {
        Commands::Sort {
            algorithm,
            values,
            random,
            seed,
        } => {
            let mut sequence = build_sequence(values, random, seed)?;
            info!(len = sequence.len(), "sorting {}", sequence);
            (sort(&mut sequence, SortKind::from(algorithm)), None)
        }
        Commands::Search {
            algorithm,
            graph,
            start,
        } => {
            let graph = load_graph(&graph)?;
            info!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                start = %start,
                "searching graph"
            );
            let trace = search(&graph, &start, SearchKind::from(algorithm))?;
            (trace, Some(graph))
        }
    };

    info!(
        steps = trace.len(),
        snapshot_bytes = trace.estimated_size(),
        "recorded {}",
        trace.algorithm()
    );
    persist(&FileSink::new(&cli.global.log_dir), &trace);

    if cli.global.no_tui {
        print_trace(&trace)?;
        return Ok(());
    }

    let mut app = App::new(Replay::new(trace), graph, cli.global.play_interval());
    run_viewer(&mut app)
}
