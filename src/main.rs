use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use modgrapher::export::{self, ExportFormat};
use modgrapher::input::InputSource;

#[derive(Parser)]
#[command(name = "modgrapher")]
#[command(version)]
#[command(about = "Build a dependency graph of Go modules", long_about = None)]
#[command(after_help = "Usage: go mod graph | modgrapher OR modgrapher [FILE]\n\n\
    [FILE] must contain the output of the 'go mod graph' command.")]
struct Cli {
    /// File with `go mod graph` output (reads stdin when omitted or `-`)
    file: Option<PathBuf>,

    /// Output format: text, json, or dot
    #[arg(short, long, default_value = "text")]
    format: ExportFormat,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        eprintln!();
        eprintln!("{}", Cli::command().render_usage());
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = InputSource::from_arg(cli.file.as_deref());
    let graph = source
        .read_graph()
        .context("failed to parse input")?;

    log::info!(
        "built graph with {} nodes and {} edges from {}",
        graph.node_count(),
        graph.edge_count(),
        source
    );

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            export::export(cli.format, &graph, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export::export(cli.format, &graph, &mut writer)?;
        }
    }

    Ok(())
}
