#![forbid(unsafe_code)]

use std::{path::PathBuf, str::FromStr};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use mtxgraph::{
    algo::Extraction,
    io::{FileFormat, GraphReader, MatrixMarketReader, MetisReader},
    node::label_of,
    pipeline::{Pipeline, RunSummary},
    prelude::*,
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "mtxgraph: convert MatrixMarket graphs to METIS and extract bounded subgraphs",
    long_about = None
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Format of the log lines written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Convert a whole MatrixMarket graph",
        after_help = "EXAMPLES:\n    # MatrixMarket to METIS\n    mtxgraph convert graph.mtx graph.metis\n\n    # MatrixMarket to CSR arrays\n    mtxgraph convert graph.mtx graph.csr --format csr"
    )]
    Convert(ConvertArgs),

    #[command(
        about = "Extract a bounded breadth-first ball around a source vertex",
        after_help = "EXAMPLES:\n    # 1000 vertices around vertex 1\n    mtxgraph bfs graph.mtx ball.mtx 1000\n\n    # 1000 vertices around vertex 42 as METIS\n    mtxgraph bfs graph.mtx ball.metis 1000 42 --format metis"
    )]
    Bfs(BfsArgs),

    #[command(
        about = "Extract the vertices offset..offset+num_nodes",
        after_help = "EXAMPLES:\n    # The first 1000 vertices\n    mtxgraph window graph.mtx first.mtx 1000\n\n    # Vertices 5001..=6000\n    mtxgraph window graph.mtx window.mtx 1000 5001"
    )]
    Window(WindowArgs),

    #[command(about = "Report the vertex of maximum degree of a METIS graph")]
    BestSource(BestSourceArgs),

    #[command(about = "Print vertex, edge and degree statistics without writing a graph")]
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
struct IoArgs {
    /// MatrixMarket input file
    input: PathBuf,

    /// Output file, created only if the input could be processed
    output: PathBuf,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Output format (metis, mtx, csr)
    #[arg(long, value_parser = FileFormat::from_str, default_value = "metis")]
    format: FileFormat,
}

#[derive(Args, Debug)]
struct BfsArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Number of vertices after which the traversal stops
    num_nodes: NumNodes,

    /// 1-based id of the seed vertex
    #[arg(default_value_t = 1, allow_negative_numbers = true)]
    source_node: i64,

    /// Output format (metis, mtx, csr)
    #[arg(long, value_parser = FileFormat::from_str, default_value = "mtx")]
    format: FileFormat,
}

#[derive(Args, Debug)]
struct WindowArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Number of vertices in the window
    num_nodes: NumNodes,

    /// Label of the first vertex in the window
    #[arg(default_value_t = 1)]
    offset: u64,

    /// Output format (metis, mtx, csr)
    #[arg(long, value_parser = FileFormat::from_str, default_value = "mtx")]
    format: FileFormat,
}

#[derive(Args, Debug)]
struct BestSourceArgs {
    /// METIS input file
    metis_file: PathBuf,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// MatrixMarket input file
    input: PathBuf,
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::new(if cli.quiet {
        "error"
    } else if cli.verbose {
        "mtxgraph=debug,info"
    } else {
        "mtxgraph=info,warn"
    });

    let registry = tracing_subscriber::registry().with(filter);

    match cli.log_format {
        LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_ansi(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Compact => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run_pipeline(pipeline: Pipeline, io: &IoArgs) -> anyhow::Result<()> {
    debug!(?io, format = %pipeline.format(), "starting run");

    let summary = pipeline.run_files(&io.input, &io.output).with_context(|| {
        format!(
            "failed to convert {} into {}",
            io.input.display(),
            io.output.display()
        )
    })?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    let report = &summary.report;
    println!(
        "Read {} vertices and {} edges ({} accepted, {} duplicates, {} self-loops, {} out of range, {} malformed); wrote {} vertices and {} edges",
        summary.input_nodes,
        summary.input_edges,
        report.accepted,
        report.duplicates,
        report.self_loops,
        report.out_of_range,
        report.malformed,
        summary.output_nodes,
        summary.output_edges,
    );
}

fn best_source(args: &BestSourceArgs) -> anyhow::Result<()> {
    let parsed = MetisReader::new()
        .try_read_graph_file(&args.metis_file)
        .with_context(|| format!("failed to read {}", args.metis_file.display()))?;

    let Some((u, degree)) = parsed.graph.max_degree_vertex() else {
        bail!("{} contains no vertices", args.metis_file.display());
    };

    info!(vertices = parsed.graph.number_of_nodes(), "searched all vertices");
    println!(
        "Best source candidate: Vertex {} (Degree: {degree})",
        label_of(u)
    );
    Ok(())
}

fn stats(args: &StatsArgs) -> anyhow::Result<()> {
    let parsed = MatrixMarketReader::new()
        .try_read_graph_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let graph = &parsed.graph;
    let n = graph.number_of_nodes();
    let m = graph.number_of_edges();
    let isolated = n as usize - graph.vertices_with_neighbors().count();

    println!("vertices:        {n}");
    println!("edges:           {m} (declared entries: {})", parsed.declared_edges);
    println!("isolated:        {isolated}");
    if let Some((u, degree)) = graph.max_degree_vertex() {
        println!("max degree:      {degree} (vertex {})", label_of(u));
        println!("average degree:  {:.3}", graph.degree_sum() as f64 / n as f64);
    }
    println!("skipped lines:   {}", parsed.report.skipped());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    match &cli.command {
        Commands::Convert(args) => run_pipeline(Pipeline::new(args.format), &args.io),
        Commands::Bfs(args) => {
            let extraction = Extraction::bfs(args.source_node, args.num_nodes);
            run_pipeline(Pipeline::new(args.format).extraction(extraction), &args.io)
        }
        Commands::Window(args) => {
            let extraction = Extraction::window(args.offset, args.num_nodes);
            run_pipeline(Pipeline::new(args.format).extraction(extraction), &args.io)
        }
        Commands::BestSource(args) => best_source(args),
        Commands::Stats(args) => stats(args),
    }
}
