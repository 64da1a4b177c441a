use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use pathoverb::collector::Collector;
use pathoverb::config::{find_config_file, load_config, CollectorConfig, ExtractorConfig};
use pathoverb::csvio;
use pathoverb::extractor::{self, MatchMode};
use pathoverb::graph::{graph_image_name, GraphError, VerbGraph};
use pathoverb::models::VerbCount;
use pathoverb::nlp::EnglishTagger;
use pathoverb::sources::SourceRegistry;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pathoverb - collect disease literature and extract the verbs that follow disease mentions
#[derive(Parser, Debug)]
#[command(name = "pathoverb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collect disease literature and extract the verbs that follow disease mentions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format for on-screen summaries
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory output files are written into
    #[arg(long, global = true, default_value = ".")]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Collect papers for a disease term into a CSV
    #[command(alias = "c")]
    Collect {
        /// Disease term to search for
        term: String,

        /// Source to collect from (pubmed, semantic, pubmed-web)
        #[arg(long, short)]
        source: Option<String>,

        /// Number of papers to collect
        #[arg(long, short)]
        target: Option<usize>,

        /// Extra words appended to the search query
        #[arg(long)]
        query_extra: Option<String>,

        /// Keep only papers whose abstract mentions the term
        #[arg(long)]
        require_term: bool,
    },

    /// Extract verbs that follow term mentions in a collected CSV
    #[command(alias = "x")]
    Extract {
        /// Disease term to look for
        term: String,

        /// Collected-papers CSV (defaults to the name derived from the term)
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Tokens scanned after each mention
        #[arg(long, short)]
        window: Option<usize>,

        /// Match mode: substring or whole-token
        #[arg(long)]
        match_mode: Option<MatchMode>,

        /// Number of rows shown in the on-screen summary
        #[arg(long)]
        top: Option<usize>,
    },

    /// Render the verb-frequency graph for an extraction run
    #[command(alias = "g")]
    Graph {
        /// Verb-frequency CSV produced by extract
        input: PathBuf,

        /// Label drawn in the hub (defaults to one derived from the file name)
        #[arg(long)]
        term: Option<String>,

        /// Number of most frequent verbs drawn
        #[arg(long)]
        top: Option<usize>,

        /// Also write a Graphviz DOT dump next to the image
        #[arg(long)]
        dot: bool,
    },

    /// Collect, extract and graph in one go
    #[command(alias = "r")]
    Run {
        /// Disease term
        term: String,

        /// Source to collect from (pubmed, semantic, pubmed-web)
        #[arg(long, short)]
        source: Option<String>,

        /// Number of papers to collect
        #[arg(long, short)]
        target: Option<usize>,

        /// Tokens scanned after each mention
        #[arg(long, short)]
        window: Option<usize>,

        /// Skip the graph image
        #[arg(long)]
        no_graph: bool,
    },

    /// List available sources
    Sources,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("pathoverb={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from the given path or the default locations
    let config = match &cli.config {
        Some(path) => load_config(Some(path))?,
        None => {
            if let Some(path) = find_config_file() {
                tracing::info!("Using config file: {}", path.display());
            }
            load_config(None)?
        }
    };

    match &cli.command {
        Commands::Collect {
            term,
            source,
            target,
            query_extra,
            require_term,
        } => {
            let mut collector_cfg = config.collector.clone();
            apply_collect_overrides(
                &mut collector_cfg,
                source.clone(),
                *target,
                query_extra.clone(),
                *require_term,
            );

            collect_command(&cli, &collector_cfg, term).await?;
        }

        Commands::Extract {
            term,
            input,
            window,
            match_mode,
            top,
        } => {
            let mut extractor_cfg = config.extractor.clone();
            if let Some(window) = window {
                extractor_cfg.window = *window;
            }
            if let Some(mode) = match_mode {
                extractor_cfg.match_mode = *mode;
            }
            let top = top.unwrap_or(config.graph.top);

            let (_, counts) = extract_command(&cli, &extractor_cfg, term, input.clone())?;
            output_frequencies(top_slice(&counts, top), cli.output);
        }

        Commands::Graph {
            input,
            term,
            top,
            dot,
        } => {
            let top = top.unwrap_or(config.graph.top);
            graph_command(&cli, input, term.clone(), top, *dot)?;
        }

        Commands::Run {
            term,
            source,
            target,
            window,
            no_graph,
        } => {
            let mut collector_cfg = config.collector.clone();
            apply_collect_overrides(&mut collector_cfg, source.clone(), *target, None, false);

            let mut extractor_cfg = config.extractor.clone();
            if let Some(window) = window {
                extractor_cfg.window = *window;
            }

            collect_command(&cli, &collector_cfg, term).await?;
            let (freq_path, counts) = extract_command(&cli, &extractor_cfg, term, None)?;
            output_frequencies(top_slice(&counts, config.graph.top), cli.output);

            if !no_graph {
                match VerbGraph::build(term, &counts, config.graph.top) {
                    Ok(graph) => {
                        let image_path = cli.out_dir.join(graph_image_name(&freq_path));
                        graph.render_svg(&image_path)?;
                        if !cli.quiet {
                            eprintln!("Wrote {}", image_path.display());
                        }
                    }
                    Err(GraphError::Empty) => {
                        if !cli.quiet {
                            eprintln!("No verbs found; skipping the graph image");
                        }
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        Commands::Sources => {
            let registry = SourceRegistry::new(
                config.collector.semantic_api_key.clone(),
                config.collector.item_delay(),
            )?;

            let mut ids: Vec<&str> = registry.ids().collect();
            ids.sort_unstable();
            for id in ids {
                if let Some(source) = registry.get(id) {
                    println!("{:<12} {}", id, source.name());
                }
            }
        }
    }

    Ok(())
}

fn apply_collect_overrides(
    cfg: &mut CollectorConfig,
    source: Option<String>,
    target: Option<usize>,
    query_extra: Option<String>,
    require_term: bool,
) {
    if let Some(source) = source {
        cfg.source = source;
    }
    if let Some(target) = target {
        cfg.target = target;
    }
    if let Some(extra) = query_extra {
        cfg.query_extra = extra;
    }
    if require_term {
        cfg.require_term_in_abstract = true;
    }
}

/// Collect papers and write the research-papers CSV
async fn collect_command(cli: &Cli, cfg: &CollectorConfig, term: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(&cli.out_dir)?;

    let registry = SourceRegistry::new(cfg.semantic_api_key.clone(), cfg.item_delay())?;
    let source = registry.get_required(&cfg.source)?;

    if !cli.quiet {
        eprintln!(
            "Collecting up to {} papers for '{}' from {}",
            cfg.target,
            term,
            source.name()
        );
    }

    let collector = Collector::new(Arc::clone(source), cfg.collect_options());
    let outcome = collector.run(term).await?;

    let path = cli.out_dir.join(csvio::papers_csv_name(term));
    csvio::write_papers(&path, &outcome.records)?;

    if !cli.quiet {
        eprintln!(
            "Collected {} papers ({} seen, {} pages, {} failed pages)",
            outcome.stats.records_kept,
            outcome.stats.records_seen,
            outcome.stats.pages_fetched,
            outcome.stats.pages_failed
        );
        eprintln!("Wrote {}", path.display());
    }

    Ok(path)
}

/// Extract verbs from a collected CSV and write both extraction CSVs
fn extract_command(
    cli: &Cli,
    cfg: &ExtractorConfig,
    term: &str,
    input: Option<PathBuf>,
) -> Result<(PathBuf, Vec<VerbCount>)> {
    std::fs::create_dir_all(&cli.out_dir)?;

    let input = input.unwrap_or_else(|| cli.out_dir.join(csvio::papers_csv_name(term)));
    let records = csvio::read_papers(&input)?;

    if !cli.quiet {
        eprintln!("Scanning {} papers from {}", records.len(), input.display());
    }

    let tagger = EnglishTagger::new();
    let occurrences =
        extractor::extract_from_papers(&records, term, &tagger, &cfg.extract_options())?;
    let counts = extractor::frequency_table(&occurrences);

    let verbs_path = cli.out_dir.join(csvio::verbs_csv_name(term));
    csvio::write_occurrences(&verbs_path, &occurrences)?;

    let freq_path = cli.out_dir.join(csvio::frequency_csv_name(term));
    csvio::write_frequencies(&freq_path, &counts)?;

    if !cli.quiet {
        eprintln!(
            "Found {} verb occurrences ({} distinct verbs)",
            occurrences.len(),
            counts.len()
        );
        eprintln!("Wrote {}", verbs_path.display());
        eprintln!("Wrote {}", freq_path.display());
    }

    Ok((freq_path, counts))
}

/// Render the graph image for an existing frequency CSV
fn graph_command(
    cli: &Cli,
    input: &Path,
    term: Option<String>,
    top: usize,
    dot: bool,
) -> Result<PathBuf> {
    std::fs::create_dir_all(&cli.out_dir)?;

    let counts = csvio::read_frequencies(input)?;
    let hub = term.unwrap_or_else(|| hub_label_from(input));

    let graph = VerbGraph::build(&hub, &counts, top)?;
    let path = cli.out_dir.join(graph_image_name(input));
    graph.render_svg(&path)?;

    if !cli.quiet {
        eprintln!("Wrote {}", path.display());
    }

    if dot {
        let dot_path = path.with_extension("dot");
        graph.render_dot(&dot_path)?;
        if !cli.quiet {
            eprintln!("Wrote {}", dot_path.display());
        }
    }

    Ok(path)
}

/// At most the first `top` rows of the frequency table
fn top_slice(counts: &[VerbCount], top: usize) -> &[VerbCount] {
    &counts[..counts.len().min(top)]
}

/// Turn a frequency CSV name back into a readable hub label
fn hub_label_from(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    stem.strip_suffix("_verb_frequency")
        .unwrap_or(&stem)
        .replace('_', " ")
}

fn output_frequencies(counts: &[VerbCount], format: OutputFormat) {
    let actual_format = if format == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        format
    };

    match actual_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(counts).unwrap());
        }
        OutputFormat::Plain => {
            for count in counts {
                println!("{}\t{}", count.verb, count.count);
            }
        }
        OutputFormat::Table => {
            use comfy_table::{Attribute, Cell, Table};
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["Verb", "Count"]);

            for count in counts {
                table.add_row(vec![
                    Cell::new(&count.verb).add_attribute(Attribute::Bold),
                    Cell::new(count.count),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Auto => unreachable!(),
    }
}
