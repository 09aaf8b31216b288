use clap::{
    Parser,
    Subcommand,
};
use indicatif::{
    ProgressBar,
    ProgressStyle,
};
use log::info;
use mutscore::config::RunConfig;
use mutscore::data_sources::mutation_library::{
    MutationChunk,
    MutationLibrary,
};
use mutscore::errors::MutScoreError;
use mutscore::notation::mutation_notation::MutationParser;
use mutscore::protein::catalog::GeneCatalog;
use mutscore::scoring::batch::score_chunk;
use mutscore::scoring::position::analyze_position;
use mutscore::scoring::report::ResultWriter;
use mutscore::scoring::scorer::MockMutationScorer;
use serde::Serialize;
use std::path::{
    Path,
    PathBuf,
};
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about = "Mock substitution impact scoring", long_about = None)]
struct Cli {
    /// Gene catalog (JSON, or FASTA by extension). Defaults to the demo catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Optional path to a JSON configuration file
    #[arg(short, long, global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the genes in the catalog
    Genes,
    /// Score a single substitution
    Score {
        #[arg(short, long)]
        gene: String,
        /// Substitution such as A145V or 145V
        #[arg(short, long)]
        mutation: String,
        #[arg(long)]
        seed: Option<u64>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Score every entry of a JSON/NDJSON mutation library into a CSV report
    Batch {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        chunk_size: Option<usize>,
    },
}

#[derive(Serialize)]
struct ScoreOutput<'a> {
    gene: &'a str,
    result: &'a mutscore::models::MutationResult,
    context: &'a mutscore::scoring::position::PositionContext,
}

fn load_catalog(config: &RunConfig) -> Result<GeneCatalog, MutScoreError> {
    match &config.catalog {
        Some(path) => GeneCatalog::from_path(path),
        None => GeneCatalog::demo(),
    }
}

fn list_genes(catalog: &GeneCatalog) {
    for gene in catalog.genes.iter() {
        println!(
            "{:<8} {:>6} aa/nt  {:<22} {}",
            gene.id,
            gene.len(),
            gene.trait_focus,
            gene.name
        );
    }
}

fn score_one(
    catalog: &GeneCatalog,
    gene: &str,
    mutation: &str,
    seed: Option<u64>,
    as_json: bool,
) -> Result<(), MutScoreError> {
    let parser = MutationParser::new()?;
    let (record, request) = catalog.resolve(&parser, gene, mutation)?;
    let context = analyze_position(&record.sequence, request.position)?;
    let mut scorer = MockMutationScorer::from_seed_option(seed);
    let result = scorer.score_request(&record.sequence, &request)?;

    if as_json {
        let out = ScoreOutput {
            gene: &record.id,
            result: &result,
            context: &context,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{} {}", record.id, result.label());
    println!("  impact:     {}", result.impact());
    println!("  score:      {:.1}", result.score());
    println!("  confidence: {:.0}%", result.confidence() * 100.0);
    println!(
        "  region:     {} ({:.0}% along), window {}..: {}",
        context.region.as_str(),
        context.relative_position * 100.0,
        context.window_start,
        context.window
    );
    println!("  {}", result.explanation());
    for rec in result.recommendations() {
        println!("  - {}", rec);
    }
    Ok(())
}

fn main_loop(
    chunked_iterator: impl ExactSizeIterator<Item = MutationChunk>,
    catalog: &GeneCatalog,
    seed: Option<u64>,
    out_path: &Path,
) -> Result<(), MutScoreError> {
    let parser = MutationParser::new()?;
    let mut writer = ResultWriter::from_path(out_path)?;

    let tot_chunks = chunked_iterator.len();
    let pb = ProgressBar::new(tot_chunks as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} chunks {msg}",
    ) {
        pb.set_style(style);
    }

    let mut n_failed = 0;
    for (chunk_num, chunk) in chunked_iterator.enumerate() {
        log::debug!("Chunk {}/{}", chunk_num, tot_chunks);
        let out = score_chunk(&chunk, catalog, &parser, seed);
        n_failed += out.iter().filter(|x| !x.is_ok()).count();
        writer.write_chunk(&out)?;
        pb.inc(1);
    }
    pb.finish_with_message("done");

    let rows = writer.finish()?;
    info!("Wrote {} rows ({} failed) -> {:?}", rows, n_failed, out_path);
    Ok(())
}

fn main() -> std::result::Result<(), MutScoreError> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let file_config = RunConfig::load(cli.config_file.as_deref())?;

    match cli.command {
        Command::Genes => {
            let config = file_config.with_overrides(None, None, cli.catalog);
            list_genes(&load_catalog(&config)?);
        }
        Command::Score {
            gene,
            mutation,
            seed,
            json,
        } => {
            let config = file_config.with_overrides(seed, None, cli.catalog);
            let catalog = load_catalog(&config)?;
            score_one(&catalog, &gene, &mutation, config.seed, json)?;
        }
        Command::Batch {
            input,
            output,
            seed,
            chunk_size,
        } => {
            let config = file_config.with_overrides(seed, chunk_size, cli.catalog);
            let catalog = load_catalog(&config)?;

            let start = Instant::now();
            let library = MutationLibrary::from_path(&input)?;
            info!(
                "Loaded {} mutations from {:?} in {:?}",
                library.len(),
                input,
                start.elapsed()
            );

            main_loop(
                library.as_iterator(config.chunk_size),
                &catalog,
                config.seed,
                &output,
            )?;
            info!("Batch took {:?}", start.elapsed());
        }
    }
    Ok(())
}
