mod registry;
mod workspace;

use std::fs::{File, create_dir_all};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fakeusers_core::{Error as CoreError, PageRange, Region};
use fakeusers_generate::output::csv::write_records_csv;
use fakeusers_generate::{GenerationEngine, GenerationError};
use rand::Rng;
use registry::{RunContext, init_logging, start_run, write_export_report};
use thiserror::Error;
use uuid::Uuid;
use workspace::{DEFAULT_SETTINGS_FILE, Settings, load_settings, save_settings};

const SEED_LEN: usize = 13;
const SEED_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("settings error: {0}")]
    Workspace(#[from] workspace::WorkspaceError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "fakeusers", version, about = "Deterministic fake user records with seeded typos")]
struct Cli {
    /// Settings file (defaults to ./fakeusers.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of records.
    Page(PageArgs),
    /// Write a range of pages to CSV inside a run directory.
    Export(ExportArgs),
    /// Print a fresh random seed.
    Seed,
    /// Write a settings file with default values.
    InitConfig(InitConfigArgs),
}

/// Generation parameters; unset flags fall back to the settings file.
#[derive(Args, Debug)]
struct GenerationArgs {
    /// USA, Poland or Ukraine (ISO codes us/pl/ua also accepted).
    #[arg(long)]
    region: Option<Region>,
    /// Expected corruptions per record, 0 to 1000.
    #[arg(long)]
    error_rate: Option<f64>,
    #[arg(long)]
    seed: Option<String>,
    #[arg(long)]
    page_size: Option<u32>,
}

impl GenerationArgs {
    fn apply(self, settings: &mut Settings) {
        if let Some(region) = self.region {
            settings.region = region;
        }
        if let Some(error_rate) = self.error_rate {
            settings.error_rate = error_rate;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(page_size) = self.page_size {
            settings.page_size = page_size;
        }
    }
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Args, Debug)]
struct PageArgs {
    #[command(flatten)]
    generation: GenerationArgs,
    /// Zero-based page index.
    #[arg(long)]
    page: u32,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    generation: GenerationArgs,
    /// First page to export (inclusive).
    #[arg(long, default_value_t = 0)]
    from_page: u32,
    /// Last page to export (inclusive).
    #[arg(long)]
    to_page: u32,
    /// CSV destination; defaults to the run directory.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Parent directory for run artifacts.
    #[arg(long)]
    run_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InitConfigArgs {
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    path: PathBuf,
    /// Overwrite an existing file.
    #[arg(long, default_value_t = false)]
    force: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Page(args) => run_page(cli.config, args),
        Command::Export(args) => run_export(cli.config, args),
        Command::Seed => {
            println!("{}", random_seed(&mut rand::rng()));
            Ok(())
        }
        Command::InitConfig(args) => run_init_config(args),
    }
}

fn run_page(config: Option<PathBuf>, args: PageArgs) -> Result<(), CliError> {
    init_logging(None)?;

    let mut settings = load_settings(config.as_deref())?;
    args.generation.apply(&mut settings);
    let engine = GenerationEngine::new(settings.params()?)?;
    let records = engine.page(args.page)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &records)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            write_records_csv(&mut out, &records).map_err(GenerationError::from)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_export(config: Option<PathBuf>, args: ExportArgs) -> Result<(), CliError> {
    let ExportArgs {
        generation,
        from_page,
        to_page,
        out,
        run_dir,
    } = args;

    let mut settings = load_settings(config.as_deref())?;
    generation.apply(&mut settings);
    if let Some(run_dir) = run_dir {
        settings.run_dir = run_dir;
    }
    let params = settings.params()?;
    let range = PageRange::new(from_page, to_page)?;

    let run_id = Uuid::new_v4().to_string();
    let run_ctx = RunContext {
        run_id: run_id.clone(),
        started_at: chrono::Utc::now(),
        run_dir: settings.run_dir.clone(),
        region: params.region,
        error_rate: params.error_rate,
        seed: params.seed.clone(),
        page_size: params.page_size,
        range,
        out,
    };

    let run_paths = start_run(&run_ctx)?;
    init_logging(Some(&run_paths.logs_path))?;
    tracing::info!(event = "run_started", run_id = %run_id, region = %params.region);

    let timer = Instant::now();
    let engine = GenerationEngine::new(params)?;

    if let Some(parent) = run_paths.csv_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(&run_paths.csv_path)?);
    let report = engine.export_csv(range, &mut writer)?;
    writer.flush()?;
    tracing::info!(event = "csv_written", path = %run_paths.csv_path.display(), rows = report.rows);

    write_export_report(&run_paths, &report)?;
    tracing::info!(event = "report_written", path = %run_paths.report_path.display());

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(event = "run_finished", status = "success", duration_ms = duration_ms);

    println!("run_dir={}", run_paths.root.display());
    println!("csv={}", run_paths.csv_path.display());
    println!("sha256={}", report.sha256);
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<(), CliError> {
    if args.path.exists() && !args.force {
        return Err(CliError::InvalidConfig(format!(
            "'{}' already exists (use --force to overwrite)",
            args.path.display()
        )));
    }
    save_settings(&args.path, &Settings::default())?;
    println!("wrote {}", args.path.display());
    Ok(())
}

/// Thirteen lowercase base-36 characters.
fn random_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SEED_LEN)
        .map(|_| char::from(SEED_ALPHABET[rng.random_range(0..SEED_ALPHABET.len())]))
        .collect()
}
