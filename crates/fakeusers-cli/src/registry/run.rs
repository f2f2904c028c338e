use std::fs::{OpenOptions, create_dir_all};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use fakeusers_core::{PageRange, Region};
use fakeusers_generate::ExportReport;

use super::{RegistryError, RegistryResult};

/// Metadata captured when an export starts.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub run_dir: PathBuf,
    pub region: Region,
    pub error_rate: f64,
    pub seed: String,
    pub page_size: u32,
    pub range: PageRange,
    pub out: Option<PathBuf>,
}

/// JSON config written to each run directory.
#[derive(Debug, Serialize)]
struct RunConfig<'a> {
    run_id: &'a str,
    started_at: String,
    cli_version: &'static str,
    region: Region,
    error_rate: f64,
    seed: &'a str,
    page_size: u32,
    from_page: u32,
    to_page: u32,
    out: &'a Path,
}

/// Paths for run artifacts.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub root: PathBuf,
    pub logs_path: PathBuf,
    pub report_path: PathBuf,
    pub csv_path: PathBuf,
}

/// Create `<run_dir>/<timestamp>__run_<id>/` with `config.json` and an empty
/// `logs.ndjson`.
pub fn start_run(ctx: &RunContext) -> RegistryResult<RunPaths> {
    let timestamp = ctx.started_at.format("%Y-%m-%dT%H-%M-%SZ").to_string();
    let root = ctx.run_dir.join(format!("{timestamp}__run_{}", ctx.run_id));
    create_dir_all(&root)?;

    let csv_path = match &ctx.out {
        Some(out) => out.clone(),
        None => root.join("fake_user_data.csv"),
    };
    let paths = RunPaths {
        logs_path: root.join("logs.ndjson"),
        report_path: root.join("export_report.json"),
        csv_path,
        root,
    };

    let config = RunConfig {
        run_id: &ctx.run_id,
        started_at: ctx.started_at.to_rfc3339(),
        cli_version: env!("CARGO_PKG_VERSION"),
        region: ctx.region,
        error_rate: ctx.error_rate,
        seed: &ctx.seed,
        page_size: ctx.page_size,
        from_page: ctx.range.from(),
        to_page: ctx.range.to(),
        out: &paths.csv_path,
    };
    write_json(&paths.root.join("config.json"), &config)?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.logs_path)?;

    Ok(paths)
}

pub fn write_export_report(paths: &RunPaths, report: &ExportReport) -> RegistryResult<()> {
    write_json(&paths.report_path, report)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> RegistryResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    serde_json::to_writer_pretty(file, value).map_err(RegistryError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(run_dir: PathBuf, out: Option<PathBuf>) -> RunContext {
        RunContext {
            run_id: "test-run".to_string(),
            started_at: Utc::now(),
            run_dir,
            region: Region::Poland,
            error_rate: 1.5,
            seed: "abc".to_string(),
            page_size: 20,
            range: PageRange::new(0, 2).expect("range"),
            out,
        }
    }

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("fakeusers_runs_{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn start_run_writes_config_and_log_file() {
        let paths = start_run(&context(temp_dir(), None)).expect("start run");
        let name = paths.root.file_name().expect("name").to_string_lossy().to_string();
        assert!(name.ends_with("__run_test-run"), "{name}");
        assert!(paths.logs_path.exists());
        assert_eq!(paths.csv_path, paths.root.join("fake_user_data.csv"));

        let config: serde_json::Value = serde_json::from_slice(
            &std::fs::read(paths.root.join("config.json")).expect("read config"),
        )
        .expect("parse config");
        assert_eq!(config["region"], "Poland");
        assert_eq!(config["from_page"], 0);
        assert_eq!(config["to_page"], 2);
    }

    #[test]
    fn explicit_out_path_is_kept() {
        let out = temp_dir().join("custom.csv");
        let paths = start_run(&context(temp_dir(), Some(out.clone()))).expect("start run");
        assert_eq!(paths.csv_path, out);
    }
}
