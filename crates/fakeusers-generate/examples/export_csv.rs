use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use fakeusers_core::{DEFAULT_PAGE_SIZE, GenerationParams, PageRange, Region};
use fakeusers_generate::GenerationEngine;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut region = Region::Poland;
    let mut error_rate = 1.0;
    let mut seed = "demo".to_string();
    let mut to_page = 4_u32;
    let mut out = PathBuf::from("fake_user_data.csv");

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--region" => region = args.next().ok_or("missing --region value")?.parse()?,
            "--errors" => error_rate = args.next().ok_or("missing --errors value")?.parse()?,
            "--seed" => seed = args.next().ok_or("missing --seed value")?,
            "--to-page" => to_page = args.next().ok_or("missing --to-page value")?.parse()?,
            "--out" => out = args.next().map(PathBuf::from).ok_or("missing --out value")?,
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let params = GenerationParams::new(region, error_rate, seed, DEFAULT_PAGE_SIZE)?;
    let engine = GenerationEngine::new(params)?;
    let writer = BufWriter::new(File::create(&out)?);
    let report = engine.export_csv(PageRange::new(0, to_page)?, writer)?;

    println!("out={} rows={} sha256={}", out.display(), report.rows, report.sha256);
    Ok(())
}
