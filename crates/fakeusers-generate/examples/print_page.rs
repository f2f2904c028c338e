use std::env;

use fakeusers_core::{DEFAULT_PAGE_SIZE, GenerationParams, Region};
use fakeusers_generate::GenerationEngine;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut region = Region::Usa;
    let mut error_rate = 0.0;
    let mut seed = "demo".to_string();
    let mut page = 0_u32;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--region" => region = args.next().ok_or("missing --region value")?.parse()?,
            "--errors" => error_rate = args.next().ok_or("missing --errors value")?.parse()?,
            "--seed" => seed = args.next().ok_or("missing --seed value")?,
            "--page" => page = args.next().ok_or("missing --page value")?.parse()?,
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let params = GenerationParams::new(region, error_rate, seed, DEFAULT_PAGE_SIZE)?;
    let engine = GenerationEngine::new(params)?;
    for record in engine.page(page)? {
        println!(
            "{:>4}  {}  {}  |  {}  |  {}",
            record.number, record.id, record.full_name, record.address, record.phone
        );
    }
    Ok(())
}
