use std::io::Write;

use tracing::{debug, info};

use fakeusers_core::{GenerationParams, PageRange, Record, Region};

use crate::corruption::ErrorInjector;
use crate::errors::GenerationError;
use crate::model::{ExportReport, PageReport};
use crate::output::csv::RecordCsvWriter;
use crate::seed::{page_seed, record_seed};
use crate::synthesizer::RecordSynthesizer;

/// Entry point for generating pages of one (region, error rate, seed, page
/// size) stream.
///
/// The engine holds only immutable configuration; every call builds its own
/// RNG streams, so one engine can serve many threads.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    params: GenerationParams,
    synthesizer: RecordSynthesizer,
    injector: ErrorInjector,
}

impl GenerationEngine {
    pub fn new(params: GenerationParams) -> Result<Self, GenerationError> {
        params.validate()?;
        let profile = params.region.profile();
        let synthesizer = RecordSynthesizer::new(profile)?;
        let injector = ErrorInjector::new(profile, params.error_rate);
        Ok(Self {
            params,
            synthesizer,
            injector,
        })
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn page(&self, page: u32) -> Result<Vec<Record>, GenerationError> {
        self.page_with_report(page).map(|(records, _)| records)
    }

    /// Generate one page and tally the corruptions applied to it.
    pub fn page_with_report(&self, page: u32) -> Result<(Vec<Record>, PageReport), GenerationError> {
        let page_size = self.params.page_size;
        let seed = page_seed(&self.params.seed, page, page_size);
        let mut records = self.synthesizer.synthesize_page(page, page_size, seed)?;

        let mut report = PageReport::new(page, seed);
        for (index, record) in (0_u32..).zip(records.iter_mut()) {
            let log = self.injector.inject(record, record_seed(seed, index));
            report.record_corruptions(&log);
        }

        debug!(
            region = %self.params.region,
            page,
            page_seed = seed,
            records = report.records,
            corruptions = report.corruptions_drawn,
            "page generated"
        );
        Ok((records, report))
    }

    /// Concatenate every page in `range`, in order.
    pub fn pages(&self, range: PageRange) -> Result<Vec<Record>, GenerationError> {
        let mut records = Vec::with_capacity(initial_capacity(self.params.page_size));
        for page in range.pages() {
            records.extend(self.page(page)?);
        }
        Ok(records)
    }

    /// Stream the pages in `range` to `writer` as CSV.
    pub fn export_csv<W: Write>(
        &self,
        range: PageRange,
        writer: W,
    ) -> Result<ExportReport, GenerationError> {
        info!(
            region = %self.params.region,
            error_rate = self.params.error_rate,
            from_page = range.from(),
            to_page = range.to(),
            page_size = self.params.page_size,
            "export started"
        );

        let mut report = ExportReport {
            region: self.params.region,
            error_rate: self.params.error_rate,
            seed: self.params.seed.clone(),
            page_size: self.params.page_size,
            from_page: range.from(),
            to_page: range.to(),
            rows: 0,
            bytes_written: 0,
            sha256: String::new(),
            corruptions_drawn: 0,
            corruptions_applied: 0,
            by_field: Default::default(),
            by_kind: Default::default(),
        };

        let mut csv = RecordCsvWriter::new(writer)?;
        for page in range.pages() {
            let (records, page_report) = self.page_with_report(page)?;
            csv.write_records(&records)?;
            report.absorb_page(&page_report);
        }
        let (summary, _) = csv.finish()?;
        report.bytes_written = summary.bytes_written;
        report.sha256 = summary.sha256;

        info!(
            rows = report.rows,
            bytes_written = report.bytes_written,
            corruptions = report.corruptions_drawn,
            sha256 = %report.sha256,
            "export finished"
        );
        Ok(report)
    }
}

/// Room for the first page only; later pages grow the vector as they are
/// generated, so a huge range never reserves its full size up front.
fn initial_capacity(page_size: u32) -> usize {
    usize::try_from(page_size).unwrap_or(0)
}

/// Generate one page without keeping an engine around.
pub fn generate_page(
    region: Region,
    error_rate: f64,
    seed: &str,
    page: u32,
    page_size: u32,
) -> Result<Vec<Record>, GenerationError> {
    let params = GenerationParams::new(region, error_rate, seed, page_size)?;
    GenerationEngine::new(params)?.page(page)
}
