use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fakeusers_core::Region;

use crate::corruption::AppliedCorruption;

/// Corruption tallies for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageReport {
    pub page: u32,
    pub records: u64,
    pub page_seed: i32,
    /// Corruptions drawn, including those that turned out to be no-ops.
    pub corruptions_drawn: u64,
    /// Corruptions that visibly changed a field.
    pub corruptions_applied: u64,
    pub by_field: BTreeMap<String, u64>,
    pub by_kind: BTreeMap<String, u64>,
}

impl PageReport {
    pub fn new(page: u32, page_seed: i32) -> Self {
        Self {
            page,
            page_seed,
            ..Self::default()
        }
    }

    pub fn record_corruptions(&mut self, log: &[AppliedCorruption]) {
        self.records += 1;
        for entry in log {
            self.corruptions_drawn += 1;
            if entry.applied {
                self.corruptions_applied += 1;
            }
            *self
                .by_field
                .entry(entry.field.as_str().to_string())
                .or_insert(0) += 1;
            *self
                .by_kind
                .entry(entry.kind.as_str().to_string())
                .or_insert(0) += 1;
        }
    }
}

/// Summary of a CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportReport {
    pub region: Region,
    pub error_rate: f64,
    pub seed: String,
    pub page_size: u32,
    pub from_page: u32,
    pub to_page: u32,
    pub rows: u64,
    pub bytes_written: u64,
    /// Hex SHA-256 of the CSV bytes; equal digests mean identical exports.
    pub sha256: String,
    pub corruptions_drawn: u64,
    pub corruptions_applied: u64,
    pub by_field: BTreeMap<String, u64>,
    pub by_kind: BTreeMap<String, u64>,
}

impl ExportReport {
    pub fn absorb_page(&mut self, page: &PageReport) {
        self.rows += page.records;
        self.corruptions_drawn += page.corruptions_drawn;
        self.corruptions_applied += page.corruptions_applied;
        for (field, count) in &page.by_field {
            *self.by_field.entry(field.clone()).or_insert(0) += count;
        }
        for (kind, count) in &page.by_kind {
            *self.by_kind.entry(kind.clone()).or_insert(0) += count;
        }
    }
}

#[cfg(test)]
mod tests {
    use fakeusers_core::RecordField;

    use super::*;
    use crate::corruption::Corruption;

    #[test]
    fn page_report_counts_drawn_and_applied() {
        let mut report = PageReport::new(0, 1);
        report.record_corruptions(&[
            AppliedCorruption {
                field: RecordField::Phone,
                kind: Corruption::Swap,
                applied: true,
            },
            AppliedCorruption {
                field: RecordField::FullName,
                kind: Corruption::Delete,
                applied: false,
            },
        ]);
        report.record_corruptions(&[]);

        assert_eq!(report.records, 2);
        assert_eq!(report.corruptions_drawn, 2);
        assert_eq!(report.corruptions_applied, 1);
        assert_eq!(report.by_field.get("phone"), Some(&1));
        assert_eq!(report.by_kind.get("delete"), Some(&1));
    }
}
