use std::io::Write;

use sha2::{Digest, Sha256};

use fakeusers_core::{CSV_HEADER, Record};

/// CSV sink that counts and hashes every byte it forwards.
pub struct RecordCsvWriter<W: Write> {
    writer: csv::Writer<CountingWriter<W>>,
    rows: u64,
}

/// What a finished [`RecordCsvWriter`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSummary {
    pub rows: u64,
    pub bytes_written: u64,
    pub sha256: String,
}

impl<W: Write> RecordCsvWriter<W> {
    /// Wrap `inner` and write the header row.
    pub fn new(inner: W) -> Result<Self, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(CountingWriter::new(inner));
        writer.write_record(CSV_HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_records(&mut self, records: &[Record]) -> Result<(), csv::Error> {
        for record in records {
            self.writer.write_record(record.csv_row())?;
            self.rows += 1;
        }
        Ok(())
    }

    /// Flush and return the counts together with the wrapped writer.
    pub fn finish(self) -> Result<(CsvSummary, W), csv::Error> {
        let rows = self.rows;
        let counting = self.writer.into_inner().map_err(|err| err.into_error())?;
        let (inner, bytes_written, digest) = counting.into_parts();
        Ok((
            CsvSummary {
                rows,
                bytes_written,
                sha256: digest,
            },
            inner,
        ))
    }
}

/// Write `records` as a complete CSV document.
pub fn write_records_csv<W: Write>(inner: W, records: &[Record]) -> Result<CsvSummary, csv::Error> {
    let mut writer = RecordCsvWriter::new(inner)?;
    writer.write_records(records)?;
    let (summary, _) = writer.finish()?;
    Ok(summary)
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
    hasher: Sha256,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            bytes: 0,
            hasher: Sha256::new(),
        }
    }

    fn into_parts(self) -> (W, u64, String) {
        (self.inner, self.bytes, hex::encode(self.hasher.finalize()))
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.hasher.update(&buf[..size]);
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(number: u64, name: &str) -> Record {
        Record {
            number,
            id: format!("id-{number}"),
            full_name: name.to_string(),
            address: "1 Main St, Springfield, IL 62701".to_string(),
            phone: "+1 555-010-0199".to_string(),
        }
    }

    #[test]
    fn writes_header_and_quotes_commas() {
        let mut out = Vec::new();
        let summary =
            write_records_csv(&mut out, &[record(1, "Jane Doe"), record(2, "Doe, John")])
                .expect("write csv");
        let text = String::from_utf8(out).expect("utf8");
        let expected = "Number,Id,FullName,Address,Phone\n\
            1,id-1,Jane Doe,\"1 Main St, Springfield, IL 62701\",+1 555-010-0199\n\
            2,id-2,\"Doe, John\",\"1 Main St, Springfield, IL 62701\",+1 555-010-0199\n";
        assert_eq!(text, expected);
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.bytes_written, expected.len() as u64);
    }

    #[test]
    fn digest_covers_exact_bytes() {
        let mut out = Vec::new();
        let summary = write_records_csv(&mut out, &[record(1, "Anna Nowak")]).expect("write csv");
        let expected = hex::encode(Sha256::digest(&out));
        assert_eq!(summary.sha256, expected);
        assert_eq!(summary.sha256.len(), 64);
    }

    #[test]
    fn header_only_when_no_records() {
        let mut out = Vec::new();
        let summary = write_records_csv(&mut out, &[]).expect("write csv");
        assert_eq!(out, b"Number,Id,FullName,Address,Phone\n");
        assert_eq!(summary.rows, 0);
    }
}
