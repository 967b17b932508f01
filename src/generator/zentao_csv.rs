use crate::generator::base::Generator;
use crate::generator::ColumnLayout;
use crate::labels::Locale;
use crate::transform::OutputRecord;
use anyhow::Result;
use std::io::Write;

/// Excel only detects UTF-8 in a CSV file when it starts with a BOM.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone)]
pub struct CsvGeneratorOptions {
    pub layout: ColumnLayout,
    pub locale: Locale,
}

impl Default for CsvGeneratorOptions {
    fn default() -> Self {
        CsvGeneratorOptions {
            layout: ColumnLayout::Template,
            locale: Locale::default(),
        }
    }
}

/// Writes records as a ZenTao CSV import file: BOM, header row, one row per case.
pub struct CsvGenerator {
    options: CsvGeneratorOptions,
}

impl CsvGenerator {
    pub fn new(options: CsvGeneratorOptions) -> Self {
        CsvGenerator { options }
    }
}

impl Generator for CsvGenerator {
    fn output(&self, records: &[OutputRecord], writer: &mut dyn Write) -> Result<()> {
        writer.write_all(UTF8_BOM)?;

        let mut csv_writer = ::csv::WriterBuilder::new()
            .terminator(::csv::Terminator::CRLF)
            .from_writer(&mut *writer);

        let layout = self.options.layout;
        csv_writer.write_record(layout.headers(self.options.locale.labels()))?;
        for record in records {
            csv_writer.write_record(layout.row(record))?;
        }
        csv_writer.flush()?;

        Ok(())
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}
