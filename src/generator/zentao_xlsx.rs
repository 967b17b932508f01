use crate::generator::base::Generator;
use crate::generator::ColumnLayout;
use crate::labels::Locale;
use crate::transform::OutputRecord;
use anyhow::Result;
use rust_xlsxwriter::{ColNum, Format, FormatAlign, RowNum, Workbook, Worksheet};
use std::io::Write;

/// Excel rejects column widths above 255 characters.
const MAX_COLUMN_WIDTH: f64 = 255.0;

#[derive(Debug, Clone)]
pub struct XlsxGeneratorOptions {
    pub layout: ColumnLayout,
    pub locale: Locale,
}

impl Default for XlsxGeneratorOptions {
    fn default() -> Self {
        XlsxGeneratorOptions {
            layout: ColumnLayout::Import,
            locale: Locale::default(),
        }
    }
}

/// Writes records as a single-sheet ZenTao XLSX import file.
pub struct XlsxGenerator {
    options: XlsxGeneratorOptions,
}

impl XlsxGenerator {
    pub fn new(options: XlsxGeneratorOptions) -> Self {
        XlsxGenerator { options }
    }

    pub fn output_to_worksheet(
        &self,
        worksheet: &mut Worksheet,
        records: &[OutputRecord],
    ) -> Result<()> {
        let labels = self.options.locale.labels();
        let layout = self.options.layout;
        worksheet.set_name(labels.sheet_name)?;

        let header_format = Format::new().set_bold();
        let item_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);

        let headers = layout.headers(labels);
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

        for (col_index, header_text) in headers.iter().enumerate() {
            worksheet.write_string_with_format(
                0,
                col_index as ColNum,
                *header_text,
                &header_format,
            )?;
        }

        for (row_offset, record) in records.iter().enumerate() {
            let row_index = (row_offset + 1) as RowNum;
            for (col_index, cell_text) in layout.row(record).into_iter().enumerate() {
                worksheet.write_string_with_format(
                    row_index,
                    col_index as ColNum,
                    cell_text,
                    &item_format,
                )?;
                widths[col_index] = widths[col_index].max(cell_text.chars().count());
            }
        }

        for (col_index, width) in widths.into_iter().enumerate() {
            worksheet.set_column_width(col_index as ColNum, Self::column_width(width))?;
        }

        Ok(())
    }

    fn column_width(max_chars: usize) -> f64 {
        ((max_chars + 2) as f64 * 1.2).min(MAX_COLUMN_WIDTH)
    }
}

impl Generator for XlsxGenerator {
    fn output(&self, records: &[OutputRecord], writer: &mut dyn Write) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        self.output_to_worksheet(worksheet, records)?;

        let buffer = workbook.save_to_buffer()?;
        writer.write_all(&buffer)?;
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }
}
