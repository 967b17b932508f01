use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::generator::{ColumnLayout, GeneratorOptions, OutputType};
use crate::labels::Locale;
use crate::parser::TestLinkParser;
use crate::suite::{FlattenOptions, ModuleStyle, TreeFlattener};
use crate::transform::RecordTransformer;

/// Settings shared by single-document and batch conversions.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub output_type: OutputType,
    pub layout: ColumnLayout,
    pub module_style: ModuleStyle,
    pub locale: Locale,
}

impl ConversionOptions {
    /// Options for `output_type` using the layout and module style ZenTao expects for it.
    pub fn new(output_type: OutputType, locale: Locale) -> Self {
        ConversionOptions {
            output_type,
            layout: output_type.default_layout(),
            module_style: output_type.default_module_style(),
            locale,
        }
    }
}

/// Converts one TestLink document and writes the import file to `output_writer`.
///
/// Returns the number of test cases written.
pub fn run_conversion(
    input_content: &str,
    output_writer: &mut dyn Write,
    options: &ConversionOptions,
) -> Result<usize> {
    let suite = TestLinkParser::new().parse(input_content)?;

    let flattener = TreeFlattener::new(FlattenOptions {
        module_style: options.module_style,
        unnamed_module: options.locale.labels().unnamed_module.to_string(),
    });
    let cases = flattener.flatten(&suite);

    let records = RecordTransformer::new(options.locale).transform_all(&cases);

    let generator =
        GeneratorOptions::for_type(options.output_type, Some(options.layout), options.locale)
            .into_generator();
    generator.output(&records, output_writer)?;

    Ok(records.len())
}

/// Outcome of a batch conversion.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// `(input, output)` pairs that were converted.
    pub converted: Vec<(PathBuf, PathBuf)>,
    /// Inputs that failed, with the error message.
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Lists the `.xml` files directly inside `dir`, sorted by path.
///
/// The extension is matched case-insensitively.
pub fn find_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir_str = dir
        .to_str()
        .with_context(|| format!("Directory path contains non-UTF-8 characters: {:?}", dir))?;
    let pattern = Path::new(&glob::Pattern::escape(dir_str)).join("*.xml");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Glob pattern contains non-UTF-8 characters: {:?}", pattern))?;
    let match_options = glob::MatchOptions {
        case_sensitive: false,
        ..Default::default()
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(pattern, match_options)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Converts every `.xml` file in `dir` to a sibling import file.
///
/// A failing document is logged and recorded in the report; it does not stop the
/// remaining documents and leaves no output file behind.
pub fn run_batch(dir: &Path, options: &ConversionOptions) -> Result<BatchReport> {
    let files = find_xml_files(dir)?;
    let mut report = BatchReport::default();

    if files.is_empty() {
        log::warn!("No .xml files found in {}", dir.display());
        return Ok(report);
    }

    let extension =
        GeneratorOptions::for_type(options.output_type, Some(options.layout), options.locale)
            .into_generator()
            .extension();

    for input_path in files {
        log::info!("Converting {}", input_path.display());
        let output_path = input_path.with_extension(extension);

        match convert_file(&input_path, &output_path, options) {
            Ok(count) => {
                log::info!(
                    "Wrote {} test cases to {}",
                    count,
                    output_path.display()
                );
                report.converted.push((input_path, output_path));
            }
            Err(e) => {
                log::error!("Failed to convert {}: {:#}", input_path.display(), e);
                report.failed.push((input_path, format!("{:#}", e)));
            }
        }
    }

    Ok(report)
}

// The import file is built in memory so a failed document never leaves a partial file.
fn convert_file(
    input_path: &Path,
    output_path: &Path,
    options: &ConversionOptions,
) -> Result<usize> {
    let input_content = fs::read_to_string(input_path).map_err(|source| ConvertError::Io {
        path: input_path.to_path_buf(),
        source,
    })?;

    let mut buffer = Vec::new();
    let count = run_conversion(&input_content, &mut buffer, options)?;

    fs::write(output_path, &buffer).map_err(|source| ConvertError::Io {
        path: output_path.to_path_buf(),
        source,
    })?;
    Ok(count)
}
