//! Output generators for ZenTao import files.
//!
//! Both generators write the same `OutputRecord`s; they differ in file format
//! and in the default column layout expected by the ZenTao importer.

pub mod base;
pub mod zentao_csv;
pub mod zentao_xlsx;

use clap::ValueEnum;

use crate::labels::{Labels, Locale};
use crate::suite::ModuleStyle;
use crate::transform::OutputRecord;
use base::Generator;

/// A single column of the import file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Module,
    Title,
    Preconditions,
    Steps,
    Expected,
    Keywords,
    Priority,
    CaseType,
    Phase,
    TypeOptions,
    PhaseOptions,
}

impl Column {
    pub fn header(self, labels: &Labels) -> &'static str {
        match self {
            Column::Module => labels.header_module,
            Column::Title => labels.header_title,
            Column::Preconditions => labels.header_preconditions,
            Column::Steps => labels.header_steps,
            Column::Expected => labels.header_expected,
            Column::Keywords => labels.header_keywords,
            Column::Priority => labels.header_priority,
            Column::CaseType => labels.header_case_type,
            Column::Phase => labels.header_phase,
            Column::TypeOptions => labels.header_type_options,
            Column::PhaseOptions => labels.header_phase_options,
        }
    }

    pub fn value(self, record: &OutputRecord) -> &str {
        match self {
            Column::Module => &record.module,
            Column::Title => &record.title,
            Column::Preconditions => &record.preconditions,
            Column::Steps => &record.steps_text,
            Column::Expected => &record.expected_text,
            Column::Keywords => &record.keywords,
            Column::Priority => &record.priority,
            Column::CaseType => &record.case_type,
            Column::Phase => &record.phase,
            Column::TypeOptions => &record.type_option_list,
            Column::PhaseOptions => &record.phase_option_list,
        }
    }
}

/// The set and order of columns written to the import file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColumnLayout {
    /// ZenTao import template, with the option-list columns.
    Template,
    /// Plain case import, without option lists and with keywords last.
    Import,
}

const TEMPLATE_COLUMNS: [Column; 11] = [
    Column::Module,
    Column::Title,
    Column::Preconditions,
    Column::Steps,
    Column::Expected,
    Column::Keywords,
    Column::Priority,
    Column::CaseType,
    Column::Phase,
    Column::TypeOptions,
    Column::PhaseOptions,
];

const IMPORT_COLUMNS: [Column; 9] = [
    Column::Module,
    Column::Title,
    Column::Preconditions,
    Column::Steps,
    Column::Expected,
    Column::Priority,
    Column::CaseType,
    Column::Phase,
    Column::Keywords,
];

impl ColumnLayout {
    pub fn columns(self) -> &'static [Column] {
        match self {
            ColumnLayout::Template => &TEMPLATE_COLUMNS,
            ColumnLayout::Import => &IMPORT_COLUMNS,
        }
    }

    pub fn headers(self, labels: &Labels) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.header(labels)).collect()
    }

    pub fn row(self, record: &OutputRecord) -> Vec<&str> {
        self.columns().iter().map(|c| c.value(record)).collect()
    }
}

/// Supported output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputType {
    Csv,
    Xlsx,
}

impl OutputType {
    /// The column layout ZenTao expects for this format unless overridden.
    pub fn default_layout(self) -> ColumnLayout {
        match self {
            OutputType::Csv => ColumnLayout::Template,
            OutputType::Xlsx => ColumnLayout::Import,
        }
    }

    /// The module path style ZenTao expects for this format unless overridden.
    pub fn default_module_style(self) -> ModuleStyle {
        match self {
            OutputType::Csv => ModuleStyle::Wrapped,
            OutputType::Xlsx => ModuleStyle::Plain,
        }
    }
}

#[derive(Debug, Clone)]
pub enum GeneratorOptions {
    Csv(zentao_csv::CsvGeneratorOptions),
    Xlsx(zentao_xlsx::XlsxGeneratorOptions),
}

impl GeneratorOptions {
    /// Options for `output_type` with its default layout.
    pub fn for_type(output_type: OutputType, layout: Option<ColumnLayout>, locale: Locale) -> Self {
        let layout = layout.unwrap_or_else(|| output_type.default_layout());
        match output_type {
            OutputType::Csv => GeneratorOptions::Csv(zentao_csv::CsvGeneratorOptions { layout, locale }),
            OutputType::Xlsx => {
                GeneratorOptions::Xlsx(zentao_xlsx::XlsxGeneratorOptions { layout, locale })
            }
        }
    }

    pub fn into_generator(self) -> Box<dyn Generator> {
        match self {
            GeneratorOptions::Csv(options) => Box::new(zentao_csv::CsvGenerator::new(options)),
            GeneratorOptions::Xlsx(options) => Box::new(zentao_xlsx::XlsxGenerator::new(options)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> OutputRecord {
        OutputRecord {
            module: "m".to_string(),
            title: "t".to_string(),
            preconditions: "pre".to_string(),
            steps_text: "1. s".to_string(),
            expected_text: "1. e".to_string(),
            keywords: String::new(),
            priority: "3".to_string(),
            case_type: "FunctionalTest".to_string(),
            phase: "FunctionalTestPhase".to_string(),
            type_option_list: "types".to_string(),
            phase_option_list: "phases".to_string(),
        }
    }

    #[test]
    fn test_template_layout() {
        assert_eq!(
            ColumnLayout::Template.headers(Locale::En.labels()),
            vec![
                "module",
                "title",
                "preconditions",
                "steps_text",
                "expected_text",
                "keywords",
                "priority",
                "case_type",
                "phase",
                "type_option_list",
                "phase_option_list",
            ]
        );
        assert_eq!(
            ColumnLayout::Template.row(&record()),
            vec![
                "m", "t", "pre", "1. s", "1. e", "", "3", "FunctionalTest", "FunctionalTestPhase",
                "types", "phases",
            ]
        );
    }

    #[test]
    fn test_import_layout() {
        assert_eq!(
            ColumnLayout::Import.headers(Locale::En.labels()),
            vec![
                "module",
                "title",
                "preconditions",
                "steps_text",
                "expected_text",
                "priority",
                "case_type",
                "phase",
                "keywords",
            ]
        );
        assert_eq!(
            ColumnLayout::Import.row(&record()),
            vec!["m", "t", "pre", "1. s", "1. e", "3", "FunctionalTest", "FunctionalTestPhase", ""]
        );
    }

    #[test]
    fn test_chinese_template_headers() {
        let headers = ColumnLayout::Template.headers(Locale::Zh.labels());
        assert_eq!(headers[0], "所属模块");
        assert_eq!(headers[10], "阶段可选值列表");
    }

    #[test]
    fn test_output_type_defaults() {
        assert_eq!(OutputType::Csv.default_layout(), ColumnLayout::Template);
        assert_eq!(OutputType::Csv.default_module_style(), ModuleStyle::Wrapped);
        assert_eq!(OutputType::Xlsx.default_layout(), ColumnLayout::Import);
        assert_eq!(OutputType::Xlsx.default_module_style(), ModuleStyle::Plain);
    }

    #[test]
    fn test_generator_options_for_type() {
        match GeneratorOptions::for_type(OutputType::Xlsx, None, Locale::Zh) {
            GeneratorOptions::Xlsx(options) => {
                assert_eq!(options.layout, ColumnLayout::Import);
                assert_eq!(options.locale, Locale::Zh);
            }
            other => panic!("unexpected options: {:?}", other),
        }
        match GeneratorOptions::for_type(OutputType::Csv, Some(ColumnLayout::Import), Locale::En) {
            GeneratorOptions::Csv(options) => assert_eq!(options.layout, ColumnLayout::Import),
            other => panic!("unexpected options: {:?}", other),
        }
        assert_eq!(
            GeneratorOptions::for_type(OutputType::Csv, None, Locale::En)
                .into_generator()
                .extension(),
            "csv"
        );
    }
}
