//! Detailed documentation for input and output types.
//!
//! This module contains documentation about the TestLink input accepted by
//! testlink2zentao and the ZenTao import files it produces.

/// # Types of Input
///
/// ## `testlink`
///
/// A TestLink XML export. The root element is either `<testsuite>` (a suite
/// export, possibly nested) or `<testcases>` (a bare case export, read as one
/// unnamed suite).
///
/// For each `<testcase>`, the `name` attribute and the `preconditions`,
/// `summary`, `importance` and `steps/step/{actions,expectedresults}` children
/// are read. Rich text may be CDATA or escaped HTML.
///
/// A directory given as input is scanned (non-recursively) for `*.xml` files,
/// each converted to a sibling file with the output extension.
pub mod input_types {
    /// Documentation for testlink input format
    pub mod testlink {
        //! TestLink XML suite/case export
    }
}

/// # Types of Output
///
/// Every test case becomes one row. The module column holds the chain of suite
/// names from the document root down to the case, joined by `/`.
///
/// ## Common Options
///
/// `--locale={en,zh}` : language of headers and fixed values
/// `--layout={template,import}` : column set and order
/// `--module-style={wrapped,plain}` : `/(a/b)` or `a/b`
///
/// ## `csv`
///
/// UTF-8 CSV with BOM. Defaults to the `template` layout (with the case type and
/// phase option lists on the first row) and `wrapped` module paths.
///
/// ## `xlsx`
///
/// Single-sheet workbook, bold header, wrapped cell text. Defaults to the
/// `import` layout and `plain` module paths.
pub mod output_types {
    /// Documentation for csv output format
    pub mod csv {
        //! ZenTao CSV import template
    }

    /// Documentation for xlsx output format
    pub mod xlsx {
        //! ZenTao XLSX case import
    }
}
