use clap::ValueEnum;

/// Represents a single step of a test case as found in the source document.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct RawStep {
    /// The step actions, possibly containing HTML markup.
    pub actions_html: Option<String>,
    /// The expected results, possibly containing HTML markup.
    pub expected_html: Option<String>,
    /// The ordinal given by the source. Informational only; steps are numbered by position.
    pub step_number: Option<String>,
}

impl RawStep {
    /// Creates a new `RawStep` from its actions and expected results.
    pub fn new(actions_html: &str, expected_html: &str) -> Self {
        RawStep {
            actions_html: Some(actions_html.to_string()),
            expected_html: Some(expected_html.to_string()),
            step_number: None,
        }
    }
}

/// Represents a single test case as found in the source document.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct RawCase {
    /// The case title (the `name` attribute of `testcase`).
    pub title: String,
    /// The preconditions, possibly containing HTML markup.
    pub preconditions_html: Option<String>,
    /// The summary, possibly containing HTML markup. Used when preconditions are empty.
    pub summary_html: Option<String>,
    /// The source importance code (`"1"` high, `"2"` medium, `"3"` low).
    pub importance: Option<String>,
    /// The steps in document order.
    pub steps: Vec<RawStep>,
}

impl RawCase {
    /// Creates a new `RawCase` with the given title and no other data.
    pub fn new(title: &str) -> Self {
        RawCase {
            title: title.to_string(),
            ..Default::default()
        }
    }
}

/// Represents one node of the suite hierarchy.
///
/// A node owns its direct test cases and its child suites; both lists keep
/// document order.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct SuiteNode {
    /// The suite name. `None` or empty means the placeholder is used.
    pub name: Option<String>,
    /// Child suites in document order.
    pub children: Vec<SuiteNode>,
    /// Test cases directly under this suite, in document order.
    pub test_cases: Vec<RawCase>,
}

impl SuiteNode {
    /// Creates a new, empty `SuiteNode` with the given name.
    pub fn new(name: &str) -> Self {
        SuiteNode {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Creates a new, empty `SuiteNode` without a name.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Adds a test case to this suite and returns `self` for chaining.
    pub fn with_case(mut self, case: RawCase) -> Self {
        self.test_cases.push(case);
        self
    }

    /// Adds a child suite to this suite and returns `self` for chaining.
    pub fn with_child(mut self, child: SuiteNode) -> Self {
        self.children.push(child);
        self
    }

    /// Counts the test cases in this suite and all of its descendants.
    pub fn case_count(&self) -> usize {
        self.test_cases.len()
            + self
                .children
                .iter()
                .map(SuiteNode::case_count)
                .sum::<usize>()
    }
}

/// A `RawCase` tagged with the module path of its containing suite.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FlattenedCase {
    /// The formatted module path (see `ModuleStyle`).
    pub module_path: String,
    pub case: RawCase,
}

/// How a `/`-joined ancestor chain is written into the module column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModuleStyle {
    /// `/(a/b/c)`, the form expected by the ZenTao CSV template.
    Wrapped,
    /// `a/b/c`
    Plain,
}

impl ModuleStyle {
    /// Formats a `/`-joined ancestor chain according to this style.
    pub fn format(self, full_module: &str) -> String {
        match self {
            ModuleStyle::Wrapped => format!("/({})", full_module),
            ModuleStyle::Plain => full_module.to_string(),
        }
    }
}

/// Options for configuring the `TreeFlattener`.
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    pub module_style: ModuleStyle,
    /// Name used for a suite whose name is absent or empty.
    pub unnamed_module: String,
}

impl Default for FlattenOptions {
    /// Returns the default options: wrapped paths and the English placeholder.
    fn default() -> Self {
        FlattenOptions {
            module_style: ModuleStyle::Wrapped,
            unnamed_module: "Unnamed Module".to_string(),
        }
    }
}

/// Turns a suite tree into a flat, document-ordered list of cases.
pub struct TreeFlattener {
    options: FlattenOptions,
}

impl TreeFlattener {
    /// Creates a new `TreeFlattener` with the given options.
    pub fn new(options: FlattenOptions) -> Self {
        TreeFlattener { options }
    }

    /// Flattens the tree rooted at `root`.
    ///
    /// Cases attached to a suite come before the cases of its child suites, and
    /// every case carries the path from `root` down to its own suite.
    pub fn flatten(&self, root: &SuiteNode) -> Vec<FlattenedCase> {
        let mut cases = Vec::with_capacity(root.case_count());
        self.visit(root, Vec::new(), &mut cases);
        cases
    }

    // `path` is owned by this call; each child gets its own clone so siblings
    // never see each other's segments.
    fn visit<'a>(
        &'a self,
        node: &'a SuiteNode,
        mut path: Vec<&'a str>,
        out: &mut Vec<FlattenedCase>,
    ) {
        let name = match node.name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => {
                log::debug!(
                    "suite without a name at depth {}, using \"{}\"",
                    path.len(),
                    self.options.unnamed_module
                );
                self.options.unnamed_module.as_str()
            }
        };
        path.push(name);
        let full_module = path.join("/");
        let module_path = self.options.module_style.format(&full_module);

        for case in &node.test_cases {
            out.push(FlattenedCase {
                module_path: module_path.clone(),
                case: case.clone(),
            });
        }

        for child in &node.children {
            self.visit(child, path.clone(), out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TreeFlattener {
        TreeFlattener::new(FlattenOptions {
            module_style: ModuleStyle::Plain,
            ..Default::default()
        })
    }

    fn paths(cases: &[FlattenedCase]) -> Vec<(&str, &str)> {
        cases
            .iter()
            .map(|c| (c.module_path.as_str(), c.case.title.as_str()))
            .collect()
    }

    #[test]
    fn test_module_style_format() {
        assert_eq!(ModuleStyle::Wrapped.format("Root/A"), "/(Root/A)");
        assert_eq!(ModuleStyle::Plain.format("Root/A"), "Root/A");
    }

    #[test]
    fn test_flatten_siblings_do_not_leak() {
        let root = SuiteNode::new("Root")
            .with_child(SuiteNode::new("A").with_case(RawCase::new("case1")))
            .with_child(
                SuiteNode::new("B")
                    .with_child(SuiteNode::new("C").with_case(RawCase::new("case2"))),
            );

        let cases = plain().flatten(&root);
        assert_eq!(
            paths(&cases),
            vec![("Root/A", "case1"), ("Root/B/C", "case2")]
        );
    }

    #[test]
    fn test_flatten_cases_before_child_suites() {
        let root = SuiteNode::new("Root")
            .with_child(
                SuiteNode::new("A")
                    .with_child(SuiteNode::new("A1").with_case(RawCase::new("deep")))
                    .with_case(RawCase::new("shallow1"))
                    .with_case(RawCase::new("shallow2")),
            )
            .with_case(RawCase::new("top"));

        let cases = plain().flatten(&root);
        assert_eq!(
            paths(&cases),
            vec![
                ("Root", "top"),
                ("Root/A", "shallow1"),
                ("Root/A", "shallow2"),
                ("Root/A/A1", "deep"),
            ]
        );
    }

    #[test]
    fn test_flatten_unnamed_suite_keeps_segment() {
        let mut empty_name = SuiteNode::new("");
        empty_name.test_cases.push(RawCase::new("c2"));
        let root = SuiteNode::unnamed()
            .with_child(SuiteNode::unnamed().with_case(RawCase::new("c1")))
            .with_child(empty_name);

        let cases = plain().flatten(&root);
        assert_eq!(
            paths(&cases),
            vec![
                ("Unnamed Module/Unnamed Module", "c1"),
                ("Unnamed Module/Unnamed Module", "c2"),
            ]
        );
    }

    #[test]
    fn test_flatten_wrapped_with_custom_placeholder() {
        let flattener = TreeFlattener::new(FlattenOptions {
            module_style: ModuleStyle::Wrapped,
            unnamed_module: "未命名模块".to_string(),
        });
        let root = SuiteNode::unnamed()
            .with_child(SuiteNode::new("Login").with_case(RawCase::new("Valid login")));

        let cases = flattener.flatten(&root);
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].module_path, "/(未命名模块/Login)");
    }

    #[test]
    fn test_flatten_deep_and_wide_tree() {
        let root = SuiteNode::new("R")
            .with_child(
                SuiteNode::new("X")
                    .with_child(SuiteNode::new("Y").with_case(RawCase::new("xy")))
                    .with_child(SuiteNode::new("Z").with_case(RawCase::new("xz"))),
            )
            .with_child(SuiteNode::new("W").with_case(RawCase::new("w")));

        let cases = plain().flatten(&root);
        assert_eq!(
            paths(&cases),
            vec![("R/X/Y", "xy"), ("R/X/Z", "xz"), ("R/W", "w")]
        );
    }

    #[test]
    fn test_flatten_empty_tree() {
        assert!(plain().flatten(&SuiteNode::new("Root")).is_empty());
    }

    #[test]
    fn test_case_count() {
        let root = SuiteNode::new("R")
            .with_case(RawCase::new("a"))
            .with_child(
                SuiteNode::new("S")
                    .with_case(RawCase::new("b"))
                    .with_case(RawCase::new("c")),
            );
        assert_eq!(root.case_count(), 3);
    }
}
