use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

use crate::error::ConvertError;
use crate::suite::{RawCase, RawStep, SuiteNode};

// Wire shape of a TestLink export. Elements we do not read (node_order,
// details, externalid, custom_fields, ...) are skipped by serde.

#[derive(Debug, Deserialize)]
struct XmlSuite {
    #[serde(rename = "@name")]
    name: Option<String>,
    #[serde(rename = "testsuite", default)]
    suites: Vec<XmlSuite>,
    #[serde(rename = "testcase", default)]
    cases: Vec<XmlCase>,
}

#[derive(Debug, Deserialize)]
struct XmlCase {
    #[serde(rename = "@name")]
    name: Option<String>,
    preconditions: Option<String>,
    summary: Option<String>,
    importance: Option<String>,
    steps: Option<XmlSteps>,
}

#[derive(Debug, Deserialize)]
struct XmlSteps {
    #[serde(rename = "step", default)]
    steps: Vec<XmlStep>,
}

#[derive(Debug, Deserialize)]
struct XmlStep {
    step_number: Option<String>,
    actions: Option<String>,
    expectedresults: Option<String>,
}

impl From<XmlSuite> for SuiteNode {
    fn from(suite: XmlSuite) -> Self {
        SuiteNode {
            name: suite.name,
            children: suite.suites.into_iter().map(SuiteNode::from).collect(),
            test_cases: suite.cases.into_iter().map(RawCase::from).collect(),
        }
    }
}

impl From<XmlCase> for RawCase {
    fn from(case: XmlCase) -> Self {
        RawCase {
            title: case.name.unwrap_or_default(),
            preconditions_html: case.preconditions,
            summary_html: case.summary,
            importance: case.importance,
            steps: case
                .steps
                .map(|s| s.steps.into_iter().map(RawStep::from).collect())
                .unwrap_or_default(),
        }
    }
}

impl From<XmlStep> for RawStep {
    fn from(step: XmlStep) -> Self {
        RawStep {
            actions_html: step.actions,
            expected_html: step.expectedresults,
            step_number: step.step_number.map(|n| n.trim().to_string()),
        }
    }
}

/// Root elements a TestLink export can have.
const ROOT_ELEMENTS: [&str; 2] = ["testsuite", "testcases"];

/// A parser for TestLink XML exports.
///
/// Accepts a suite export (`<testsuite>` root) or a bare case export
/// (`<testcases>` root, read as a single unnamed suite).
#[derive(Debug, Default)]
pub struct TestLinkParser;

impl TestLinkParser {
    pub fn new() -> Self {
        TestLinkParser
    }

    /// Parses the input document into a suite tree.
    pub fn parse(&self, input: &str) -> Result<SuiteNode, ConvertError> {
        let root = Self::root_element(input)?;
        if !ROOT_ELEMENTS.contains(&root.as_str()) {
            return Err(ConvertError::MalformedInput(format!(
                "unexpected root element <{}>, expected one of: {}",
                root,
                ROOT_ELEMENTS.join(", ")
            )));
        }

        let suite: XmlSuite = quick_xml::de::from_str(input)?;
        let node = SuiteNode::from(suite);
        log::debug!("parsed <{}> with {} test cases", root, node.case_count());
        Ok(node)
    }

    fn root_element(input: &str) -> Result<String, ConvertError> {
        let mut reader = Reader::from_str(input);

        loop {
            match reader.read_event() {
                Err(e) => {
                    return Err(ConvertError::MalformedInput(format!(
                        "Error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                Ok(Event::Eof) => {
                    return Err(ConvertError::MalformedInput(
                        "document has no root element".to_string(),
                    ))
                }
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                }
                _ => (),
            }
        }
    }
}
