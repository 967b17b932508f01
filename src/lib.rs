pub mod cli;
pub mod docs;
pub mod error;
pub mod generator;
pub mod labels;
pub mod parser;
pub mod suite;
pub mod transform;

pub fn get_parser_types() -> Vec<String> {
    vec!["testlink".to_string()]
}

pub fn get_generator_types() -> Vec<String> {
    vec!["csv".to_string(), "xlsx".to_string()]
}
