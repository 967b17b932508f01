//! Input parsers turning source documents into a suite tree.

pub mod testlink;

pub use testlink::TestLinkParser;
