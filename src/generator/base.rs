use crate::transform::OutputRecord;
use anyhow::Result;
use std::io::Write;

pub trait Generator {
    /// Serializes `records` as one complete output file.
    fn output(&self, records: &[OutputRecord], writer: &mut dyn Write) -> Result<()>;

    /// File extension (without the dot) used for batch output.
    fn extension(&self) -> &'static str;
}
