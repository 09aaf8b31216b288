use super::models::{
    GeneRecord,
    GeneRecordBuilder,
};
use crate::errors::Result;

/// Parses FASTA text into gene records, one per `>` header.
pub fn parse_fasta(fasta: &str) -> Result<Vec<GeneRecord>> {
    let mut records = vec![];
    let mut current: Option<GeneRecordBuilder> = None;
    for line in fasta.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            if let Some(done) = current.take() {
                records.push(done.build()?);
            }
            current = Some(GeneRecordBuilder::new().with_header(header));
        } else {
            // Sequence lines before any header still need an id, which
            // `build` reports.
            let builder = current.take().unwrap_or_default();
            current = Some(builder.append_sequence(line));
        }
    }
    if let Some(done) = current {
        records.push(done.build()?);
    }
    Ok(records)
}
