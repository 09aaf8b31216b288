use crate::errors::{
    MutScoreError,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::sync::Arc;

/// A named reference sequence plus the demo metadata shown next to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organism: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub trait_focus: String,
    pub sequence: Arc<str>,
    #[serde(default)]
    pub suggested_mutations: Vec<String>,
}

impl GeneRecord {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Uppercases and strips whitespace from the sequence. Sequences must
    /// be ASCII and non-empty.
    pub(crate) fn normalized(mut self) -> Result<Self> {
        if !self.sequence.is_ascii() {
            return Err(MutScoreError::Value(format!(
                "sequence of '{}' contains non-ASCII characters",
                self.id
            )));
        }
        let clean: String = self
            .sequence
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if clean.is_empty() {
            return Err(MutScoreError::Value(format!(
                "gene '{}' has an empty sequence",
                self.id
            )));
        }
        self.sequence = clean.into();
        Ok(self)
    }
}

#[derive(Debug)]
pub struct GeneRecordBuilder {
    pub id: Option<String>,
    pub description: String,
    pub sequence: String,
}

impl GeneRecordBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            description: String::new(),
            sequence: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// `>ID free text description` header, without the `>`.
    pub fn with_header(mut self, header: &str) -> Self {
        let header = header.trim();
        let (id, description) = match header.split_once(char::is_whitespace) {
            Some((id, rest)) => (id, rest.trim()),
            None => (header, ""),
        };
        self.id = Some(id.to_string());
        self.description = description.to_string();
        self
    }

    pub fn append_sequence(mut self, sequence: &str) -> Self {
        self.sequence.push_str(sequence);
        self
    }

    pub fn build(self) -> Result<GeneRecord> {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(MutScoreError::Value(
                    "FASTA record without an identifier".to_string(),
                ))
            }
        };
        GeneRecord {
            name: id.clone(),
            id,
            organism: String::new(),
            description: self.description,
            trait_focus: String::new(),
            sequence: self.sequence.into(),
            suggested_mutations: Vec::new(),
        }
        .normalized()
    }
}

impl Default for GeneRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_splits_header() {
        let rec = GeneRecordBuilder::new()
            .with_header(" NHX1 vacuolar antiporter ")
            .append_sequence("mldsl")
            .append_sequence("VSK")
            .build()
            .unwrap();
        assert_eq!(rec.id, "NHX1");
        assert_eq!(rec.description, "vacuolar antiporter");
        assert_eq!(rec.sequence.as_ref(), "MLDSLVSK");
    }

    #[test]
    fn test_record_json_shares_sequence() {
        let json = r#"{"id": "G1", "sequence": "MKT", "suggested_mutations": ["K2E"]}"#;
        let rec: GeneRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.sequence.as_ref(), "MKT");

        let shared = rec.sequence.clone();
        assert!(Arc::ptr_eq(&shared, &rec.sequence));

        let out = serde_json::to_string(&rec).unwrap();
        assert!(out.contains(r#""sequence":"MKT""#), "{}", out);
    }

    #[test]
    fn test_builder_requires_id_and_sequence() {
        assert!(GeneRecordBuilder::new().append_sequence("AC").build().is_err());
        assert!(matches!(
            GeneRecordBuilder::new().with_header("X").build(),
            Err(MutScoreError::Value(_))
        ));
    }
}
