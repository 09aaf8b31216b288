use crate::errors::{
    MutScoreError,
    Result,
};
use crate::models::MutationRequest;
use crate::scoring::scorer::residue_at;
use regex::Regex;

/// Short substitution notation, `[WT]<position><MUT>`, e.g. `A145V` or `145V`.
#[derive(Debug, Clone)]
pub struct MutationParser {
    regex: Regex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMutation {
    pub wild_type: Option<char>,
    pub position: usize,
    pub substitution: char,
}

impl MutationParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(r"^([A-Za-z])?([0-9]+)([A-Za-z*])$")?,
        })
    }

    pub fn parse(&self, token: &str) -> Result<ParsedMutation> {
        let token = token.trim();
        let caps = self.regex.captures(token).ok_or_else(|| {
            MutScoreError::Value(format!(
                "'{}' is not a substitution like A145V or 145V",
                token
            ))
        })?;

        let wild_type = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .map(|c| c.to_ascii_uppercase());
        // Digits only, so the only failure left is overflow.
        let position: usize = caps[2]
            .parse()
            .map_err(|_| MutScoreError::Value(format!("position in '{}' is too large", token)))?;
        if position == 0 {
            return Err(MutScoreError::Range {
                position,
                length: 0,
            });
        }
        let substitution = caps[3]
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .ok_or_else(|| MutScoreError::Value(format!("missing substitution in '{}'", token)))?;

        Ok(ParsedMutation {
            wild_type,
            position,
            substitution,
        })
    }
}

impl ParsedMutation {
    /// Checks the position and any stated wild type against `sequence`.
    pub fn validate_against(&self, sequence: &str) -> Result<MutationRequest> {
        let found = residue_at(sequence, self.position)?;
        if let Some(expected) = self.wild_type {
            if expected != found {
                return Err(MutScoreError::WildTypeMismatch {
                    position: self.position,
                    expected,
                    found,
                });
            }
        }
        Ok(MutationRequest::new(self.position, self.substitution))
    }
}
