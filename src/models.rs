use serde::{
    Deserialize,
    Serialize,
};

/// Coarse impact category of a substitution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, std::hash::Hash)]
pub enum Impact {
    Beneficial,
    Neutral,
    Detrimental,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Beneficial => "Beneficial",
            Impact::Neutral => "Neutral",
            Impact::Detrimental => "Detrimental",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-position substitution, 1-based.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationRequest {
    pub position: usize,
    pub substitution: char,
}

impl MutationRequest {
    pub fn new(position: usize, substitution: char) -> Self {
        Self {
            position,
            substitution,
        }
    }
}

/// Outcome of scoring one substitution. Built once by the scorer and
/// only read afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MutationResult {
    wild_type: char,
    mutant: char,
    position: usize,
    impact: Impact,
    score: f64,
    confidence: f64,
    explanation: String,
    recommendations: Vec<String>,
}

impl MutationResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        wild_type: char,
        mutant: char,
        position: usize,
        impact: Impact,
        score: f64,
        confidence: f64,
        explanation: String,
        recommendations: Vec<String>,
    ) -> Self {
        debug_assert!((0.0..=100.0).contains(&score));
        debug_assert!((0.0..=1.0).contains(&confidence));
        Self {
            wild_type,
            mutant,
            position,
            impact,
            score,
            confidence,
            explanation,
            recommendations,
        }
    }

    pub fn wild_type(&self) -> char {
        self.wild_type
    }

    pub fn mutant(&self) -> char {
        self.mutant
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn impact(&self) -> Impact {
        self.impact
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// HGVS-like short label, e.g. `A145V`.
    pub fn label(&self) -> String {
        format!("{}{}{}", self.wild_type, self.position, self.mutant)
    }
}
