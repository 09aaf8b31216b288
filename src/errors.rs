#[derive(Debug)]
pub enum MutScoreError {
    /// 1-based position outside `[1, length]`.
    Range { position: usize, length: usize },
    /// Malformed input token (substitution, notation, sequence).
    Value(String),
    WildTypeMismatch {
        position: usize,
        expected: char,
        found: char,
    },
    UnknownGene(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    Regex(regex::Error),
}

impl std::fmt::Display for MutScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range { position, length } => write!(
                f,
                "RangeError: position {} is outside the sequence (1..={})",
                position, length
            ),
            Self::Value(msg) => write!(f, "ValueError: {}", msg),
            Self::WildTypeMismatch {
                position,
                expected,
                found,
            } => write!(
                f,
                "wild type mismatch at position {}: notation says '{}' but the reference has '{}'",
                position, expected, found
            ),
            Self::UnknownGene(id) => write!(f, "unknown gene '{}'", id),
            Self::Io(e) => write!(f, "{}", e),
            Self::Json(e) => write!(f, "{}", e),
            Self::Csv(e) => write!(f, "{}", e),
            Self::Regex(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MutScoreError {}

pub type Result<T> = std::result::Result<T, MutScoreError>;

impl From<std::io::Error> for MutScoreError {
    fn from(x: std::io::Error) -> Self {
        Self::Io(x)
    }
}

impl From<serde_json::Error> for MutScoreError {
    fn from(x: serde_json::Error) -> Self {
        Self::Json(x)
    }
}

impl From<csv::Error> for MutScoreError {
    fn from(x: csv::Error) -> Self {
        Self::Csv(x)
    }
}

impl From<regex::Error> for MutScoreError {
    fn from(x: regex::Error) -> Self {
        Self::Regex(x)
    }
}
