use super::scorer::residue_at;
use crate::errors::Result;
use serde::Serialize;

const WINDOW_FLANK: usize = 5;
const TERMINAL_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SequenceRegion {
    NTerminal,
    Core,
    CTerminal,
}

impl SequenceRegion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceRegion::NTerminal => "N-terminal",
            SequenceRegion::Core => "core",
            SequenceRegion::CTerminal => "C-terminal",
        }
    }
}

/// Where a position sits in its reference sequence.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionContext {
    pub position: usize,
    pub wild_type: char,
    /// Residues around the position, clamped to the sequence.
    pub window: String,
    /// 1-based start of `window`.
    pub window_start: usize,
    pub relative_position: f64,
    pub region: SequenceRegion,
}

pub fn analyze_position(sequence: &str, position: usize) -> Result<PositionContext> {
    let wild_type = residue_at(sequence, position)?;
    let length = sequence.chars().count();

    let window_start = position.saturating_sub(WINDOW_FLANK).max(1);
    let window_end = (position + WINDOW_FLANK).min(length);
    let window: String = sequence
        .chars()
        .skip(window_start - 1)
        .take(window_end - window_start + 1)
        .collect();

    let relative_position = position as f64 / length as f64;
    let region = if relative_position <= TERMINAL_FRACTION {
        SequenceRegion::NTerminal
    } else if relative_position > 1.0 - TERMINAL_FRACTION {
        SequenceRegion::CTerminal
    } else {
        SequenceRegion::Core
    };

    Ok(PositionContext {
        position,
        wild_type,
        window,
        window_start,
        relative_position,
        region,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MutScoreError;

    const SEQ: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZABCDEFGHIJKLMNOPQRSTUVWXYZ";

    #[test]
    fn test_window_in_core() {
        let ctx = analyze_position(SEQ, 20).unwrap();
        assert_eq!(ctx.wild_type, 'T');
        assert_eq!(ctx.window, "OPQRSTUVWXY");
        assert_eq!(ctx.window_start, 15);
        assert_eq!(ctx.region, SequenceRegion::Core);
    }

    #[test]
    fn test_window_clamped_at_edges() {
        let ctx = analyze_position(SEQ, 2).unwrap();
        assert_eq!(ctx.window, "ABCDEFG");
        assert_eq!(ctx.window_start, 1);
        assert_eq!(ctx.region, SequenceRegion::NTerminal);

        let ctx = analyze_position(SEQ, SEQ.len()).unwrap();
        assert_eq!(ctx.window, "UVWXYZ");
        assert_eq!(ctx.region, SequenceRegion::CTerminal);
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            analyze_position(SEQ, 0),
            Err(MutScoreError::Range { .. })
        ));
        assert!(matches!(
            analyze_position(SEQ, SEQ.len() + 1),
            Err(MutScoreError::Range { .. })
        ));
    }
}
