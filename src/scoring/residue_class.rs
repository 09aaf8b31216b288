use crate::models::Impact;
use std::ops::Range;

const HYDROPHOBIC: [char; 8] = ['A', 'V', 'I', 'L', 'M', 'F', 'Y', 'W'];
const POLAR: [char; 4] = ['S', 'T', 'N', 'Q'];
const CHARGED: [char; 5] = ['K', 'R', 'H', 'D', 'E'];

/// Membership class of a substituted residue.
///
/// Classes are checked in declaration order and the first match wins, so
/// the table order is part of the behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidueClass {
    Hydrophobic,
    Polar,
    Charged,
    Other,
}

impl ResidueClass {
    pub fn of(residue: char) -> Self {
        if HYDROPHOBIC.contains(&residue) {
            ResidueClass::Hydrophobic
        } else if POLAR.contains(&residue) {
            ResidueClass::Polar
        } else if CHARGED.contains(&residue) {
            ResidueClass::Charged
        } else {
            ResidueClass::Other
        }
    }

    pub fn impact(&self) -> Impact {
        match self {
            ResidueClass::Hydrophobic => Impact::Beneficial,
            ResidueClass::Polar => Impact::Neutral,
            ResidueClass::Charged => Impact::Detrimental,
            ResidueClass::Other => Impact::Neutral,
        }
    }

    /// Half-open band the illustrative score is drawn from.
    pub fn score_range(&self) -> Range<f64> {
        match self {
            ResidueClass::Hydrophobic => 78.0..98.0,
            ResidueClass::Polar => 45.0..75.0,
            ResidueClass::Charged => 15.0..40.0,
            ResidueClass::Other => 50.0..70.0,
        }
    }

    pub fn explanation(&self, wild_type: char, position: usize, mutant: char) -> String {
        match self {
            ResidueClass::Hydrophobic => format!(
                "Replacing {wild_type} with the hydrophobic residue {mutant} at position {position} \
                 is predicted to strengthen core packing and improve protein stability under stress."
            ),
            ResidueClass::Polar => format!(
                "Substituting {wild_type}{position}{mutant} introduces a small polar side chain; \
                 surface properties shift slightly but overall function is expected to be preserved."
            ),
            ResidueClass::Charged => format!(
                "Introducing the charged residue {mutant} at position {position} (was {wild_type}) \
                 is likely to disrupt local folding and salt-bridge networks, reducing activity."
            ),
            ResidueClass::Other => format!(
                "The {wild_type}{position}{mutant} substitution has no clear physicochemical trend; \
                 the model expects a modest, context-dependent effect."
            ),
        }
    }

    pub fn recommendations(&self) -> [&'static str; 2] {
        match self {
            ResidueClass::Hydrophobic => [
                "Prioritize this variant for greenhouse drought-stress trials",
                "Combine with promoter optimization to maximize expression gains",
            ],
            ResidueClass::Polar => [
                "Validate solubility with a small-scale expression assay",
                "Screen neighbouring positions for stronger stabilizing candidates",
            ],
            ResidueClass::Charged => [
                "Deprioritize this variant for trait engineering",
                "Consider a conservative hydrophobic substitution at this site instead",
            ],
            ResidueClass::Other => [
                "Run a structural model before committing to field trials",
                "Test alongside the wild-type control to measure the effect directly",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_tables() {
        for aa in "AVILMFYW".chars() {
            assert_eq!(ResidueClass::of(aa), ResidueClass::Hydrophobic, "{}", aa);
        }
        for aa in "STNQ".chars() {
            assert_eq!(ResidueClass::of(aa), ResidueClass::Polar, "{}", aa);
        }
        for aa in "KRHDE".chars() {
            assert_eq!(ResidueClass::of(aa), ResidueClass::Charged, "{}", aa);
        }
        for aa in "GCPX*".chars() {
            assert_eq!(ResidueClass::of(aa), ResidueClass::Other, "{}", aa);
        }
    }

    #[test]
    fn test_other_is_neutral_with_narrow_band() {
        let class = ResidueClass::Other;
        assert_eq!(class.impact(), Impact::Neutral);
        assert_eq!(class.score_range(), 50.0..70.0);
    }

    #[test]
    fn test_explanation_mentions_substitution() {
        let expl = ResidueClass::Polar.explanation('G', 278, 'T');
        assert!(expl.contains("G278T"), "{}", expl);
    }
}
