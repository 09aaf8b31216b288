//! View-state for the interactive design studio.
//!
//! All mutable screen state lives in [`StudioState`] and changes only
//! through [`StudioState::update`], so the terminal front-end is a pure
//! renderer of this struct.

use crate::models::MutationResult;
use crate::notation::mutation_notation::MutationParser;
use crate::protein::catalog::GeneCatalog;
use crate::scoring::position::{
    analyze_position,
    PositionContext,
};
use crate::scoring::scorer::MockMutationScorer;
use rand::Rng;

pub type ShouldRedraw = bool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub gene: String,
    pub mutation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudioMessage {
    MoveUp,
    MoveDown,
    Score,
    /// Score the selection again to draw fresh numbers.
    Reroll,
    Quit,
}

#[derive(Debug, Clone, Default)]
pub struct StudioState {
    pub candidates: Vec<Candidate>,
    pub selected: Option<usize>,
    pub last_result: Option<MutationResult>,
    pub last_context: Option<PositionContext>,
    /// Latest result per candidate, same order as `candidates`.
    pub scored: Vec<Option<MutationResult>>,
    pub status: String,
    pub exiting: bool,
}

impl StudioState {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let selected = if candidates.is_empty() { None } else { Some(0) };
        Self {
            scored: vec![None; candidates.len()],
            candidates,
            selected,
            status: "Select a candidate and press <Enter> to score it".to_string(),
            ..Default::default()
        }
    }

    pub fn from_catalog(catalog: &GeneCatalog) -> Self {
        Self::new(
            catalog
                .suggested_candidates()
                .into_iter()
                .map(|(gene, mutation)| Candidate { gene, mutation })
                .collect(),
        )
    }

    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.selected.and_then(|i| self.candidates.get(i))
    }

    pub fn result_for(&self, index: usize) -> Option<&MutationResult> {
        self.scored.get(index).and_then(|x| x.as_ref())
    }

    pub fn update<R: Rng>(
        &mut self,
        msg: StudioMessage,
        scorer: &mut MockMutationScorer<R>,
        catalog: &GeneCatalog,
        parser: &MutationParser,
    ) -> ShouldRedraw {
        match msg {
            StudioMessage::Quit => {
                self.exiting = true;
                false
            }
            StudioMessage::MoveDown => self.move_selection(1),
            StudioMessage::MoveUp => self.move_selection(-1),
            StudioMessage::Score | StudioMessage::Reroll => {
                self.score_selected(scorer, catalog, parser);
                true
            }
        }
    }

    fn move_selection(&mut self, step: isize) -> ShouldRedraw {
        let n = self.candidates.len();
        if n == 0 {
            return false;
        }
        let next = match self.selected {
            Some(i) => (i as isize + step).rem_euclid(n as isize) as usize,
            None => 0,
        };
        self.selected = Some(next);
        self.last_result = None;
        self.last_context = None;
        true
    }

    fn store(&mut self, index: usize, result: Option<MutationResult>) {
        if self.scored.len() < self.candidates.len() {
            self.scored.resize(self.candidates.len(), None);
        }
        self.scored[index] = result;
    }

    fn score_selected<R: Rng>(
        &mut self,
        scorer: &mut MockMutationScorer<R>,
        catalog: &GeneCatalog,
        parser: &MutationParser,
    ) {
        let (Some(index), Some(candidate)) = (self.selected, self.selected_candidate().cloned())
        else {
            self.status = "Nothing selected".to_string();
            return;
        };
        let scored = catalog
            .resolve(parser, &candidate.gene, &candidate.mutation)
            .and_then(|(record, request)| {
                let context = analyze_position(&record.sequence, request.position)?;
                let result = scorer.score_request(&record.sequence, &request)?;
                Ok((result, context))
            });
        match scored {
            Ok((result, context)) => {
                self.status = format!(
                    "{} {}: {}",
                    candidate.gene,
                    result.label(),
                    result.impact()
                );
                self.store(index, Some(result.clone()));
                self.last_result = Some(result);
                self.last_context = Some(context);
            }
            Err(e) => {
                log::warn!("Could not score {:?}: {}", candidate, e);
                self.status = format!("Error: {}", e);
                self.store(index, None);
                self.last_result = None;
                self.last_context = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Impact;

    fn setup() -> (GeneCatalog, MutationParser, MockMutationScorer) {
        (
            GeneCatalog::demo().unwrap(),
            MutationParser::new().unwrap(),
            MockMutationScorer::seeded(0),
        )
    }

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate {
                gene: "DREB1A".to_string(),
                mutation: "145V".to_string(),
            },
            Candidate {
                gene: "DREB1A".to_string(),
                mutation: "278T".to_string(),
            },
            Candidate {
                gene: "MISSING".to_string(),
                mutation: "1A".to_string(),
            },
        ]
    }

    #[test]
    fn test_selection_wraps() {
        let (catalog, parser, mut scorer) = setup();
        let mut state = StudioState::new(candidates());
        assert_eq!(state.selected, Some(0));
        state.update(StudioMessage::MoveUp, &mut scorer, &catalog, &parser);
        assert_eq!(state.selected, Some(2));
        state.update(StudioMessage::MoveDown, &mut scorer, &catalog, &parser);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_score_and_reroll() {
        let (catalog, parser, mut scorer) = setup();
        let mut state = StudioState::new(candidates());
        assert!(state.update(StudioMessage::Score, &mut scorer, &catalog, &parser));
        let first = state.last_result.clone().unwrap();
        assert_eq!(first.impact(), Impact::Beneficial);
        assert_eq!(state.last_context.as_ref().unwrap().position, 145);

        state.update(StudioMessage::Reroll, &mut scorer, &catalog, &parser);
        let second = state.last_result.clone().unwrap();
        assert_eq!(second.impact(), first.impact());
        assert_ne!(second.score(), first.score());
    }

    #[test]
    fn test_scores_kept_per_candidate() {
        let (catalog, parser, mut scorer) = setup();
        let mut state = StudioState::new(candidates());
        assert!(state.result_for(0).is_none());

        state.update(StudioMessage::Score, &mut scorer, &catalog, &parser);
        state.update(StudioMessage::MoveDown, &mut scorer, &catalog, &parser);
        assert!(state.last_result.is_none());
        state.update(StudioMessage::Score, &mut scorer, &catalog, &parser);

        assert_eq!(state.result_for(0).unwrap().impact(), Impact::Beneficial);
        assert_eq!(state.result_for(1).unwrap().impact(), Impact::Neutral);
        assert_eq!(state.result_for(1), state.last_result.as_ref());
        assert!(state.result_for(2).is_none());
        assert!(state.result_for(99).is_none());
    }

    #[test]
    fn test_score_error_sets_status() {
        let (catalog, parser, mut scorer) = setup();
        let mut state = StudioState::new(candidates());
        state.update(StudioMessage::MoveUp, &mut scorer, &catalog, &parser);
        state.update(StudioMessage::Score, &mut scorer, &catalog, &parser);
        assert!(state.last_result.is_none());
        assert!(state.status.starts_with("Error"), "{}", state.status);
    }

    #[test]
    fn test_quit_and_empty() {
        let (catalog, parser, mut scorer) = setup();
        let mut state = StudioState::new(vec![]);
        assert!(!state.update(StudioMessage::MoveDown, &mut scorer, &catalog, &parser));
        state.update(StudioMessage::Score, &mut scorer, &catalog, &parser);
        assert_eq!(state.status, "Nothing selected");
        state.update(StudioMessage::Quit, &mut scorer, &catalog, &parser);
        assert!(state.exiting);
    }

    #[test]
    fn test_from_demo_catalog() {
        let (catalog, _, _) = setup();
        let state = StudioState::from_catalog(&catalog);
        assert_eq!(state.candidates.len(), catalog.suggested_candidates().len());
    }
}
