use super::report::ScoredMutation;
use super::scorer::MockMutationScorer;
use crate::data_sources::mutation_library::{
    LibraryEntry,
    MutationChunk,
};
use crate::errors::Result;
use crate::models::MutationResult;
use crate::notation::mutation_notation::MutationParser;
use crate::protein::catalog::GeneCatalog;
use log::{
    info,
    warn,
};
use rayon::prelude::*;
use std::time::Instant;

/// Scores every entry of a chunk in parallel.
///
/// With a `seed`, entry `i` of the library always gets the generator seeded
/// with `seed + i`, so results do not depend on scheduling or chunk size.
pub fn score_chunk(
    chunk: &MutationChunk,
    catalog: &GeneCatalog,
    parser: &MutationParser,
    seed: Option<u64>,
) -> Vec<ScoredMutation> {
    let start = Instant::now();
    let out: Vec<ScoredMutation> = chunk
        .entries
        .par_iter()
        .enumerate()
        .map(|(i, entry)| {
            let entry_seed = seed.map(|s| s.wrapping_add((chunk.offset + i) as u64));
            match score_entry(entry, catalog, parser, entry_seed) {
                Ok(res) => ScoredMutation::scored(entry.gene.clone(), entry.mutation.clone(), res),
                Err(e) => {
                    warn!("Skipping {} {}: {}", entry.gene, entry.mutation, e);
                    ScoredMutation::failed(entry.gene.clone(), entry.mutation.clone(), e.to_string())
                }
            }
        })
        .collect();

    let n_ok = out.iter().filter(|x| x.is_ok()).count();
    info!(
        "Scoring took {:?} for {} mutations ({} failed)",
        start.elapsed(),
        out.len(),
        out.len() - n_ok,
    );
    out
}

fn score_entry(
    entry: &LibraryEntry,
    catalog: &GeneCatalog,
    parser: &MutationParser,
    seed: Option<u64>,
) -> Result<MutationResult> {
    let (record, request) = catalog.resolve(parser, &entry.gene, &entry.mutation)?;
    MockMutationScorer::from_seed_option(seed).score_request(&record.sequence, &request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_sources::mutation_library::MutationLibrary;
    use crate::models::Impact;

    fn library() -> MutationLibrary {
        let entries = [
            ("DREB1A", "145V"),
            ("DREB1A", "278T"),
            ("NHX1", "E330D"),
            ("NOPE", "1A"),
            ("DREB1A", "99999V"),
            ("PSY1", "88P"),
        ]
        .iter()
        .map(|(g, m)| LibraryEntry {
            gene: g.to_string(),
            mutation: m.to_string(),
        })
        .collect();
        MutationLibrary::new(entries)
    }

    fn run(chunk_size: usize, seed: Option<u64>) -> Vec<ScoredMutation> {
        let catalog = GeneCatalog::demo().unwrap();
        let parser = MutationParser::new().unwrap();
        library()
            .as_iterator(chunk_size)
            .flat_map(|chunk| score_chunk(&chunk, &catalog, &parser, seed))
            .collect()
    }

    #[test]
    fn test_batch_keeps_failures_in_order() {
        let out = run(4, None);
        assert_eq!(out.len(), 6);
        assert_eq!(
            out[0].result.as_ref().unwrap().impact(),
            Impact::Beneficial
        );
        assert_eq!(out[1].result.as_ref().unwrap().impact(), Impact::Neutral);
        assert_eq!(
            out[2].result.as_ref().unwrap().impact(),
            Impact::Detrimental
        );
        assert!(out[3].error.as_ref().unwrap().contains("unknown gene"));
        assert!(out[4].error.as_ref().unwrap().starts_with("RangeError"));
        assert!(out[5].is_ok());
    }

    #[test]
    fn test_seeded_batch_independent_of_chunking() {
        let a = run(1, Some(99));
        let b = run(100, Some(99));
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.result, y.result);
        }
    }
}
