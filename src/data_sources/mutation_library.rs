use crate::errors::{
    MutScoreError,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::path;

/// One requested substitution in a batch file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryEntry {
    pub gene: String,
    pub mutation: String,
}

#[derive(Debug, Clone)]
pub struct MutationLibrary {
    entries: Vec<LibraryEntry>,
}

/// A contiguous slice of the library. `offset` is the index of the first
/// entry in the whole library.
#[derive(Debug, Clone)]
pub struct MutationChunk {
    pub offset: usize,
    pub entries: Vec<LibraryEntry>,
}

impl MutationChunk {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct MutationLibraryIterator {
    library: MutationLibrary,
    chunk_size: usize,
    max_iterations: usize,
    iteration_index: usize,
}

impl MutationLibraryIterator {
    pub fn new(library: MutationLibrary, chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        let max_iterations = library.entries.len().div_ceil(chunk_size);
        Self {
            library,
            chunk_size,
            max_iterations,
            iteration_index: 0,
        }
    }
}

impl Iterator for MutationLibraryIterator {
    type Item = MutationChunk;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self
            .library
            .get_chunk(self.iteration_index, self.chunk_size);
        if out.is_some() {
            self.iteration_index += 1;
        }
        out
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.max_iterations - self.iteration_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MutationLibraryIterator {}

impl MutationLibrary {
    pub fn new(entries: Vec<LibraryEntry>) -> Self {
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<LibraryEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn from_ndjson(json: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (line_num, line) in json.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let elem: LibraryEntry = serde_json::from_str(line).map_err(|e| {
                log::error!("Error parsing line {}: {:?}", line_num + 1, line);
                MutScoreError::Value(format!("line {}: {}", line_num + 1, e))
            })?;
            entries.push(elem);
        }
        Ok(Self { entries })
    }

    pub fn from_ndjson_file(path: &path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_ndjson(&json)
    }

    /// `.json` files hold one array; anything else is read as NDJSON.
    pub fn from_path(path: &path::Path) -> Result<Self> {
        if path.extension().and_then(|x| x.to_str()) == Some("json") {
            let json = std::fs::read_to_string(path)?;
            Self::from_json(&json)
        } else {
            Self::from_ndjson_file(path)
        }
    }

    fn get_chunk(&self, chunk_index: usize, chunk_size: usize) -> Option<MutationChunk> {
        let start = chunk_index * chunk_size;
        if start >= self.entries.len() {
            return None;
        }
        let end = (start + chunk_size).min(self.entries.len());
        Some(MutationChunk {
            offset: start,
            entries: self.entries[start..end].to_vec(),
        })
    }

    pub fn as_iterator(self, chunk_size: usize) -> MutationLibraryIterator {
        MutationLibraryIterator::new(self, chunk_size)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
