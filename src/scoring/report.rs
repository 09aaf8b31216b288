use crate::errors::Result;
use crate::models::MutationResult;
use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use std::time::Instant;

const RECOMMENDATION_SEPARATOR: &str = " | ";

/// One row of a batch report. Failed entries keep their error message
/// instead of a result.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMutation {
    pub gene: String,
    pub mutation: String,
    pub result: Option<MutationResult>,
    pub error: Option<String>,
}

impl ScoredMutation {
    pub fn scored(gene: String, mutation: String, result: MutationResult) -> Self {
        Self {
            gene,
            mutation,
            result: Some(result),
            error: None,
        }
    }

    pub fn failed(gene: String, mutation: String, error: String) -> Self {
        Self {
            gene,
            mutation,
            result: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_some()
    }

    pub fn get_csv_labels() -> [&'static str; 11] {
        [
            "gene",
            "mutation",
            "wild_type",
            "mutant",
            "position",
            "impact",
            "score",
            "confidence",
            "explanation",
            "recommendations",
            "error",
        ]
    }

    pub fn as_csv_record(&self) -> [String; 11] {
        let mut out: [String; 11] = core::array::from_fn(|_| "".to_string());
        out[0] = self.gene.clone();
        out[1] = self.mutation.clone();
        if let Some(res) = &self.result {
            out[2] = res.wild_type().to_string();
            out[3] = res.mutant().to_string();
            out[4] = res.position().to_string();
            out[5] = res.impact().as_str().to_string();
            out[6] = format!("{:.2}", res.score());
            out[7] = format!("{:.3}", res.confidence());
            out[8] = res.explanation().to_string();
            out[9] = res.recommendations().join(RECOMMENDATION_SEPARATOR);
        }
        if let Some(err) = &self.error {
            out[10] = err.clone();
        }
        out
    }
}

/// CSV report kept open across batch chunks.
pub struct ResultWriter {
    writer: Writer<File>,
    rows_written: usize,
}

impl ResultWriter {
    pub fn from_path<P: AsRef<Path>>(out_path: P) -> Result<Self> {
        let mut writer = Writer::from_path(out_path.as_ref())?;
        writer.write_record(ScoredMutation::get_csv_labels())?;
        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    pub fn write_chunk(&mut self, rows: &[ScoredMutation]) -> Result<()> {
        for row in rows {
            self.writer.write_record(&row.as_csv_record())?;
        }
        self.rows_written += rows.len();
        Ok(())
    }

    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.rows_written)
    }
}

pub fn write_results_to_csv<P: AsRef<Path>>(rows: &[ScoredMutation], out_path: P) -> Result<()> {
    let start = Instant::now();
    let mut writer = ResultWriter::from_path(out_path.as_ref())?;
    writer.write_chunk(rows)?;
    writer.finish()?;
    log::info!(
        "Writing took {:?} -> {:?}",
        start.elapsed(),
        out_path.as_ref()
    );
    Ok(())
}
