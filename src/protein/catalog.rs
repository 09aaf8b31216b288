use super::fasta::parse_fasta;
use super::models::GeneRecord;
use crate::errors::{
    MutScoreError,
    Result,
};
use crate::models::MutationRequest;
use crate::notation::mutation_notation::MutationParser;
use log::info;
use std::path::Path;

const DEMO_CATALOG: &str = include_str!("../../data/demo_genes.json");

#[derive(Debug, Clone, Default)]
pub struct GeneCatalog {
    pub genes: Vec<GeneRecord>,
}

impl GeneCatalog {
    pub fn new(genes: Vec<GeneRecord>) -> Result<Self> {
        let genes = genes
            .into_iter()
            .map(|x| x.normalized())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { genes })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let genes: Vec<GeneRecord> = serde_json::from_str(json)?;
        Self::new(genes)
    }

    pub fn from_fasta(fasta: &str) -> Result<Self> {
        Self::new(parse_fasta(fasta)?)
    }

    /// Loads FASTA for `.fa`/`.fasta`/`.faa`/`.fna` files and JSON otherwise.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let is_fasta = matches!(
            path.extension().and_then(|x| x.to_str()),
            Some("fa" | "fasta" | "faa" | "fna")
        );
        let out = if is_fasta {
            Self::from_fasta(&contents)?
        } else {
            Self::from_json(&contents)?
        };
        info!("Loaded {} genes from {:?}", out.len(), path);
        Ok(out)
    }

    /// The bundled demo dataset.
    pub fn demo() -> Result<Self> {
        Self::from_json(DEMO_CATALOG)
    }

    pub fn get(&self, id: &str) -> Result<&GeneRecord> {
        self.genes
            .iter()
            .find(|x| x.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| MutScoreError::UnknownGene(id.to_string()))
    }

    /// Looks up `gene` and checks `token` against its sequence.
    pub fn resolve(
        &self,
        parser: &MutationParser,
        gene: &str,
        token: &str,
    ) -> Result<(&GeneRecord, MutationRequest)> {
        let record = self.get(gene)?;
        let request = parser.parse(token)?.validate_against(&record.sequence)?;
        Ok((record, request))
    }

    /// Every `(gene id, mutation)` pair suggested by the catalog.
    pub fn suggested_candidates(&self) -> Vec<(String, String)> {
        self.genes
            .iter()
            .flat_map(|g| {
                g.suggested_mutations
                    .iter()
                    .map(move |m| (g.id.clone(), m.clone()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = GeneCatalog::demo().unwrap();
        assert!(catalog.len() >= 3);
        let dreb = catalog.get("dreb1a").unwrap();
        assert!(dreb.sequence.starts_with("ATGGCGTCAAGC"));
        assert!(dreb.len() > 278);
    }

    #[test]
    fn test_demo_suggestions_resolve() {
        let catalog = GeneCatalog::demo().unwrap();
        let parser = MutationParser::new().unwrap();
        let candidates = catalog.suggested_candidates();
        assert!(!candidates.is_empty());
        for (gene, mutation) in candidates {
            let res = catalog.resolve(&parser, &gene, &mutation);
            assert!(res.is_ok(), "{} {} -> {:?}", gene, mutation, res);
        }
    }

    #[test]
    fn test_unknown_gene() {
        let catalog = GeneCatalog::demo().unwrap();
        assert!(matches!(
            catalog.get("NOPE"),
            Err(MutScoreError::UnknownGene(_))
        ));
    }

    #[test]
    fn test_from_json_normalizes() {
        let json = r#"[{"id": "G1", "sequence": "acg t\nacg"}]"#;
        let catalog = GeneCatalog::from_json(json).unwrap();
        assert_eq!(catalog.genes[0].sequence.as_ref(), "ACGTACG");
        assert_eq!(catalog.genes[0].name, "");

        let json = r#"[{"id": "G1", "sequence": "  "}]"#;
        assert!(matches!(
            GeneCatalog::from_json(json),
            Err(MutScoreError::Value(_))
        ));
    }

    #[test]
    fn test_from_fasta() {
        let catalog = GeneCatalog::from_fasta(">G1 first\nMKT\n>G2\nAYI\n").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("G2").unwrap().sequence.as_ref(), "AYI");
    }
}
