use crate::extractor::patterns::RNA_RECORD;
use crate::source::RecordSource;
use crate::types::RnaId;
use anyhow::Result;

/// RNA identifiers declared in a chemical-sequence record file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rnas {
    /// Ids in the order their records appear in the source text.
    /// Duplicates are preserved.
    pub elements: Vec<RnaId>,
}

impl Rnas {
    /// Reads the source once and extracts every RNA record from it.
    ///
    /// Lines that do not fit the record shape are skipped without comment;
    /// a source with no matching line yields empty `elements`.
    pub fn load(source: &impl RecordSource) -> Result<Self> {
        Ok(Self::from_text(&source.read_text()?))
    }

    pub fn from_text(text: &str) -> Self {
        let elements = RNA_RECORD
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect();
        Self { elements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matching_lines_yields_empty_sequence() {
        let rnas = Rnas::from_text("some unrelated text\nChemicalSequence half a line\n");
        assert!(rnas.elements.is_empty());
    }

    #[test]
    fn test_single_record() {
        let rnas = Rnas::from_text("ChemicalSequence rna1 product_of gene1 0 10 rnas\n");
        assert_eq!(rnas.elements, vec!["rna1"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let text = "\
ChemicalSequence rna_b product_of gene1 0 10 rnas
ChemicalSequence rna_a product_of gene2 5 20 rnas
ChemicalSequence rna_b product_of gene3 0 10 rnas
";
        let rnas = Rnas::from_text(text);
        assert_eq!(rnas.elements, vec!["rna_b", "rna_a", "rna_b"]);
    }

    #[test]
    fn test_protein_records_are_not_picked_up() {
        let text = "\
ChemicalSequence p1 product_of gene1 0 10 proteins
ChemicalSequence rna1 product_of gene1 0 10 rnas
";
        let rnas = Rnas::from_text(text);
        assert_eq!(rnas.elements, vec!["rna1"]);
    }

    #[test]
    fn test_non_word_identifier_is_skipped() {
        let rnas = Rnas::from_text("ChemicalSequence rna-1 product_of gene1 0 10 rnas\n");
        assert!(rnas.elements.is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "ChemicalSequence rna1 product_of gene1 0 10 rnas\n";
        assert_eq!(Rnas::from_text(text), Rnas::from_text(text));
    }
}
