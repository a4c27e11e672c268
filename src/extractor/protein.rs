use crate::extractor::patterns::PROTEIN_RECORD;
use crate::source::RecordSource;
use crate::types::{ProteinId, ProteinRecord};
use anyhow::Result;
use std::collections::{HashMap, HashSet};

/// Protein records declared in a chemical-sequence record file, with the
/// collections derived from them.
///
/// All three fields are computed at construction from the same matched
/// sequence and are immutable afterwards; `count` and `unique_elements` are
/// always recomputable from `elements`.
#[derive(Debug, Clone, Default)]
pub struct Proteins {
    /// (protein, producer) pairs in the order their records appear in the
    /// source text.
    pub elements: Vec<ProteinRecord>,
    /// Occurrences of each protein id across `elements`. The producer plays
    /// no part here: two records sharing a protein id but naming different
    /// producers increment the same counter.
    pub count: HashMap<ProteinId, usize>,
    /// Distinct protein ids seen in `elements`.
    pub unique_elements: HashSet<ProteinId>,
}

impl Proteins {
    /// Reads the source once and extracts every protein record from it.
    ///
    /// Same skipping rules as [`Rnas::load`](crate::Rnas::load): non-matching
    /// lines are dropped silently, no matches at all yields empty collections.
    pub fn load(source: &impl RecordSource) -> Result<Self> {
        Ok(Self::from_text(&source.read_text()?))
    }

    pub fn from_text(text: &str) -> Self {
        let elements: Vec<ProteinRecord> = PROTEIN_RECORD
            .captures_iter(text)
            .map(|caps| ProteinRecord {
                protein: caps[1].to_string(),
                producer: caps[2].to_string(),
            })
            .collect();

        let mut count = HashMap::new();
        for record in &elements {
            *count.entry(record.protein.clone()).or_insert(0) += 1;
        }
        let unique_elements = count.keys().cloned().collect();

        Self {
            elements,
            count,
            unique_elements,
        }
    }
}
