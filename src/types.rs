use serde::{Deserialize, Serialize};

/// Identifier token for an RNA-type record.
pub type RnaId = String;

/// Identifier token for a protein-type record.
pub type ProteinId = String;

/// Identifier token for the entity a protein is a product of.
pub type ProducerId = String;

/// One protein record: the protein identifier and the identifier of the
/// entity that produces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinRecord {
    pub protein: ProteinId,
    pub producer: ProducerId,
}
