use crate::extractor::{Proteins, Rnas};
use crate::types::{ProteinId, ProteinRecord, RnaId};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::{Deserialize as DeserializeTrait, Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const EXPORT_VERSION: &str = "1.0";

/// Root structure for one extraction run, handed to downstream harness
/// components as JSON.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractionExport {
    pub version: String,
    #[serde(serialize_with = "serialize_datetime", deserialize_with = "deserialize_datetime")]
    pub created_at: DateTime<Utc>,
    pub tool_version: String,

    pub rnas: Vec<RnaId>,
    pub proteins: ProteinExport,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProteinExport {
    pub elements: Vec<ProteinRecord>,
    pub count: HashMap<ProteinId, usize>,
    /// Sorted so the serialized form is stable across runs.
    pub unique_elements: Vec<ProteinId>,
}

impl ExtractionExport {
    pub fn new(rnas: &Rnas, proteins: &Proteins) -> Self {
        let mut unique_elements: Vec<ProteinId> =
            proteins.unique_elements.iter().cloned().collect();
        unique_elements.sort();

        ExtractionExport {
            version: EXPORT_VERSION.to_string(),
            created_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            rnas: rnas.elements.clone(),
            proteins: ProteinExport {
                elements: proteins.elements.clone(),
                count: proteins.count.clone(),
                unique_elements,
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize extraction export")
    }
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(D::Error::custom)
}
