use regex::Regex;
use std::sync::LazyLock;

// Compiled once per process and shared read-only by every extractor.
// The two rules are mutually exclusive: the trailing literal differs.

/// Matches one RNA record line, capturing the RNA identifier.
pub(crate) static RNA_RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ChemicalSequence (\w+) product_of \w+ [0-9]+ [0-9]+ rnas")
        .expect("RNA record pattern must compile")
});

/// Matches one protein record line, capturing the protein identifier and the
/// identifier of its producer.
pub(crate) static PROTEIN_RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ChemicalSequence (\w+) product_of (\w+) [0-9]+ [0-9]+ proteins")
        .expect("protein record pattern must compile")
});
