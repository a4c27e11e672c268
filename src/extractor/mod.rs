pub(crate) mod patterns;
pub mod protein;
pub mod rna;

pub use protein::Proteins;
pub use rna::Rnas;
