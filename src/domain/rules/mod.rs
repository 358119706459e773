pub mod classification;

pub use classification::{classify, AttributeClassSpec, ClassTier, ClassificationTables};
