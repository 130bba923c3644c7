// Inclusivo Core Services
// Normalization, lexicon expansion and the analysis engine

pub mod text_normalizer;
pub mod lexicon;
pub mod detection;
pub mod analyzer;

pub use text_normalizer::*;
pub use lexicon::*;
pub use analyzer::*;

// Re-export detection module types
pub use detection::{
    build_feedback,
    build_stats,
    ContextClassifier,
    ContextVerdict,
    ContextWindow,
    Scanner,
    Scorer,
    TermMatch,
};
