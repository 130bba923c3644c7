// Detection Module
// Offensive language detection organized into specialized submodules:
// - scanner: Walks whitespace tokens against the lexicon with context gating
// - context_classifier: Judges whether a flagged term is used offensively
// - scoring: Turns accepted matches into reported issues
// - feedback: Aggregates issues into stats and the overall summary message

pub mod scanner;
pub mod context_classifier;
pub mod scoring;
pub mod feedback;

// Re-export commonly used types
pub use scanner::{ContextWindow, Scanner, TermMatch};
pub use context_classifier::{ContextClassifier, ContextVerdict};
pub use scoring::Scorer;
pub use feedback::{build_feedback, build_stats};
