// Text Analyzer
// Deterministic engine wiring normalization, lexicon, scanning and scoring

use thiserror::Error;
use tracing::info;

use crate::models::{AnalysisReport, Suggestion};
use crate::services::detection::context_classifier::ContextClassifier;
use crate::services::detection::feedback::{build_feedback, build_stats};
use crate::services::detection::scanner::Scanner;
use crate::services::detection::scoring::Scorer;
use crate::services::lexicon::Lexicon;
use crate::services::text_normalizer::Normalizer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("El texto no puede estar vacío")]
    EmptyInput,
}

/// Offensive and exclusionary language analyzer for Spanish text.
///
/// Every lookup table is built once at construction and never mutated, so a
/// shared instance serves concurrent `analyze` calls without synchronization.
/// Analysis is a pure function of the input text.
pub struct Analyzer {
    normalizer: Normalizer,
    lexicon: Lexicon,
    classifier: ContextClassifier,
    scanner: Scanner,
    scorer: Scorer,
}

impl Analyzer {
    pub fn new() -> Self {
        let normalizer = Normalizer::new();
        let lexicon = Lexicon::build(&normalizer);
        let scorer = Scorer::new(&normalizer);
        info!(
            "[analyzer] engine ready: {} term variants, {} phrase variants",
            lexicon.term_count(),
            lexicon.phrase_count()
        );
        Self {
            normalizer,
            lexicon,
            classifier: ContextClassifier::new(),
            scanner: Scanner::new(),
            scorer,
        }
    }

    /// Analyzes `text` and reports every confirmed issue together with
    /// replacement suggestions, aggregate stats and an overall feedback
    /// message. Empty or whitespace-only input is rejected.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport, AnalyzeError> {
        if text.trim().is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }

        let total_words = text.split_whitespace().count();
        let hits = self
            .scanner
            .scan(text, &self.normalizer, &self.lexicon, &self.classifier);
        let issues: Vec<_> = hits.iter().map(|hit| self.scorer.issue_for(hit)).collect();

        let suggestions: Vec<Suggestion> = issues
            .iter()
            .map(|issue| Suggestion {
                original: issue.original_text.clone(),
                replacement: issue.suggestion.clone(),
                reason: issue.explanation.clone(),
            })
            .collect();

        let stats = build_stats(total_words, &issues);
        let overall_feedback = build_feedback(&issues, &stats);

        Ok(AnalysisReport {
            original_text: text.to_string(),
            issues,
            suggestions,
            stats,
            overall_feedback,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
