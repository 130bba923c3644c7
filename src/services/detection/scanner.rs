// Token Scanner
// Walks whitespace tokens against the lexicon with context gating

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::models::Category;
use crate::services::detection::context_classifier::{ContextClassifier, ContextVerdict};
use crate::services::lexicon::Lexicon;
use crate::services::text_normalizer::Normalizer;

/// Sentence shapes where a number legitimizes the flagged word (ages,
/// chapters, levels, pages).
const NUMERIC_CONTEXTS: &[&str] = &[
    r"\b\d+\s*(años|meses|días|horas)",
    r"\bcapítulo\s+\d+",
    r"\bnivel\s+\d+",
    r"\bpágina\s+\d+",
];

/// One accepted lexicon hit for a token.
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatch {
    pub category: Category,
    /// Matched lexicon entry, in normalized form.
    pub term: String,
    /// The token as written in the input.
    pub original: String,
    pub confidence: f64,
    pub context: Option<ContextVerdict>,
}

/// Sentence plus ±150 characters around one token.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextWindow {
    pub sentence: String,
    pub surrounding: String,
}

pub struct Scanner {
    digit_token: Regex,
    numeric_contexts: Vec<Regex>,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            digit_token: Regex::new(r"^\d+$").expect("valid pattern"),
            numeric_contexts: NUMERIC_CONTEXTS
                .iter()
                .map(|p| Regex::new(&format!("(?i){}", p)).expect("valid pattern"))
                .collect(),
        }
    }

    /// Scans every whitespace token of `text` against the lexicon.
    ///
    /// Per token: normalize, drop normalized forms under 3 characters, drop
    /// numeric contexts, then resolve against categories in
    /// `Category::ORDER`. The first matching entry wins and later categories
    /// are never consulted for that token, including when a context-required
    /// match is discarded as descriptive.
    pub fn scan(
        &self,
        text: &str,
        normalizer: &Normalizer,
        lexicon: &Lexicon,
        classifier: &ContextClassifier,
    ) -> Vec<TermMatch> {
        let mut matches = Vec::new();
        // tokens repeat; normalize each distinct spelling once per call
        let mut cache: HashMap<&str, String> = HashMap::new();

        let tokens = tokens_with_offsets(text);
        for &(offset, token) in &tokens {
            let normalized: &str = cache
                .entry(token)
                .or_insert_with(|| normalizer.normalize(token));
            if normalized.chars().count() < 3 {
                continue;
            }

            let window = extract_context(text, offset, offset + token.len());
            if self.is_numeric_context(token, &window.sentence) {
                continue;
            }

            if let Some(hit) = resolve_token(normalized, token, &window, lexicon, classifier) {
                matches.push(hit);
            }
        }

        debug!(
            "[scanner] {} tokens scanned, {} accepted",
            tokens.len(),
            matches.len()
        );
        matches
    }

    fn is_numeric_context(&self, token: &str, sentence: &str) -> bool {
        self.digit_token.is_match(token)
            || self.numeric_contexts.iter().any(|re| re.is_match(sentence))
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves one normalized token against the lexicon.
fn resolve_token(
    normalized: &str,
    original: &str,
    window: &ContextWindow,
    lexicon: &Lexicon,
    classifier: &ContextClassifier,
) -> Option<TermMatch> {
    for entry in lexicon.categories() {
        for term in &entry.terms {
            if !either_contains(normalized, term) {
                continue;
            }
            if entry.context_required {
                let verdict =
                    classifier.classify(original, &window.sentence, &window.surrounding);
                if !verdict.is_offensive && verdict.confidence >= 0.80 {
                    // descriptive use; the token is not an issue
                    return None;
                }
                return Some(TermMatch {
                    category: entry.category,
                    term: term.clone(),
                    original: original.to_string(),
                    confidence: verdict.confidence,
                    context: Some(verdict),
                });
            }
            return Some(TermMatch {
                category: entry.category,
                term: term.clone(),
                original: original.to_string(),
                confidence: 0.95,
                context: None,
            });
        }

        // phrases are only consulted when no term of the category matched,
        // and are accepted without context classification
        for phrase in &entry.phrases {
            if either_contains(normalized, phrase) {
                return Some(TermMatch {
                    category: entry.category,
                    term: phrase.clone(),
                    original: original.to_string(),
                    confidence: 0.90,
                    context: None,
                });
            }
        }
    }
    None
}

/// Exact equality or either string containing the other.
fn either_contains(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Whitespace tokens with their byte offsets in `text`.
fn tokens_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push((s, &text[s..idx]));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        tokens.push((s, &text[s..]));
    }
    tokens
}

/// Extracts the sentence enclosing `[start, end)` plus ±150 characters.
/// The sentence opens after the previous `. ! ?` and closes at the first
/// `. ! ? \n` after the token, terminator included, then is trimmed.
fn extract_context(text: &str, start: usize, end: usize) -> ContextWindow {
    let before = &text[..start];
    let after = &text[end..];

    let sentence_start = before
        .rfind(|c: char| matches!(c, '.' | '!' | '?'))
        .map(|idx| idx + 1)
        .unwrap_or(0);
    let sentence_end = after
        .find(|c: char| matches!(c, '.' | '!' | '?' | '\n'))
        .map(|idx| end + idx + 1)
        .unwrap_or(text.len());
    let sentence = text[sentence_start..sentence_end].trim().to_string();

    let surrounding_start = back_chars(text, start, 150);
    let surrounding_end = forward_chars(text, end, 150);
    let surrounding = text[surrounding_start..surrounding_end].to_string();

    ContextWindow {
        sentence,
        surrounding,
    }
}

fn back_chars(text: &str, from: usize, count: usize) -> usize {
    let mut idx = from;
    for _ in 0..count {
        match text[..idx].chars().next_back() {
            Some(ch) => idx -= ch.len_utf8(),
            None => break,
        }
    }
    idx
}

fn forward_chars(text: &str, from: usize, count: usize) -> usize {
    let mut idx = from;
    let mut chars = text[from..].chars();
    for _ in 0..count {
        match chars.next() {
            Some(ch) => idx += ch.len_utf8(),
            None => break,
        }
    }
    idx
}
