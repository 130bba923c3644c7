// Context Classifier
// Decides whether a flagged term is used offensively inside its sentence

use regex::Regex;

/// Sentence-level contexts that mark a term as descriptive rather than
/// offensive: ages and other counts, chapter/level/page references,
/// descriptive mentions of people and communities, educational framing.
const DEFENSIVE_PATTERNS: &[&str] = &[
    r"\btiene[ns]?\s+\d+\s+años?",
    r"\d+\s+años?\s+de\s+edad",
    r"\bcapítulo\s+\d+",
    r"\bepisodio\s+\d+",
    r"\bnivel\s+\d+",
    r"\bgrado\s+\d+",
    r"\bpágina\s+\d+",
    r"\bpersona[s]?\s+(negra|afrodescendiente|indígena|asiática)",
    r"\bcomunidad\s+(negra|indígena|LGBT|LGBTQ)",
    r"\bcultura\s+(negra|indígena|asiática)",
    r"\bhistoria\s+(negra|indígena)",
    r"\bartista[s]?\s+(negro|negra|indígena)",
    r"\blos\s+hombres\s+y\s+las\s+mujeres",
    r"\btodas?\s+las\s+personas?",
    r"\brespeto\s+a",
    r"\bigualdad\s+de",
    r"\bderechos\s+de",
    r"\bmi\s+(amigo|amiga|hermano|hermana)\s+(es|era)",
    r"\bpersona\s+con\s+discapacidad",
    r"\bestudio\s+sobre",
    r"\bdescribe\s+(a\s+)?un[a]?",
];

const DEFENSIVE_KEYWORDS: &[&str] = &[
    "respeto", "dignidad", "igualdad", "derechos", "justicia",
    "diversidad", "inclusión", "comunidad", "cultura", "historia",
    "persona", "mi amigo", "mi amiga", "describe",
];

/// Sentence shapes that signal an attack: comparative judgments, denial of
/// worth, exhortations, expletive intensifiers.
const OFFENSIVE_PATTERNS: &[&str] = &[
    r"\b(son|es|están|está)\s+(mejor|peor|superior|inferior)",
    r"\bno\s+(sirve|vale|merece|puede)",
    r"\bdeberían?\s+(ser|estar|morir|irse)",
    r"\bodio\s+a\s+(los|las)",
    r"\bpinche\s+\w+",
    r"\bmaldito\s+\w+",
    r"\bputo\s+\w+",
];

const OFFENSIVE_KEYWORDS: &[&str] = &[
    "estúpido", "idiota", "tonto", "mierda", "odio", "inferior",
    "no sirve", "inútil", "basura", "pinche", "maldito", "puto",
    "cabrón",
];

/// Outcome of classifying one candidate term in its sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextVerdict {
    pub is_offensive: bool,
    pub confidence: f64,
    pub reason: &'static str,
}

/// Rule-based sentence classifier. All patterns are compiled once at
/// construction, case-insensitive.
pub struct ContextClassifier {
    defensive: Vec<Regex>,
    offensive: Vec<Regex>,
}

impl ContextClassifier {
    pub fn new() -> Self {
        Self {
            defensive: compile_all(DEFENSIVE_PATTERNS),
            offensive: compile_all(OFFENSIVE_PATTERNS),
        }
    }

    /// Classifies a candidate term within its sentence. `word` and
    /// `surrounding` are unused by the current rules; they stay in the
    /// signature so the classifier can be swapped without touching callers.
    pub fn classify(&self, _word: &str, sentence: &str, _surrounding: &str) -> ContextVerdict {
        let sentence = sentence.to_lowercase();

        for pattern in &self.defensive {
            if pattern.is_match(&sentence) {
                return ContextVerdict {
                    is_offensive: false,
                    confidence: 0.95,
                    reason: "Uso descriptivo o neutral detectado",
                };
            }
        }

        for keyword in DEFENSIVE_KEYWORDS {
            if sentence.contains(keyword) {
                return ContextVerdict {
                    is_offensive: false,
                    confidence: 0.85,
                    reason: "Contexto defensivo/educativo",
                };
            }
        }

        let mut score: f64 = 0.0;
        for pattern in &self.offensive {
            if pattern.is_match(&sentence) {
                score += 0.35;
            }
        }
        for keyword in OFFENSIVE_KEYWORDS {
            if sentence.contains(keyword) {
                score += 0.25;
            }
        }

        if score >= 0.6 {
            ContextVerdict {
                is_offensive: true,
                confidence: (0.5 + score).min(0.99),
                reason: "Contexto ofensivo detectado",
            }
        } else if score >= 0.3 {
            ContextVerdict {
                is_offensive: true,
                confidence: 0.65,
                reason: "Contexto potencialmente ofensivo",
            }
        } else {
            // no signal either way still leans offensive at low confidence
            ContextVerdict {
                is_offensive: true,
                confidence: 0.5,
                reason: "Contexto ambiguo",
            }
        }
    }
}

impl Default for ContextClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).expect("valid pattern"))
        .collect()
}
