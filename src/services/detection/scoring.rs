// Issue Scoring
// Turns an accepted term match into a reported issue

use crate::models::{Category, Issue, Severity};
use crate::services::detection::context_classifier::ContextVerdict;
use crate::services::detection::scanner::TermMatch;
use crate::services::text_normalizer::Normalizer;

/// Replacement advice for well-known terms, keyed by the term as curated.
/// Keys are normalized once at `Scorer` construction.
const SUGGESTIONS: &[(&str, &str)] = &[
    ("puta", "persona / trabajadora sexual (si aplica contexto)"),
    ("zorra", "persona astuta / inteligente"),
    ("loco", "persona con perspectiva diferente / peculiar"),
    ("retrasado", "persona con discapacidad / neurodivergente"),
    ("negro", "persona afrodescendiente / persona negra (descriptivo)"),
    ("indio", "persona indígena / de pueblos originarios"),
    ("gordo", "persona con cuerpo grande / evitar juicios"),
    ("viejo", "persona mayor / adulta mayor"),
    ("pendejo", "persona distraída / despistada"),
    ("losalumnos", "el alumnado / estudiantes / las y los alumnos"),
    ("gay", "persona homosexual / gay (descriptivo neutral)"),
    ("maricón", "persona / evitar término despectivo"),
];

/// Builds `Issue`s from scanner matches. Holds the suggestion table with
/// pre-normalized keys so lookups compare normalized forms directly.
pub struct Scorer {
    suggestions: Vec<(String, &'static str)>,
}

impl Scorer {
    pub fn new(normalizer: &Normalizer) -> Self {
        Self {
            suggestions: SUGGESTIONS
                .iter()
                .map(|&(key, value)| (normalizer.normalize(key), value))
                .collect(),
        }
    }

    pub fn issue_for(&self, hit: &TermMatch) -> Issue {
        Issue {
            r#type: hit.category,
            original_text: hit.original.clone(),
            suggestion: self.suggestion_for(&hit.term, hit.category).to_string(),
            severity: severity_for(hit.category, hit.confidence),
            explanation: explanation_for(hit.category, hit.context.as_ref()),
            confidence: round2(hit.confidence),
        }
    }

    /// Scanner terms arrive already normalized, so the table lookup is a
    /// plain equality scan.
    fn suggestion_for(&self, term: &str, category: Category) -> &'static str {
        self.suggestions
            .iter()
            .find(|(key, _)| key == term)
            .map(|&(_, value)| value)
            .unwrap_or_else(|| fallback_suggestion(category))
    }
}

fn fallback_suggestion(category: Category) -> &'static str {
    match category {
        Category::Sexist => "usar lenguaje inclusivo que respete todas las identidades",
        Category::Ableist => "usar lenguaje que respete la neurodiversidad",
        Category::Ethnic => "usar lenguaje que respete la diversidad étnica",
        Category::Offensive => "reformular de manera respetuosa",
    }
}

fn base_explanation(category: Category) -> &'static str {
    match category {
        Category::Sexist => {
            "Este término perpetúa estereotipos de género o excluye identidades. \
             El lenguaje inclusivo reconoce la diversidad más allá del binario \
             masculino-femenino."
        }
        Category::Ableist => {
            "Este término estigmatiza condiciones de salud mental o capacidades \
             diferentes. Todas las personas merecen dignidad independientemente \
             de sus capacidades."
        }
        Category::Ethnic => {
            "Este término puede perpetuar estereotipos raciales o étnicos. El \
             respeto a la diversidad es fundamental. (Nota: algunos términos son \
             descriptivos en contextos apropiados)"
        }
        Category::Offensive => {
            "Este término es despectivo o insulta. Un diálogo constructivo evita \
             descalificaciones personales y promueve el respeto mutuo."
        }
    }
}

fn explanation_for(category: Category, context: Option<&ContextVerdict>) -> String {
    let mut explanation = base_explanation(category).to_string();
    if let Some(verdict) = context {
        explanation.push_str(&format!(" [Análisis: {}]", verdict.reason));
    }
    explanation
}

/// Severity buckets from the category's base weight averaged with the
/// match confidence.
fn severity_for(category: Category, confidence: f64) -> Severity {
    let base = match category {
        Category::Sexist => 0.75,
        Category::Ableist => 0.70,
        Category::Ethnic => 0.85,
        Category::Offensive => 0.65,
    };
    let score = (base + confidence) / 2.0;
    if score >= 0.80 {
        Severity::High
    } else if score >= 0.55 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(category: Category, term: &str, confidence: f64) -> TermMatch {
        TermMatch {
            category,
            term: term.to_string(),
            original: term.to_string(),
            confidence,
            context: None,
        }
    }

    #[test]
    fn test_severity_buckets() {
        // confidence 0.95 in offensive lands exactly on the high edge
        assert_eq!(severity_for(Category::Offensive, 0.95), Severity::High);
        assert_eq!(severity_for(Category::Offensive, 0.5), Severity::Medium);
        assert_eq!(severity_for(Category::Ethnic, 0.5), Severity::Medium);
        assert_eq!(severity_for(Category::Ethnic, 0.9), Severity::High);
        assert_eq!(severity_for(Category::Ableist, 0.3), Severity::Low);
    }

    #[test]
    fn test_known_term_gets_curated_suggestion() {
        let normalizer = Normalizer::new();
        let scorer = Scorer::new(&normalizer);
        let issue = scorer.issue_for(&hit(Category::Offensive, "pendejo", 0.95));
        assert_eq!(issue.suggestion, "persona distraída / despistada");
        assert_eq!(issue.severity, Severity::High);
        assert_eq!(issue.confidence, 0.95);
    }

    #[test]
    fn test_unknown_term_falls_back_to_category_advice() {
        let normalizer = Normalizer::new();
        let scorer = Scorer::new(&normalizer);
        let issue = scorer.issue_for(&hit(Category::Ethnic, "prieto", 0.5));
        assert_eq!(issue.suggestion, "usar lenguaje que respete la diversidad étnica");
    }

    #[test]
    fn test_suggestion_keys_are_normalized() {
        let normalizer = Normalizer::new();
        let scorer = Scorer::new(&normalizer);
        // curated keys "maricón" and "losalumnos" fold like scanner terms do
        let issue = scorer.issue_for(&hit(Category::Sexist, "maricon", 0.95));
        assert_eq!(issue.suggestion, "persona / evitar término despectivo");
        let issue = scorer.issue_for(&hit(Category::Sexist, "iosaiumnos", 0.90));
        assert_eq!(issue.suggestion, "el alumnado / estudiantes / las y los alumnos");
    }

    #[test]
    fn test_explanation_carries_classifier_reason() {
        let normalizer = Normalizer::new();
        let scorer = Scorer::new(&normalizer);
        let mut with_context = hit(Category::Ethnic, "negro", 0.5);
        with_context.context = Some(ContextVerdict {
            is_offensive: true,
            confidence: 0.5,
            reason: "Contexto ambiguo",
        });
        let issue = scorer.issue_for(&with_context);
        assert!(issue.explanation.ends_with("[Análisis: Contexto ambiguo]"));

        let issue = scorer.issue_for(&hit(Category::Ethnic, "negro", 0.95));
        assert!(!issue.explanation.contains("[Análisis:"));
    }
}
