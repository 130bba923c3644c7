// Feedback Builder
// Aggregates issues into stats and the user-facing summary message

use crate::models::{AnalysisStats, Category, CategoryCounts, Issue, Severity};

const CLEAN_FEEDBACK: &str = "✅ ¡Excelente! Tu texto utiliza un lenguaje inclusivo y \
                              respetuoso. No se detectaron términos problemáticos.";

pub fn build_stats(total_words: usize, issues: &[Issue]) -> AnalysisStats {
    let mut categories = CategoryCounts::default();
    for issue in issues {
        categories.increment(issue.r#type);
    }

    let weighted: u32 = issues.iter().map(|i| severity_weight(i.severity)).sum();
    // halves round to even: 3 points over 8 words is 62.5, reported as 62
    let inclusive_score = (100.0 - (weighted as f64 / total_words.max(1) as f64) * 100.0)
        .round_ties_even()
        .clamp(0.0, 100.0) as u32;

    AnalysisStats {
        total_words,
        issues_found: issues.len(),
        inclusive_score,
        categories,
    }
}

fn severity_weight(severity: Severity) -> u32 {
    match severity {
        Severity::High => 3,
        Severity::Medium => 2,
        Severity::Low => 1,
    }
}

/// Builds the overall feedback message: a severity-aware headline, a
/// category breakdown and the score with a closing remark. A clean text
/// gets only the congratulation line.
pub fn build_feedback(issues: &[Issue], stats: &AnalysisStats) -> String {
    if issues.is_empty() {
        return CLEAN_FEEDBACK.to_string();
    }

    let mut feedback = headline(issues);

    let mut parts: Vec<String> = Vec::new();
    for category in Category::ORDER {
        let count = stats.categories.get(category);
        if count > 0 {
            parts.push(format!(
                "{} {}{}",
                count,
                category_label(category),
                plural(count)
            ));
        }
    }
    if !parts.is_empty() {
        feedback.push_str(&format!("\n\n📊 Desglose: {}.", parts.join(", ")));
    }

    feedback.push_str(&format!(
        "\n\n💯 Puntuación de inclusividad: {}/100",
        stats.inclusive_score
    ));
    feedback.push_str(if stats.inclusive_score >= 80 {
        " - ¡Buen trabajo! Con pequeños ajustes alcanzarás la excelencia."
    } else if stats.inclusive_score >= 60 {
        " - Hay margen de mejora. Revisa las sugerencias."
    } else if stats.inclusive_score >= 40 {
        " - Se necesitan cambios significativos."
    } else {
        " - El texto requiere una revisión profunda."
    });

    feedback
}

fn headline(issues: &[Issue]) -> String {
    if issues.len() == 1 {
        return if issues[0].severity == Severity::High {
            "🚨 Encontré 1 término de alta severidad que resulta claramente \
             ofensivo. Te sugiero revisarlo."
                .to_string()
        } else {
            "⚠️ Encontré 1 término que podría mejorarse para ser más inclusivo.".to_string()
        };
    }

    let high = issues
        .iter()
        .filter(|i| i.severity == Severity::High)
        .count();
    let medium = issues
        .iter()
        .filter(|i| i.severity == Severity::Medium)
        .count();

    if high > 0 {
        let mut message = format!(
            "🚨 Detecté {} término{} de alta severidad que {} claramente ofensivo{}.",
            high,
            plural(high),
            if high > 1 { "resultan" } else { "resulta" },
            plural(high),
        );
        if medium > 0 {
            message.push_str(&format!(" También {} de severidad media.", medium));
        }
        message
    } else if medium >= 3 {
        format!(
            "⚠️ Detecté {} términos que podrían resultar ofensivos o excluyentes. \
             Te recomiendo revisar las sugerencias.",
            issues.len()
        )
    } else {
        format!(
            "⚠️ Detecté {} términos que podrían mejorarse para un lenguaje más inclusivo.",
            issues.len()
        )
    }
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Sexist => "sexista",
        Category::Ableist => "capacitista",
        Category::Ethnic => "étnico",
        Category::Offensive => "ofensivo",
    }
}

fn plural(count: usize) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(category: Category, severity: Severity) -> Issue {
        Issue {
            r#type: category,
            original_text: "palabra".to_string(),
            suggestion: "otra".to_string(),
            severity,
            explanation: "explicación".to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn test_clean_text_feedback() {
        let stats = build_stats(10, &[]);
        assert_eq!(stats.inclusive_score, 100);
        assert_eq!(stats.issues_found, 0);
        let feedback = build_feedback(&[], &stats);
        assert!(feedback.starts_with("✅ ¡Excelente!"));
        assert!(!feedback.contains("Desglose"));
        assert!(!feedback.contains("Puntuación"));
    }

    #[test]
    fn test_single_high_issue_headline() {
        let issues = vec![issue(Category::Offensive, Severity::High)];
        let stats = build_stats(3, &issues);
        let feedback = build_feedback(&issues, &stats);
        assert!(feedback.starts_with(
            "🚨 Encontré 1 término de alta severidad que resulta claramente ofensivo."
        ));
        assert!(feedback.contains("📊 Desglose: 1 ofensivo."));
        assert!(feedback.contains("💯 Puntuación de inclusividad: 0/100"));
        assert!(feedback.ends_with("El texto requiere una revisión profunda."));
    }

    #[test]
    fn test_single_medium_issue_headline() {
        let issues = vec![issue(Category::Ethnic, Severity::Medium)];
        let stats = build_stats(50, &issues);
        let feedback = build_feedback(&issues, &stats);
        assert!(feedback
            .starts_with("⚠️ Encontré 1 término que podría mejorarse para ser más inclusivo."));
        assert!(feedback.contains("📊 Desglose: 1 étnico."));
    }

    #[test]
    fn test_multiple_high_pluralizes() {
        let issues = vec![
            issue(Category::Offensive, Severity::High),
            issue(Category::Sexist, Severity::High),
            issue(Category::Ableist, Severity::Medium),
        ];
        let stats = build_stats(100, &issues);
        let feedback = build_feedback(&issues, &stats);
        assert!(feedback.starts_with(
            "🚨 Detecté 2 términos de alta severidad que resultan claramente ofensivos. \
             También 1 de severidad media."
        ));
        assert!(feedback.contains("📊 Desglose: 1 sexista, 1 capacitista, 1 ofensivo."));
    }

    #[test]
    fn test_three_medium_issues_headline() {
        let issues = vec![
            issue(Category::Ethnic, Severity::Medium),
            issue(Category::Ethnic, Severity::Medium),
            issue(Category::Ableist, Severity::Medium),
        ];
        let stats = build_stats(100, &issues);
        let feedback = build_feedback(&issues, &stats);
        assert!(feedback.starts_with(
            "⚠️ Detecté 3 términos que podrían resultar ofensivos o excluyentes."
        ));
        assert!(feedback.contains("📊 Desglose: 1 capacitista, 2 étnicos."));
    }

    #[test]
    fn test_two_medium_issues_headline() {
        let issues = vec![
            issue(Category::Sexist, Severity::Medium),
            issue(Category::Sexist, Severity::Medium),
        ];
        let stats = build_stats(100, &issues);
        let feedback = build_feedback(&issues, &stats);
        assert!(feedback.starts_with(
            "⚠️ Detecté 2 términos que podrían mejorarse para un lenguaje más inclusivo."
        ));
        assert!(feedback.contains("📊 Desglose: 2 sexistas."));
    }

    #[test]
    fn test_score_formula() {
        let issues = vec![
            issue(Category::Offensive, Severity::High),
            issue(Category::Offensive, Severity::Medium),
        ];
        // 5 weighted points over 10 words
        assert_eq!(build_stats(10, &issues).inclusive_score, 50);
        // heavy issues on a tiny text floor at zero
        assert_eq!(build_stats(1, &issues).inclusive_score, 0);
        // zero words never divides by zero
        assert_eq!(build_stats(0, &[]).inclusive_score, 100);
    }

    #[test]
    fn test_score_half_points_round_to_even() {
        let issues = vec![issue(Category::Offensive, Severity::High)];
        // 3 weighted points over 8 words: 62.5 rounds down to 62
        assert_eq!(build_stats(8, &issues).inclusive_score, 62);
        // 3 over 24 words: 87.5 rounds up to 88
        assert_eq!(build_stats(24, &issues).inclusive_score, 88);
    }

    #[test]
    fn test_score_bands() {
        let issues = vec![issue(Category::Offensive, Severity::Low)];
        let mut stats = build_stats(100, &issues);
        assert_eq!(stats.inclusive_score, 99);
        let feedback = build_feedback(&issues, &stats);
        assert!(feedback.contains("¡Buen trabajo!"));

        stats.inclusive_score = 65;
        assert!(build_feedback(&issues, &stats).contains("Hay margen de mejora."));
        stats.inclusive_score = 45;
        assert!(build_feedback(&issues, &stats).contains("cambios significativos"));
        stats.inclusive_score = 10;
        assert!(build_feedback(&issues, &stats).contains("revisión profunda"));
    }

    #[test]
    fn test_category_counts_accumulate() {
        let issues = vec![
            issue(Category::Sexist, Severity::Medium),
            issue(Category::Sexist, Severity::High),
            issue(Category::Offensive, Severity::High),
        ];
        let stats = build_stats(20, &issues);
        assert_eq!(stats.categories.sexist, 2);
        assert_eq!(stats.categories.offensive, 1);
        assert_eq!(stats.categories.ableist, 0);
        assert_eq!(stats.categories.get(Category::Sexist), 2);
        assert_eq!(stats.categories.get(Category::Ethnic), 0);
        assert_eq!(stats.issues_found, 3);
    }
}
