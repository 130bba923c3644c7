// Analysis Data Models
// Report types shared by the analyzer engine and its callers

use serde::{Deserialize, Serialize};

// ============ Category & Severity ============

/// Detection category.
///
/// `ORDER` is the scan order and is observable behavior: when a token
/// matches entries in more than one category, the first in this order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sexist,
    Ableist,
    Ethnic,
    Offensive,
}

impl Category {
    /// Fixed category scan order.
    pub const ORDER: [Category; 4] = [
        Category::Sexist,
        Category::Ableist,
        Category::Ethnic,
        Category::Offensive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sexist => "sexist",
            Category::Ableist => "ableist",
            Category::Ethnic => "ethnic",
            Category::Offensive => "offensive",
        }
    }
}

/// Severity bucket assigned to a confirmed issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

// ============ Issues & Suggestions ============

/// A single confirmed issue tied to one token of the input.
/// Built once by the scorer; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub r#type: Category,
    pub original_text: String,
    pub suggestion: String,
    pub severity: Severity,
    pub explanation: String,
    pub confidence: f64,
}

/// Replacement entry derived one-to-one from an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub original: String,
    pub replacement: String,
    pub reason: String,
}

// ============ Statistics & Report ============

/// Per-category issue counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub sexist: usize,
    pub ableist: usize,
    pub ethnic: usize,
    pub offensive: usize,
}

impl CategoryCounts {
    pub fn increment(&mut self, category: Category) {
        match category {
            Category::Sexist => self.sexist += 1,
            Category::Ableist => self.ableist += 1,
            Category::Ethnic => self.ethnic += 1,
            Category::Offensive => self.offensive += 1,
        }
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Sexist => self.sexist,
            Category::Ableist => self.ableist,
            Category::Ethnic => self.ethnic,
            Category::Offensive => self.offensive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub total_words: usize,
    pub issues_found: usize,
    /// 0-100; 100 means no issues were found.
    pub inclusive_score: u32,
    pub categories: CategoryCounts,
}

/// Full result of one `analyze` call. Not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub original_text: String,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
    pub stats: AnalysisStats,
    pub overall_feedback: String,
}
