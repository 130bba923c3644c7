pub mod models;
pub mod services;

pub use models::{
    AnalysisReport, AnalysisStats, Category, CategoryCounts, Issue, Severity, Suggestion,
};
pub use services::analyzer::{AnalyzeError, Analyzer};
