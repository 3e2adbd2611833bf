//! Scoring pipelines for the two scored NOM-035 questionnaires.
//!
//! Two fully independent variants exist: the 46-item workplace questionnaire
//! (Guía de Referencia II, centers with up to 50 workers) and the 72-item
//! environment questionnaire (Guía de Referencia III). Each carries its own
//! item grouping, category/domain tree, and threshold tables; nothing is
//! shared between them at runtime beyond the machinery in this module.

pub mod catalog;
pub mod classification;
pub mod domain;
pub mod recommendations;
pub mod scoring;
pub mod validation;

#[cfg(test)]
mod tests;

pub use classification::classify;
pub use domain::{
    BucketScore, CompanyId, QuestionnaireKind, QuestionnaireResponses, QuestionnaireSubmission,
    RiskLevel, ScoreResult,
};
pub use recommendations::recommendation;
pub use scoring::ScoringError;
pub use validation::{check_complete, ValidationError};

use scoring::score_responses;

/// Score a 46-item workplace questionnaire submission.
///
/// The caller is expected to run [`check_complete`] first; the aggregator
/// still refuses to proceed when an always-mandatory item is unanswered.
pub fn score_workplace(responses: &QuestionnaireResponses) -> Result<ScoreResult, ScoringError> {
    score_responses(catalog::workplace::definition(), responses)
}

/// Score a 72-item environment questionnaire submission.
pub fn score_environment(responses: &QuestionnaireResponses) -> Result<ScoreResult, ScoringError> {
    score_responses(catalog::environment::definition(), responses)
}
