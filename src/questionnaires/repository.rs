use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::psychosocial::domain::CompanyId;
use super::psychosocial::ScoreResult;
use super::trauma::TraumaEvaluation;

/// Persisted outcome of one scored questionnaire submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub company: CompanyId,
    pub result: ScoreResult,
    pub recorded_at: DateTime<Utc>,
}

/// Persisted outcome of one trauma screening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningRecord {
    pub company: CompanyId,
    pub evaluation: TraumaEvaluation,
    pub recorded_at: DateTime<Utc>,
}

/// Storage abstraction so the service can be exercised in isolation.
///
/// The engine writes each record exactly once and never mutates it afterward;
/// response-quota counters and cross-record atomicity belong to the
/// implementer, not to this crate.
pub trait QuestionnaireRepository: Send + Sync {
    fn store_score(&self, record: ScoreRecord) -> Result<(), RepositoryError>;
    fn store_screening(&self, record: ScreeningRecord) -> Result<(), RepositoryError>;
    fn scores_for(&self, company: &CompanyId) -> Result<Vec<ScoreRecord>, RepositoryError>;
    fn screenings_for(&self, company: &CompanyId) -> Result<Vec<ScreeningRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
