use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::psychosocial::catalog::{self, QuestionnaireDefinition};
use super::psychosocial::domain::CompanyId;
use super::psychosocial::scoring::score_responses;
use super::psychosocial::validation::check_complete;
use super::psychosocial::{QuestionnaireResponses, ScoringError, ValidationError};
use super::repository::{QuestionnaireRepository, RepositoryError, ScoreRecord, ScreeningRecord};
use super::trauma::{screen_trauma, TraumaAnswer};

/// Service composing the validation gate, the scoring engine, and the
/// persistence seam: one call per submitted questionnaire, fail-fast on
/// incomplete answers, then a single write-once record.
pub struct QuestionnaireService<R> {
    repository: Arc<R>,
}

impl<R> QuestionnaireService<R>
where
    R: QuestionnaireRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate, score, and persist a 46-item workplace submission.
    pub fn submit_workplace(
        &self,
        company: CompanyId,
        responses: QuestionnaireResponses,
    ) -> Result<ScoreRecord, ServiceError> {
        self.submit_scored(catalog::workplace::definition(), company, responses)
    }

    /// Validate, score, and persist a 72-item environment submission.
    pub fn submit_environment(
        &self,
        company: CompanyId,
        responses: QuestionnaireResponses,
    ) -> Result<ScoreRecord, ServiceError> {
        self.submit_scored(catalog::environment::definition(), company, responses)
    }

    fn submit_scored(
        &self,
        definition: &QuestionnaireDefinition,
        company: CompanyId,
        responses: QuestionnaireResponses,
    ) -> Result<ScoreRecord, ServiceError> {
        check_complete(definition, &responses)?;
        let result = score_responses(definition, &responses)?;

        info!(
            company = %company.0,
            kind = ?result.kind,
            total = result.total_score,
            risk = result.total_risk_label(),
            "questionnaire scored"
        );

        let record = ScoreRecord {
            company,
            result,
            recorded_at: Utc::now(),
        };
        self.repository.store_score(record.clone())?;
        Ok(record)
    }

    /// Screen a trauma questionnaire and persist the evaluation.
    pub fn submit_trauma(
        &self,
        company: CompanyId,
        answers: &[TraumaAnswer],
    ) -> Result<ScreeningRecord, ServiceError> {
        let evaluation = screen_trauma(answers);

        info!(
            company = %company.0,
            flagged = evaluation.requires_evaluation,
            "trauma questionnaire screened"
        );

        let record = ScreeningRecord {
            company,
            evaluation,
            recorded_at: Utc::now(),
        };
        self.repository.store_screening(record.clone())?;
        Ok(record)
    }

    /// Stored questionnaire results for one company, for reporting callers.
    pub fn company_scores(&self, company: &CompanyId) -> Result<Vec<ScoreRecord>, ServiceError> {
        Ok(self.repository.scores_for(company)?)
    }

    /// Stored trauma screenings for one company.
    pub fn company_screenings(
        &self,
        company: &CompanyId,
    ) -> Result<Vec<ScreeningRecord>, ServiceError> {
        Ok(self.repository.screenings_for(company)?)
    }
}

/// Error raised by the questionnaire service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
