use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::questionnaires::psychosocial::domain::{CompanyId, QuestionnaireResponses};
use crate::questionnaires::repository::{
    QuestionnaireRepository, RepositoryError, ScoreRecord, ScreeningRecord,
};
use crate::questionnaires::service::QuestionnaireService;

pub(super) fn company() -> CompanyId {
    CompanyId("empresa-001".to_string())
}

/// Respondent who answered items 1..=last uniformly with `label`.
pub(super) fn uniform_responses(
    last: u8,
    label: &str,
    is_supervisor: bool,
    serves_customers: bool,
) -> QuestionnaireResponses {
    let answers: BTreeMap<u8, String> = (1..=last).map(|item| (item, label.to_string())).collect();
    QuestionnaireResponses::new(answers, is_supervisor, serves_customers)
}

/// Workplace respondent with neither flag set, items 1..=40 answered.
pub(super) fn workplace_base(label: &str) -> QuestionnaireResponses {
    uniform_responses(40, label, false, false)
}

/// Environment respondent with neither flag set, items 1..=54 answered.
pub(super) fn environment_base(label: &str) -> QuestionnaireResponses {
    uniform_responses(54, label, false, false)
}

pub(super) fn build_service() -> (QuestionnaireService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = QuestionnaireService::new(repository.clone());
    (service, repository)
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    pub(super) scores: Mutex<Vec<ScoreRecord>>,
    pub(super) screenings: Mutex<Vec<ScreeningRecord>>,
}

impl QuestionnaireRepository for MemoryRepository {
    fn store_score(&self, record: ScoreRecord) -> Result<(), RepositoryError> {
        self.scores.lock().expect("score mutex poisoned").push(record);
        Ok(())
    }

    fn store_screening(&self, record: ScreeningRecord) -> Result<(), RepositoryError> {
        self.screenings
            .lock()
            .expect("screening mutex poisoned")
            .push(record);
        Ok(())
    }

    fn scores_for(&self, company: &CompanyId) -> Result<Vec<ScoreRecord>, RepositoryError> {
        Ok(self
            .scores
            .lock()
            .expect("score mutex poisoned")
            .iter()
            .filter(|record| &record.company == company)
            .cloned()
            .collect())
    }

    fn screenings_for(&self, company: &CompanyId) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        Ok(self
            .screenings
            .lock()
            .expect("screening mutex poisoned")
            .iter()
            .filter(|record| &record.company == company)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl QuestionnaireRepository for UnavailableRepository {
    fn store_score(&self, _record: ScoreRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn store_screening(&self, _record: ScreeningRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn scores_for(&self, _company: &CompanyId) -> Result<Vec<ScoreRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn screenings_for(
        &self,
        _company: &CompanyId,
    ) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
