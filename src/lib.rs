//! Scoring engine for the NOM-035-STPS psychosocial risk questionnaires.
//!
//! The crate turns a flat set of Likert answers into a hierarchical weighted
//! score (item → domain → category → total), classifies every level of that
//! hierarchy against the calibrated cut points of the norm's reference
//! guides, and screens the severe-traumatic-events questionnaire. All of it
//! is pure computation; HTTP decoding and persistence live behind the typed
//! seams in [`questionnaires::repository`] and [`questionnaires::service`].

pub mod questionnaires;

pub use questionnaires::psychosocial::{
    score_environment, score_workplace, CompanyId, QuestionnaireKind, QuestionnaireResponses,
    RiskLevel, ScoreResult,
};
pub use questionnaires::repository::{
    QuestionnaireRepository, RepositoryError, ScoreRecord, ScreeningRecord,
};
pub use questionnaires::service::{QuestionnaireService, ServiceError};
pub use questionnaires::trauma::{screen_trauma, TraumaAnswer, TraumaEvaluation};
