use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for the company a submission belongs to.
///
/// Opaque to the scoring core; only the persistence seam groups by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(pub String);

/// Which of the two independent scoring pipelines a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionnaireKind {
    /// 46-item questionnaire (Guía de Referencia II).
    Workplace,
    /// 72-item questionnaire (Guía de Referencia III).
    Environment,
}

/// Ordinal risk classification, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Negligible,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Spanish label as reported to respondents. The lowest tier is worded
    /// differently per questionnaire ("Nulo o despreciable" vs "Nulo").
    pub fn label(self, kind: QuestionnaireKind) -> &'static str {
        match self {
            RiskLevel::Negligible => match kind {
                QuestionnaireKind::Workplace => "Nulo o despreciable",
                QuestionnaireKind::Environment => "Nulo",
            },
            RiskLevel::Low => "Bajo",
            RiskLevel::Medium => "Medio",
            RiskLevel::High => "Alto",
            RiskLevel::VeryHigh => "Muy alto",
        }
    }
}

/// Typed answer set for one respondent, validated at the boundary.
///
/// Answers are keyed by item number instead of the wire's duck-typed
/// `pregunta{N}` strings, so the engine never touches dynamic keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireResponses {
    answers: BTreeMap<u8, String>,
    /// Respondent supervises other workers (`esJefe`).
    pub is_supervisor: bool,
    /// Respondent serves external customers or users (`servicioClientes`).
    pub serves_customers: bool,
}

impl QuestionnaireResponses {
    pub fn new(answers: BTreeMap<u8, String>, is_supervisor: bool, serves_customers: bool) -> Self {
        Self {
            answers,
            is_supervisor,
            serves_customers,
        }
    }

    /// Build from the decoded form map keyed by `pregunta{N}`. Keys that do
    /// not carry a parseable item number are dropped here, before scoring.
    pub fn from_form(
        form: &BTreeMap<String, String>,
        is_supervisor: bool,
        serves_customers: bool,
    ) -> Self {
        let answers = form
            .iter()
            .filter_map(|(key, value)| {
                let item = key.strip_prefix("pregunta")?.parse::<u8>().ok()?;
                Some((item, value.clone()))
            })
            .collect();
        Self::new(answers, is_supervisor, serves_customers)
    }

    pub fn answer(&self, item: u8) -> Option<&str> {
        self.answers.get(&item).map(String::as_str)
    }

    pub fn answered_items(&self) -> impl Iterator<Item = u8> + '_ {
        self.answers.keys().copied()
    }

    pub fn set_answer(&mut self, item: u8, label: impl Into<String>) {
        self.answers.insert(item, label.into());
    }

    pub fn remove_answer(&mut self, item: u8) {
        self.answers.remove(&item);
    }
}

/// Decoded request body for a scored questionnaire, mirroring the wire keys
/// the intake layer produces. The engine consumes only the typed view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireSubmission {
    #[serde(rename = "empresa")]
    pub company: CompanyId,
    #[serde(rename = "preguntas")]
    pub answers: BTreeMap<String, String>,
    #[serde(rename = "esJefe")]
    pub is_supervisor: bool,
    #[serde(rename = "servicioClientes")]
    pub serves_customers: bool,
}

impl QuestionnaireSubmission {
    pub fn responses(&self) -> QuestionnaireResponses {
        QuestionnaireResponses::from_form(&self.answers, self.is_supervisor, self.serves_customers)
    }
}

/// Score and classification for one category or domain bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketScore {
    pub score: u32,
    pub risk: RiskLevel,
}

/// Immutable outcome of scoring one submission, handed to persistence as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub kind: QuestionnaireKind,
    pub total_score: u32,
    pub total_risk: RiskLevel,
    pub categories: BTreeMap<String, BucketScore>,
    pub domains: BTreeMap<String, BucketScore>,
}

impl ScoreResult {
    pub fn total_risk_label(&self) -> &'static str {
        self.total_risk.label(self.kind)
    }
}
