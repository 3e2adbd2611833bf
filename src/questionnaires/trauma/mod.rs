//! Screener for the severe-traumatic-events questionnaire (Guía I).
//!
//! Twenty yes/no items split into four fixed sections. Section I asks whether
//! the respondent ever experienced a severe traumatic event; the remaining
//! sections measure remembering, avoidance, and hypervigilance symptoms, each
//! with its own affirmative-count threshold.

use serde::{Deserialize, Serialize};

/// One yes/no answer as decoded at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraumaAnswer {
    /// Question code on the wire, `q{N}` with N in 1..=20.
    #[serde(rename = "codigo")]
    pub code: String,
    /// "si" or "no".
    #[serde(rename = "respuesta")]
    pub answer: String,
}

impl TraumaAnswer {
    pub fn new(code: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            answer: answer.into(),
        }
    }

    /// Numeric suffix of the `q{N}` code; codes that do not parse are ignored
    /// by the screener rather than rejected.
    fn item(&self) -> Option<u8> {
        self.code.trim().strip_prefix('q')?.parse().ok()
    }

    fn affirmative(&self) -> bool {
        matches!(self.answer.trim().to_lowercase().as_str(), "si" | "sí")
    }
}

/// Screening outcome: whether the respondent needs a clinical evaluation and
/// the per-section reasons that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraumaEvaluation {
    #[serde(rename = "requiereEvaluacion")]
    pub requires_evaluation: bool,
    #[serde(rename = "motivos")]
    pub reasons: Vec<String>,
}

impl TraumaEvaluation {
    fn negative() -> Self {
        Self {
            requires_evaluation: false,
            reasons: Vec::new(),
        }
    }
}

/// Partition answers into the four sections and apply the decision rule.
///
/// No affirmative answer in section I (items 1-6) short-circuits to a
/// negative screening. Otherwise the three symptom conditions are evaluated
/// independently and every triggered one contributes a reason: any yes in
/// section II (7-8), three or more in section III (9-15), two or more in
/// section IV (16-20). Codes outside q1..q20 are ignored.
pub fn screen_trauma(answers: &[TraumaAnswer]) -> TraumaEvaluation {
    let mut event = 0usize;
    let mut remembering = 0usize;
    let mut avoidance = 0usize;
    let mut hypervigilance = 0usize;

    for answer in answers {
        if !answer.affirmative() {
            continue;
        }
        match answer.item() {
            Some(1..=6) => event += 1,
            Some(7..=8) => remembering += 1,
            Some(9..=15) => avoidance += 1,
            Some(16..=20) => hypervigilance += 1,
            _ => {}
        }
    }

    if event == 0 {
        return TraumaEvaluation::negative();
    }

    let mut reasons = Vec::new();
    if remembering > 0 {
        reasons.push(format!(
            "Sección II: {remembering} respuesta(s) positiva(s)"
        ));
    }
    if avoidance >= 3 {
        reasons.push(format!("Sección III: {avoidance} respuesta(s) positiva(s)"));
    }
    if hypervigilance >= 2 {
        reasons.push(format!(
            "Sección IV: {hypervigilance} respuesta(s) positiva(s)"
        ));
    }

    TraumaEvaluation {
        requires_evaluation: !reasons.is_empty(),
        reasons,
    }
}
