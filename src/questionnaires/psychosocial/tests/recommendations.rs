use crate::questionnaires::psychosocial::domain::{QuestionnaireKind, RiskLevel};
use crate::questionnaires::psychosocial::recommendation;

const LEVELS: [RiskLevel; 5] = [
    RiskLevel::Negligible,
    RiskLevel::Low,
    RiskLevel::Medium,
    RiskLevel::High,
    RiskLevel::VeryHigh,
];

#[test]
fn every_level_resolves_to_remediation_text_for_both_variants() {
    for kind in [QuestionnaireKind::Workplace, QuestionnaireKind::Environment] {
        for level in LEVELS {
            assert!(
                !recommendation(kind, level).is_empty(),
                "no remediation text for {kind:?}/{level:?}"
            );
        }
    }
}

#[test]
fn higher_severity_demands_an_intervention_program() {
    for level in [RiskLevel::Medium, RiskLevel::High, RiskLevel::VeryHigh] {
        let text = recommendation(QuestionnaireKind::Workplace, level);
        assert!(text.contains("programa de intervención"));
    }
    assert!(
        !recommendation(QuestionnaireKind::Workplace, RiskLevel::Negligible)
            .contains("programa de intervención")
    );
}
