use crate::questionnaires::psychosocial::catalog::{environment, workplace};
use crate::questionnaires::psychosocial::classify;
use crate::questionnaires::psychosocial::domain::{QuestionnaireKind, RiskLevel};

#[test]
fn workplace_total_boundaries_are_exact() {
    let cuts = &workplace::definition().total_cuts;
    let kind = QuestionnaireKind::Workplace;

    assert_eq!(classify(0, cuts), RiskLevel::Negligible);
    assert_eq!(classify(19, cuts).label(kind), "Nulo o despreciable");
    assert_eq!(classify(20, cuts).label(kind), "Bajo");
    assert_eq!(classify(44, cuts).label(kind), "Bajo");
    assert_eq!(classify(45, cuts).label(kind), "Medio");
    assert_eq!(classify(69, cuts).label(kind), "Medio");
    assert_eq!(classify(70, cuts).label(kind), "Alto");
    assert_eq!(classify(89, cuts).label(kind), "Alto");
    assert_eq!(classify(90, cuts).label(kind), "Muy alto");
    assert_eq!(classify(184, cuts), RiskLevel::VeryHigh);
}

#[test]
fn environment_total_boundaries_are_exact() {
    let cuts = &environment::definition().total_cuts;
    let kind = QuestionnaireKind::Environment;

    assert_eq!(classify(49, cuts).label(kind), "Nulo");
    assert_eq!(classify(50, cuts).label(kind), "Bajo");
    assert_eq!(classify(74, cuts).label(kind), "Bajo");
    assert_eq!(classify(75, cuts).label(kind), "Medio");
    assert_eq!(classify(98, cuts).label(kind), "Medio");
    assert_eq!(classify(99, cuts).label(kind), "Alto");
    assert_eq!(classify(139, cuts).label(kind), "Alto");
    assert_eq!(classify(140, cuts).label(kind), "Muy alto");
}

#[test]
fn risk_levels_are_ordered_by_severity() {
    assert!(RiskLevel::Negligible < RiskLevel::Low);
    assert!(RiskLevel::Low < RiskLevel::Medium);
    assert!(RiskLevel::Medium < RiskLevel::High);
    assert!(RiskLevel::High < RiskLevel::VeryHigh);
}

#[test]
fn lowest_tier_label_depends_on_the_variant() {
    assert_eq!(
        RiskLevel::Negligible.label(QuestionnaireKind::Workplace),
        "Nulo o despreciable"
    );
    assert_eq!(
        RiskLevel::Negligible.label(QuestionnaireKind::Environment),
        "Nulo"
    );
    // The remaining tiers share their wording.
    assert_eq!(
        RiskLevel::VeryHigh.label(QuestionnaireKind::Workplace),
        RiskLevel::VeryHigh.label(QuestionnaireKind::Environment)
    );
}
