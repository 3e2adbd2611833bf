use super::domain::RiskLevel;

/// Map an accumulated score to its ordinal risk level against an ascending
/// 4-tuple of cut points: `score < a` is negligible, `a <= score < b` low,
/// `b <= score < c` medium, `c <= score < d` high, `d <= score` very high.
pub fn classify(score: u32, cuts: &[u32; 4]) -> RiskLevel {
    let [a, b, c, d] = *cuts;
    if score < a {
        RiskLevel::Negligible
    } else if score < b {
        RiskLevel::Low
    } else if score < c {
        RiskLevel::Medium
    } else if score < d {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    }
}
