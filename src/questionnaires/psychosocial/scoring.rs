use std::collections::BTreeMap;

use super::catalog::{ItemPolarity, QuestionnaireDefinition};
use super::classification::classify;
use super::domain::{BucketScore, QuestionnaireResponses, ScoreResult};

/// The five Likert labels accepted on the wire, most to least frequent.
pub const ANSWER_LABELS: [&str; 5] = [
    "Siempre",
    "Casi siempre",
    "Algunas veces",
    "Casi nunca",
    "Nunca",
];

/// Errors raised while aggregating one submission.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("no answer for mandatory item {item}")]
    MissingMandatoryAnswer { item: u8 },
    #[error("aggregated total {total} exceeds the questionnaire maximum {max}")]
    ImplausibleTotal { total: u32, max: u32 },
}

/// Resolve one answer label to its 0-4 point value for the item's polarity.
///
/// Labels outside the five known ones contribute 0 points instead of failing
/// the submission; missing answers are handled by the validation gate and the
/// aggregator, not here.
pub fn answer_points(polarity: ItemPolarity, label: &str) -> u32 {
    let rank = match label.trim() {
        "Siempre" => Some(0),
        "Casi siempre" => Some(1),
        "Algunas veces" => Some(2),
        "Casi nunca" => Some(3),
        "Nunca" => Some(4),
        _ => None,
    };

    match rank {
        Some(rank) => match polarity {
            ItemPolarity::Favorable => rank,
            ItemPolarity::Unfavorable => 4 - rank,
        },
        None => 0,
    }
}

/// Walk every item of the questionnaire, accumulate the grand total and every
/// category/domain bucket, and classify each sum.
///
/// Conditional items whose governing flag is off are skipped entirely. An
/// unanswered always-mandatory item aborts with the offending item number; an
/// unanswered optional item is excluded from the sums. An item feeding more
/// than one bucket contributes to each of them.
pub(crate) fn score_responses(
    definition: &QuestionnaireDefinition,
    responses: &QuestionnaireResponses,
) -> Result<ScoreResult, ScoringError> {
    let mut total: u32 = 0;
    let mut category_sums: BTreeMap<&'static str, u32> = definition
        .categories
        .iter()
        .map(|bucket| (bucket.name, 0))
        .collect();
    let mut domain_sums: BTreeMap<&'static str, u32> = definition
        .domains
        .iter()
        .map(|bucket| (bucket.name, 0))
        .collect();

    for item in 1..=definition.item_count {
        if !definition.applies(item, responses) {
            continue;
        }

        let label = match responses.answer(item) {
            Some(label) => label,
            None if definition.is_always_mandatory(item) => {
                return Err(ScoringError::MissingMandatoryAnswer { item });
            }
            None => continue,
        };

        let points = answer_points(definition.polarity(item), label);
        total += points;

        for bucket in definition.categories {
            if bucket.items.contains(&item) {
                *category_sums.entry(bucket.name).or_insert(0) += points;
            }
        }
        for bucket in definition.domains {
            if bucket.items.contains(&item) {
                *domain_sums.entry(bucket.name).or_insert(0) += points;
            }
        }
    }

    if total > definition.max_total() {
        return Err(ScoringError::ImplausibleTotal {
            total,
            max: definition.max_total(),
        });
    }

    let categories = definition
        .categories
        .iter()
        .map(|bucket| {
            let score = category_sums.get(bucket.name).copied().unwrap_or(0);
            let risk = classify(score, &bucket.cuts);
            (bucket.name.to_string(), BucketScore { score, risk })
        })
        .collect();
    let domains = definition
        .domains
        .iter()
        .map(|bucket| {
            let score = domain_sums.get(bucket.name).copied().unwrap_or(0);
            let risk = classify(score, &bucket.cuts);
            (bucket.name.to_string(), BucketScore { score, risk })
        })
        .collect();

    Ok(ScoreResult {
        kind: definition.kind,
        total_score: total,
        total_risk: classify(total, &definition.total_cuts),
        categories,
        domains,
    })
}
