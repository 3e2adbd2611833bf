use std::collections::BTreeSet;

use super::catalog::QuestionnaireDefinition;
use super::domain::QuestionnaireResponses;

/// Validation errors raised before scoring is attempted.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("missing answers for mandatory items: {}", format_items(.0))]
    MissingAnswers(Vec<u8>),
}

fn format_items(items: &[u8]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Report every mandatory-but-unanswered item before aggregation runs.
///
/// Mandatory means the always-mandatory range plus whichever conditional
/// ranges the respondent's flags switch on; conditional ranges whose flag is
/// off are never reported. Missing items are listed ascending.
pub fn check_complete(
    definition: &QuestionnaireDefinition,
    responses: &QuestionnaireResponses,
) -> Result<(), ValidationError> {
    let answered: BTreeSet<u8> = responses.answered_items().collect();

    let missing: Vec<u8> = (1..=definition.item_count)
        .filter(|&item| {
            let required = definition.is_always_mandatory(item)
                || (definition.is_conditional(item) && definition.applies(item, responses));
            required && !answered.contains(&item)
        })
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingAnswers(missing))
    }
}
