//! Static calibration data for the scored questionnaires.
//!
//! Item grouping, category/domain membership, and every cut-point tuple are
//! fixed constants of the norm's reference guides. They are declared exactly
//! once here and shared by the scoring core and any reporting collaborator;
//! nothing in this module is derived at runtime.

pub mod environment;
pub mod workplace;

use super::domain::{QuestionnaireKind, QuestionnaireResponses};

/// Closed range of item numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRange {
    pub first: u8,
    pub last: u8,
}

impl ItemRange {
    pub const fn new(first: u8, last: u8) -> Self {
        Self { first, last }
    }

    pub fn contains(&self, item: u8) -> bool {
        (self.first..=self.last).contains(&item)
    }
}

/// Polarity of an item's answer-value table.
///
/// Favorable items describe protective conditions, so a frequent answer
/// ("Siempre") contributes 0 risk points; unfavorable items are the mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPolarity {
    Favorable,
    Unfavorable,
}

/// One aggregation bucket (category or domain): its reported name, the items
/// that feed it, and the ascending cut points classifying its sum.
#[derive(Debug, Clone, Copy)]
pub struct BucketDef {
    pub name: &'static str,
    pub items: &'static [u8],
    pub cuts: [u32; 4],
}

impl BucketDef {
    /// Largest sum the bucket can reach when every listed item is answered.
    pub fn max_score(&self) -> u32 {
        self.items.len() as u32 * 4
    }
}

/// Complete static definition of one questionnaire variant.
#[derive(Debug, Clone, Copy)]
pub struct QuestionnaireDefinition {
    pub kind: QuestionnaireKind,
    pub item_count: u8,
    /// Items 1..=this are mandatory for every respondent.
    pub mandatory_through: u8,
    /// Items applicable only when the respondent serves customers.
    pub customer_items: ItemRange,
    /// Items applicable only when the respondent supervises others.
    pub supervisor_items: ItemRange,
    /// Ranges scored with the favorable (Siempre→0) value table; every other
    /// item uses the mirrored table.
    pub favorable_items: &'static [ItemRange],
    pub total_cuts: [u32; 4],
    pub categories: &'static [BucketDef],
    pub domains: &'static [BucketDef],
}

impl QuestionnaireDefinition {
    pub fn polarity(&self, item: u8) -> ItemPolarity {
        if self.favorable_items.iter().any(|range| range.contains(item)) {
            ItemPolarity::Favorable
        } else {
            ItemPolarity::Unfavorable
        }
    }

    pub fn is_conditional(&self, item: u8) -> bool {
        self.customer_items.contains(item) || self.supervisor_items.contains(item)
    }

    /// Whether the item participates at all for this respondent.
    pub fn applies(&self, item: u8, responses: &QuestionnaireResponses) -> bool {
        if self.customer_items.contains(item) {
            return responses.serves_customers;
        }
        if self.supervisor_items.contains(item) {
            return responses.is_supervisor;
        }
        item >= 1 && item <= self.item_count
    }

    /// Whether an unanswered item must abort scoring.
    pub fn is_always_mandatory(&self, item: u8) -> bool {
        item >= 1 && item <= self.mandatory_through
    }

    /// Theoretical ceiling for the grand total, used as a defensive bound.
    pub fn max_total(&self) -> u32 {
        self.item_count as u32 * 4
    }
}
