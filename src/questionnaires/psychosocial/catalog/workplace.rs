//! Calibration tables for the 46-item workplace questionnaire
//! (Guía de Referencia II, workplaces with up to 50 workers).

use super::{BucketDef, ItemRange, QuestionnaireDefinition};
use crate::questionnaires::psychosocial::domain::QuestionnaireKind;

/// Positively worded items: control and development (10-16), leadership and
/// workplace relationships (21-32). Everything else is risk-worded.
const FAVORABLE: &[ItemRange] = &[ItemRange::new(10, 16), ItemRange::new(21, 32)];

const CATEGORIES: &[BucketDef] = &[
    BucketDef {
        name: "Ambiente de trabajo",
        items: &[1, 2, 3],
        cuts: [3, 5, 7, 9],
    },
    BucketDef {
        name: "Factores propios de la actividad",
        items: &[4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 41, 42, 43],
        cuts: [10, 20, 30, 40],
    },
    BucketDef {
        name: "Organización del tiempo de trabajo",
        items: &[17, 18, 19, 20],
        cuts: [4, 8, 9, 12],
    },
    BucketDef {
        name: "Liderazgo y relaciones en el trabajo",
        items: &[
            21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 44,
            45, 46,
        ],
        cuts: [10, 18, 28, 38],
    },
    // Reported as a fifth top-level bucket even though its items already feed
    // "Factores propios de la actividad"; the overlap is intentional.
    BucketDef {
        name: "Falta de control sobre el trabajo",
        items: &[10, 11, 12, 13, 14, 15, 16],
        cuts: [5, 8, 11, 14],
    },
];

const DOMAINS: &[BucketDef] = &[
    BucketDef {
        name: "Condiciones en el ambiente de trabajo",
        items: &[1, 2, 3],
        cuts: [3, 5, 7, 9],
    },
    BucketDef {
        name: "Carga de trabajo",
        items: &[4, 5, 6, 7, 8, 9, 41, 42, 43],
        cuts: [12, 18, 20, 24],
    },
    BucketDef {
        name: "Falta de control y autonomía sobre el trabajo",
        items: &[10, 11, 12],
        cuts: [3, 5, 7, 9],
    },
    BucketDef {
        name: "Limitada o nula posibilidad de desarrollo",
        items: &[13, 14],
        cuts: [1, 2, 4, 6],
    },
    BucketDef {
        name: "Limitada o inexistente capacitación",
        items: &[15, 16],
        cuts: [1, 2, 4, 6],
    },
    BucketDef {
        name: "Jornada de trabajo",
        items: &[17, 18],
        cuts: [1, 2, 4, 6],
    },
    BucketDef {
        name: "Interferencia en la relación trabajo-familia",
        items: &[19, 20],
        cuts: [1, 2, 4, 6],
    },
    BucketDef {
        name: "Liderazgo",
        items: &[21, 22, 23, 24, 25, 26, 27, 44, 45, 46],
        cuts: [3, 5, 8, 11],
    },
    BucketDef {
        name: "Relaciones en el trabajo",
        items: &[28, 29, 30, 31, 32],
        cuts: [5, 8, 11, 14],
    },
    BucketDef {
        name: "Violencia",
        items: &[33, 34, 35, 36, 37, 38, 39, 40],
        cuts: [7, 10, 13, 16],
    },
];

static DEFINITION: QuestionnaireDefinition = QuestionnaireDefinition {
    kind: QuestionnaireKind::Workplace,
    item_count: 46,
    mandatory_through: 40,
    customer_items: ItemRange::new(41, 43),
    supervisor_items: ItemRange::new(44, 46),
    favorable_items: FAVORABLE,
    total_cuts: [20, 45, 70, 90],
    categories: CATEGORIES,
    domains: DOMAINS,
};

pub fn definition() -> &'static QuestionnaireDefinition {
    &DEFINITION
}
