//! Calibration tables for the 72-item environment questionnaire
//! (Guía de Referencia III, workplaces with more than 50 workers).

use super::{BucketDef, ItemRange, QuestionnaireDefinition};
use crate::questionnaires::psychosocial::domain::QuestionnaireKind;

/// Positively worded items: control over the work (17-24), leadership and
/// relationships (32-46), organizational environment (55-64).
const FAVORABLE: &[ItemRange] = &[
    ItemRange::new(17, 24),
    ItemRange::new(32, 46),
    ItemRange::new(55, 64),
];

const CATEGORIES: &[BucketDef] = &[
    BucketDef {
        name: "Ambiente de trabajo",
        items: &[1, 2, 3, 4, 5],
        cuts: [5, 9, 11, 14],
    },
    BucketDef {
        name: "Factores propios de la actividad",
        items: &[
            6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 65, 66, 67,
            68,
        ],
        cuts: [15, 30, 45, 80],
    },
    BucketDef {
        name: "Organización del tiempo de trabajo",
        items: &[25, 26, 27, 28, 29, 30, 31],
        cuts: [5, 9, 11, 14],
    },
    BucketDef {
        name: "Liderazgo y relaciones en el trabajo",
        items: &[
            32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52,
            53, 54, 69, 70, 71, 72,
        ],
        cuts: [14, 29, 42, 58],
    },
    BucketDef {
        name: "Entorno organizacional",
        items: &[55, 56, 57, 58, 59, 60, 61, 62, 63, 64],
        cuts: [10, 14, 18, 23],
    },
];

const DOMAINS: &[BucketDef] = &[
    BucketDef {
        name: "Condiciones en el ambiente de trabajo",
        items: &[1, 2, 3, 4, 5],
        cuts: [5, 9, 11, 14],
    },
    BucketDef {
        name: "Carga de trabajo",
        items: &[6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 65, 66, 67, 68],
        cuts: [15, 21, 27, 37],
    },
    BucketDef {
        name: "Falta de control sobre el trabajo",
        items: &[17, 18, 19, 20, 21, 22, 23, 24],
        cuts: [11, 16, 21, 25],
    },
    BucketDef {
        name: "Jornada de trabajo",
        items: &[25, 26, 27],
        cuts: [1, 4, 6, 9],
    },
    BucketDef {
        name: "Interferencia en la relación trabajo-familia",
        items: &[28, 29, 30, 31],
        cuts: [4, 8, 11, 14],
    },
    BucketDef {
        name: "Liderazgo",
        items: &[32, 33, 34, 35, 36, 37, 38, 39, 40],
        cuts: [9, 12, 16, 21],
    },
    BucketDef {
        name: "Relaciones en el trabajo",
        items: &[41, 42, 43, 44, 45, 46, 69, 70, 71, 72],
        cuts: [10, 13, 17, 21],
    },
    BucketDef {
        name: "Violencia",
        items: &[47, 48, 49, 50, 51, 52, 53, 54],
        cuts: [7, 10, 13, 16],
    },
    BucketDef {
        name: "Reconocimiento del desempeño",
        items: &[55, 56, 57, 58, 59, 60],
        cuts: [10, 14, 18, 23],
    },
    BucketDef {
        name: "Insuficiente sentido de pertenencia e inestabilidad",
        items: &[61, 62, 63, 64],
        cuts: [4, 8, 10, 12],
    },
];

static DEFINITION: QuestionnaireDefinition = QuestionnaireDefinition {
    kind: QuestionnaireKind::Environment,
    item_count: 72,
    // Items 55-64 are scored when answered but never reported missing; the
    // source controllers disagreed on 54 vs 64 and 54 is the published bound.
    mandatory_through: 54,
    customer_items: ItemRange::new(65, 68),
    supervisor_items: ItemRange::new(69, 72),
    favorable_items: FAVORABLE,
    total_cuts: [50, 75, 99, 140],
    categories: CATEGORIES,
    domains: DOMAINS,
};

pub fn definition() -> &'static QuestionnaireDefinition {
    &DEFINITION
}
