use super::domain::{QuestionnaireKind, RiskLevel};

// Remediation wording from the norm's action table. Regulatory language,
// reproduced verbatim; treat as opaque string resources keyed by level.

const NEGLIGIBLE: &str = "El riesgo resulta despreciable, por lo que no se \
requieren medidas adicionales.";

const LOW: &str = "Es necesaria una mayor difusión de la política de \
prevención de riesgos psicosociales y programas para: la prevención de los \
factores de riesgo psicosocial, la promoción de un entorno organizacional \
favorable y la prevención de la violencia laboral.";

const MEDIUM: &str = "Se requiere revisar la política de prevención de \
riesgos psicosociales y programas para la prevención de los factores de \
riesgo psicosocial, la promoción de un entorno organizacional favorable y la \
prevención de la violencia laboral, así como reforzar su aplicación y \
difusión, mediante un programa de intervención.";

const HIGH: &str = "Se requiere realizar un análisis de cada categoría y \
dominio, de manera que se puedan determinar las acciones de intervención \
apropiadas a través de un programa de intervención, que podrá incluir una \
evaluación específica y deberá incluir una campaña de sensibilización, \
revisar la política de prevención de riesgos psicosociales y programas para \
la prevención de los factores de riesgo psicosocial, la promoción de un \
entorno organizacional favorable y la prevención de la violencia laboral.";

const VERY_HIGH: &str = "Se requiere realizar el análisis de cada categoría \
y dominio, de manera que se puedan determinar las acciones de intervención \
apropiadas a través de un programa de intervención, que deberá incluir \
evaluaciones específicas y una campaña de sensibilización; revisar la \
política de prevención de riesgos psicosociales y programas para la \
prevención de los factores de riesgo psicosocial, la promoción de un entorno \
organizacional favorable y la prevención de la violencia laboral, así como \
reforzar su aplicación y difusión.";

/// Resolve the remediation paragraph for a classified level.
///
/// Total over every level of both questionnaires; the action table is shared
/// between them, but callers name the variant so the lookup stays per-call
/// site should the wording ever diverge.
pub fn recommendation(_kind: QuestionnaireKind, level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Negligible => NEGLIGIBLE,
        RiskLevel::Low => LOW,
        RiskLevel::Medium => MEDIUM,
        RiskLevel::High => HIGH,
        RiskLevel::VeryHigh => VERY_HIGH,
    }
}
