//! Body shape classification.
//!
//! Each gender has an ordered rule table keyed on `shoulder_hip` and
//! `waist_hip`. Rules are evaluated in table order and the first match wins;
//! when none match, the table's `otherwise` result applies.

use serde::Serialize;

use crate::analysis::ratios::BodyRatios;
use crate::types::Gender;

/// Used when the shoulder-hip ratio could not be computed
pub const DEFAULT_SHOULDER_HIP: f64 = 1.0;
/// Used when the waist-hip ratio could not be computed
pub const DEFAULT_WAIST_HIP: f64 = 0.8;

/// Shape labels. Masculine and feminine tables share some labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BodyShape {
    #[serde(rename = "Athletic V-Shape")]
    AthleticVShape,
    #[serde(rename = "Inverted Triangle")]
    InvertedTriangle,
    /// Masculine pear label
    #[serde(rename = "Pear Shape")]
    PearShape,
    /// Feminine pear label
    #[serde(rename = "Pear")]
    Pear,
    #[serde(rename = "Rectangle")]
    Rectangle,
    #[serde(rename = "Oval")]
    Oval,
    #[serde(rename = "Hourglass")]
    Hourglass,
    #[serde(rename = "Apple")]
    Apple,
}

impl BodyShape {
    pub fn label(&self) -> &'static str {
        match self {
            BodyShape::AthleticVShape => "Athletic V-Shape",
            BodyShape::InvertedTriangle => "Inverted Triangle",
            BodyShape::PearShape => "Pear Shape",
            BodyShape::Pear => "Pear",
            BodyShape::Rectangle => "Rectangle",
            BodyShape::Oval => "Oval",
            BodyShape::Hourglass => "Hourglass",
            BodyShape::Apple => "Apple",
        }
    }
}

/// Classification result with its fit guidance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyClassification {
    #[serde(rename = "type")]
    pub shape: BodyShape,
    pub description: &'static str,
    pub fit_priority: &'static str,
}

/// One (predicate, result) pair. The predicate receives (shoulder_hip, waist_hip).
pub struct ClassificationRule {
    pub matches: fn(f64, f64) -> bool,
    pub classification: BodyClassification,
}

pub struct RuleTable {
    pub rules: &'static [ClassificationRule],
    pub otherwise: BodyClassification,
}

impl RuleTable {
    pub fn evaluate(&self, shoulder_hip: f64, waist_hip: f64) -> BodyClassification {
        self.rules
            .iter()
            .find(|rule| (rule.matches)(shoulder_hip, waist_hip))
            .map(|rule| rule.classification)
            .unwrap_or(self.otherwise)
    }
}

// ============================================================================
// Masculine table
// ============================================================================

fn broad_shoulders_tapered_waist(sh: f64, wh: f64) -> bool {
    sh > 1.08 && wh < 0.85
}

fn broad_shoulders_m(sh: f64, _wh: f64) -> bool {
    sh > 1.08
}

fn narrow_shoulders(sh: f64, _wh: f64) -> bool {
    sh < 0.95
}

fn straight_waist_m(_sh: f64, wh: f64) -> bool {
    wh > 0.95
}

pub static MASCULINE_RULES: RuleTable = RuleTable {
    rules: &[
        ClassificationRule {
            matches: broad_shoulders_tapered_waist,
            classification: BodyClassification {
                shape: BodyShape::AthleticVShape,
                description: "Broad shoulders, narrow waist - classic masculine ideal",
                fit_priority: "Accommodate shoulder breadth, emphasize waist taper",
            },
        },
        ClassificationRule {
            matches: broad_shoulders_m,
            classification: BodyClassification {
                shape: BodyShape::InvertedTriangle,
                description: "Broad shoulders, straight torso",
                fit_priority: "Balance upper body width",
            },
        },
        ClassificationRule {
            matches: narrow_shoulders,
            classification: BodyClassification {
                shape: BodyShape::PearShape,
                description: "Narrow shoulders, fuller hips",
                fit_priority: "Add visual weight to upper body",
            },
        },
        ClassificationRule {
            matches: straight_waist_m,
            classification: BodyClassification {
                shape: BodyShape::Rectangle,
                description: "Straight silhouette, minimal waist definition",
                fit_priority: "Create waist definition and visual interest",
            },
        },
    ],
    otherwise: BodyClassification {
        shape: BodyShape::Oval,
        description: "Fuller midsection, balanced proportions",
        fit_priority: "Elongate torso, minimize midsection",
    },
};

// ============================================================================
// Feminine table
// ============================================================================

fn balanced_defined_waist(sh: f64, wh: f64) -> bool {
    (sh - 1.0).abs() < 0.05 && wh < 0.75
}

fn broad_shoulders_f(sh: f64, _wh: f64) -> bool {
    sh > 1.05
}

fn straight_waist_f(_sh: f64, wh: f64) -> bool {
    wh > 0.85
}

pub static FEMININE_RULES: RuleTable = RuleTable {
    rules: &[
        ClassificationRule {
            matches: balanced_defined_waist,
            classification: BodyClassification {
                shape: BodyShape::Hourglass,
                description: "Balanced shoulders and hips, defined waist - classic feminine ideal",
                fit_priority: "Emphasize natural waist, maintain balance",
            },
        },
        ClassificationRule {
            matches: broad_shoulders_f,
            classification: BodyClassification {
                shape: BodyShape::InvertedTriangle,
                description: "Broad shoulders, narrow hips",
                fit_priority: "Balance shoulder width, add hip volume",
            },
        },
        ClassificationRule {
            matches: narrow_shoulders,
            classification: BodyClassification {
                shape: BodyShape::Pear,
                description: "Narrow shoulders, fuller hips - common feminine shape",
                fit_priority: "Emphasize upper body, balance proportions",
            },
        },
        ClassificationRule {
            matches: straight_waist_f,
            classification: BodyClassification {
                shape: BodyShape::Rectangle,
                description: "Athletic straight silhouette",
                fit_priority: "Create curves and waist definition",
            },
        },
    ],
    otherwise: BodyClassification {
        shape: BodyShape::Apple,
        description: "Fuller midsection, great legs",
        fit_priority: "Elongate torso, emphasize legs",
    },
};

pub fn rules_for(gender: Gender) -> &'static RuleTable {
    match gender {
        Gender::Homme => &MASCULINE_RULES,
        Gender::Femme => &FEMININE_RULES,
    }
}

/// Classify body shape from ratios; absent ratios take their defaults
pub fn classify_body(ratios: &BodyRatios, gender: Gender) -> BodyClassification {
    let shoulder_hip = ratios.shoulder_hip.unwrap_or(DEFAULT_SHOULDER_HIP);
    let waist_hip = ratios.waist_hip.unwrap_or(DEFAULT_WAIST_HIP);
    rules_for(gender).evaluate(shoulder_hip, waist_hip)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratios(sh: f64, wh: f64) -> BodyRatios {
        BodyRatios {
            shoulder_hip: Some(sh),
            waist_hip: Some(wh),
            ..Default::default()
        }
    }

    #[test]
    fn test_masculine_branches() {
        assert_eq!(classify_body(&ratios(1.10, 0.80), Gender::Homme).shape, BodyShape::AthleticVShape);
        assert_eq!(classify_body(&ratios(1.10, 0.90), Gender::Homme).shape, BodyShape::InvertedTriangle);
        assert_eq!(classify_body(&ratios(0.90, 0.80), Gender::Homme).shape, BodyShape::PearShape);
        assert_eq!(classify_body(&ratios(1.00, 0.97), Gender::Homme).shape, BodyShape::Rectangle);
        assert_eq!(classify_body(&ratios(1.00, 0.90), Gender::Homme).shape, BodyShape::Oval);
    }

    #[test]
    fn test_feminine_branches() {
        assert_eq!(classify_body(&ratios(1.02, 0.70), Gender::Femme).shape, BodyShape::Hourglass);
        assert_eq!(classify_body(&ratios(1.10, 0.70), Gender::Femme).shape, BodyShape::InvertedTriangle);
        assert_eq!(classify_body(&ratios(0.90, 0.70), Gender::Femme).shape, BodyShape::Pear);
        assert_eq!(classify_body(&ratios(1.00, 0.90), Gender::Femme).shape, BodyShape::Rectangle);
        assert_eq!(classify_body(&ratios(1.00, 0.80), Gender::Femme).shape, BodyShape::Apple);
    }

    #[test]
    fn test_first_match_wins() {
        // Narrow shoulders and a straight waist: the pear rule comes first
        assert_eq!(classify_body(&ratios(0.90, 0.99), Gender::Homme).shape, BodyShape::PearShape);
        // Broad shoulders with a straight waist stays Inverted Triangle, never Rectangle
        assert_eq!(classify_body(&ratios(1.20, 0.99), Gender::Homme).shape, BodyShape::InvertedTriangle);
        // Hourglass outranks the straight-waist rule only when waist_hip < 0.75
        assert_eq!(classify_body(&ratios(1.01, 0.74), Gender::Femme).shape, BodyShape::Hourglass);
    }

    #[test]
    fn test_threshold_edges_are_strict() {
        // 1.08 is not > 1.08; 0.95 is not < 0.95; waist_hip 0.95 is not > 0.95
        assert_eq!(classify_body(&ratios(1.08, 0.80), Gender::Homme).shape, BodyShape::Oval);
        assert_eq!(classify_body(&ratios(0.95, 0.95), Gender::Homme).shape, BodyShape::Oval);
        assert_eq!(classify_body(&ratios(1.05, 0.85), Gender::Femme).shape, BodyShape::Apple);
    }

    #[test]
    fn test_defaults_when_ratios_absent() {
        // Defaults (1.0, 0.8): masculine -> Oval, feminine -> Apple
        let empty = BodyRatios::default();
        assert_eq!(classify_body(&empty, Gender::Homme).shape, BodyShape::Oval);
        assert_eq!(classify_body(&empty, Gender::Femme).shape, BodyShape::Apple);
    }

    #[test]
    fn test_classification_serializes_label() {
        let c = classify_body(&ratios(1.10, 0.80), Gender::Homme);
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["type"], "Athletic V-Shape");
        assert_eq!(json["fit_priority"], "Accommodate shoulder breadth, emphasize waist taper");
    }
}
