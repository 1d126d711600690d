//! Measurement guide served alongside the size charts.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementInstructions {
    /// Request key for this measurement
    #[serde(skip)]
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub professional_notes: &'static str,
    pub instructions: &'static [&'static str],
    pub tips: &'static [&'static str],
    #[serde(skip_serializing_if = "no_entries")]
    pub common_errors: &'static [&'static str],
}

fn no_entries(list: &&'static [&'static str]) -> bool {
    list.is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementStandards {
    pub accuracy_tolerance: &'static str,
    pub measurement_conditions: &'static str,
    pub recommended_tools: &'static str,
    pub industry_standards: &'static [&'static str],
}

pub static MEASUREMENT_GUIDE: &[MeasurementInstructions] = &[
    MeasurementInstructions {
        key: "chest",
        name: "Chest Circumference",
        description: "Measure around the fullest part of the chest",
        professional_notes: "Critical measurement for top sizing - ensure tape is level",
        instructions: &[
            "Stand straight with arms at sides",
            "Place tape around fullest part of chest",
            "Keep tape level and parallel to floor",
            "Breathe normally and take measurement",
        ],
        tips: &[
            "Wear properly fitted undergarments",
            "Do not compress the tape",
            "Take measurement over light clothing if necessary",
        ],
        common_errors: &[
            "Measuring too high or too low",
            "Tape not level around body",
            "Compressing chest with tape",
        ],
    },
    MeasurementInstructions {
        key: "shoulders",
        name: "Shoulder Width",
        description: "Distance between shoulder points",
        professional_notes: "Key measurement for jacket and shirt fit",
        instructions: &[
            "Measure from shoulder point to shoulder point",
            "Across the back at widest point",
            "Keep shoulders relaxed and natural",
            "Measure over light clothing",
        ],
        tips: &[
            "Use a friend to help with accuracy",
            "Keep posture natural",
            "Measure at the acromion process (shoulder bone)",
        ],
        common_errors: &[],
    },
    MeasurementInstructions {
        key: "waist",
        name: "Waist Circumference",
        description: "Natural waist measurement",
        professional_notes: "Essential for trouser and skirt fitting",
        instructions: &[
            "Find natural waist (narrowest point)",
            "Usually 2-3 inches above hip bone",
            "Keep tape snug but not tight",
            "Stand naturally, do not suck in",
        ],
        tips: &[
            "Bend to side to find natural waist",
            "Measure over light undergarments",
            "Take measurement at end of normal exhale",
        ],
        common_errors: &[],
    },
    MeasurementInstructions {
        key: "hips",
        name: "Hip Circumference",
        description: "Fullest part of hips and buttocks",
        professional_notes: "Critical for bottom garment fit",
        instructions: &[
            "Find fullest part of hips/buttocks",
            "Usually 7-9 inches below natural waist",
            "Keep feet together",
            "Ensure tape is level all around",
        ],
        tips: &[
            "Use a mirror to check tape position",
            "Do not compress soft tissue",
            "Take multiple measurements for accuracy",
        ],
        common_errors: &[],
    },
];

pub const MEASUREMENT_STANDARDS: MeasurementStandards = MeasurementStandards {
    accuracy_tolerance: "±0.5cm",
    measurement_conditions: "Light undergarments, natural posture",
    recommended_tools: "Flexible measuring tape, mirror, assistant",
    industry_standards: &["ISO 3635", "EN 13402", "ASTM D5585"],
};
