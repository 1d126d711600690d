//! Size Matcher
//!
//! Adjusts measurements for fit ease and morphotype, then scores every chart
//! row by squared distance from its ranges and keeps the cheapest row.
//! Rows are scanned smallest to largest and only a strictly lower cost
//! replaces the current best, so ties go to the smaller size.

use crate::adjustments::{adjust_measurement, Morphotype};
use crate::charts::{chart_for, SizeChart, SizeEntry};
use crate::request::{FitPreferences, Measurements};
use crate::types::{Dimension, GarmentCategory, Gender};

/// Weight of the shoulder term relative to chest in top matching
pub const SHOULDER_WEIGHT: f64 = 0.3;

/// Best chart row and its cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMatch {
    pub label: &'static str,
    pub cost: f64,
}

/// Minimum-cost row; the first row wins ties
pub fn best_fit<F>(chart: &SizeChart, cost: F) -> Option<SizeMatch>
where
    F: Fn(&SizeEntry) -> f64,
{
    let mut best: Option<SizeMatch> = None;
    for entry in chart.entries {
        let score = cost(entry);
        match best {
            Some(current) if score >= current.cost => {}
            _ => {
                best = Some(SizeMatch {
                    label: entry.label,
                    cost: score,
                })
            }
        }
    }
    best
}

fn distance(entry: &SizeEntry, dimension: Dimension, value: f64) -> f64 {
    entry
        .range(dimension)
        .map(|range| range.squared_distance(value))
        .unwrap_or(0.0)
}

/// Top size from chest (required) and shoulders (optional).
///
/// Both measurements take the chest morphotype offset.
pub fn match_top(
    measurements: &Measurements,
    preferences: &FitPreferences,
    gender: Gender,
    morphotype: Morphotype,
) -> Option<SizeMatch> {
    let chest = measurements.chest()?;

    let adjusted_chest = adjust_measurement(
        chest,
        preferences.for_dimension(Dimension::Chest),
        morphotype,
        Dimension::Chest,
    );
    let adjusted_shoulders = measurements
        .shoulders()
        .map(|s| {
            adjust_measurement(
                s,
                preferences.for_dimension(Dimension::Shoulders),
                morphotype,
                Dimension::Chest,
            )
        })
        .filter(|s| *s > 0.0);

    let chart = chart_for(gender, GarmentCategory::Top);
    let best = best_fit(chart, |entry| {
        let chest_cost = distance(entry, Dimension::Chest, adjusted_chest);
        let shoulder_cost = adjusted_shoulders
            .map(|s| distance(entry, Dimension::Shoulders, s))
            .unwrap_or(0.0);
        chest_cost + shoulder_cost * SHOULDER_WEIGHT
    });

    tracing::debug!(
        adjusted_chest,
        ?adjusted_shoulders,
        size = ?best.map(|m| m.label),
        "Top size matched"
    );
    best
}

/// Bottom size from the hip-region waist and hips (both required)
pub fn match_bottom(
    measurements: &Measurements,
    preferences: &FitPreferences,
    gender: Gender,
    morphotype: Morphotype,
) -> Option<SizeMatch> {
    let waist = measurements.waist()?;
    let hips = measurements.hips()?;

    let adjusted_waist = adjust_measurement(
        waist,
        preferences.for_dimension(Dimension::Waist),
        morphotype,
        Dimension::Waist,
    );
    let adjusted_hips = adjust_measurement(
        hips,
        preferences.for_dimension(Dimension::Hips),
        morphotype,
        Dimension::Hips,
    );

    let chart = chart_for(gender, GarmentCategory::Bottom);
    let best = best_fit(chart, |entry| {
        distance(entry, Dimension::Waist, adjusted_waist) + distance(entry, Dimension::Hips, adjusted_hips)
    });

    tracing::debug!(adjusted_waist, adjusted_hips, size = ?best.map(|m| m.label), "Bottom size matched");
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjustments::FitPreference;

    fn measurements(chest: Option<f64>, shoulders: Option<f64>, waist: Option<f64>, hips: Option<f64>) -> Measurements {
        Measurements {
            chest,
            shoulders,
            abdomen: None,
            waist,
            hips,
        }
    }

    #[test]
    fn test_men_top_inside_range() {
        let m = measurements(Some(96.0), Some(47.0), None, None);
        let top = match_top(&m, &FitPreferences::default(), Gender::Homme, Morphotype::Balanced).unwrap();
        assert_eq!(top.label, "M");
        assert_eq!(top.cost, 0.0);
    }

    #[test]
    fn test_women_bottom_tie_keeps_first() {
        // waist 80: 40 costs 4^2, 42 costs 0; hips 98: 40 costs 0, 42 costs 4^2
        let m = measurements(None, None, Some(80.0), Some(98.0));
        let bottom = match_bottom(&m, &FitPreferences::default(), Gender::Femme, Morphotype::Balanced).unwrap();
        assert_eq!(bottom.label, "40");
        assert_eq!(bottom.cost, 16.0);
    }

    #[test]
    fn test_boundary_value_goes_to_smaller_size() {
        // 98 is the shared M/L chest boundary
        let m = measurements(Some(98.0), None, None, None);
        let top = match_top(&m, &FitPreferences::default(), Gender::Homme, Morphotype::Balanced).unwrap();
        assert_eq!(top.label, "M");
    }

    #[test]
    fn test_relaxed_fit_sizes_up() {
        // 97 + 3 = 100 -> L
        let m = measurements(Some(97.0), None, None, None);
        let prefs = FitPreferences::uniform(FitPreference::Relaxed);
        let top = match_top(&m, &prefs, Gender::Homme, Morphotype::Balanced).unwrap();
        assert_eq!(top.label, "L");
    }

    #[test]
    fn test_shoulder_term_is_weighted() {
        // Chest 99 sits in L (0) and is 1 cm past M (1).
        // Shoulders 46 sit in M (0) and are 2 cm short of L (4 * 0.3 = 1.2).
        // M: 1 + 0 = 1.0, L: 0 + 1.2 = 1.2 -> M
        let m = measurements(Some(99.0), Some(46.0), None, None);
        let top = match_top(&m, &FitPreferences::default(), Gender::Homme, Morphotype::Balanced).unwrap();
        assert_eq!(top.label, "M");
        assert!((top.cost - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_athletic_morphotype_uses_chest_offset_for_shoulders() {
        // Chest 97 + 1 = 98 (M boundary), shoulders 48 + 1 = 49 (L range)
        // M: 0 + 1^2 * 0.3 = 0.3; L: 0 + 0 = 0 -> L
        let m = measurements(Some(97.0), Some(48.0), None, None);
        let top = match_top(&m, &FitPreferences::default(), Gender::Homme, Morphotype::Athletic).unwrap();
        assert_eq!(top.label, "L");
    }

    #[test]
    fn test_missing_chest_is_unmatchable() {
        let m = measurements(None, Some(47.0), Some(80.0), Some(98.0));
        assert!(match_top(&m, &FitPreferences::default(), Gender::Homme, Morphotype::Balanced).is_none());
        // Bottom sizing still works
        assert!(match_bottom(&m, &FitPreferences::default(), Gender::Homme, Morphotype::Balanced).is_some());
    }

    #[test]
    fn test_bottom_requires_waist_and_hips() {
        let m = measurements(Some(96.0), None, Some(80.0), Some(0.0));
        assert!(match_bottom(&m, &FitPreferences::default(), Gender::Homme, Morphotype::Balanced).is_none());

        // The abdomen alone does not size bottoms
        let m = Measurements {
            abdomen: Some(80.0),
            hips: Some(98.0),
            ..Default::default()
        };
        assert!(match_bottom(&m, &FitPreferences::default(), Gender::Homme, Morphotype::Balanced).is_none());
    }

    #[test]
    fn test_out_of_chart_measurements_clamp_to_extremes() {
        let tiny = measurements(Some(60.0), None, Some(40.0), Some(60.0));
        let prefs = FitPreferences::default();
        assert_eq!(match_top(&tiny, &prefs, Gender::Femme, Morphotype::Balanced).unwrap().label, "XS");
        assert_eq!(match_bottom(&tiny, &prefs, Gender::Femme, Morphotype::Balanced).unwrap().label, "34");

        let huge = measurements(Some(150.0), None, Some(130.0), Some(150.0));
        assert_eq!(match_top(&huge, &prefs, Gender::Homme, Morphotype::Full).unwrap().label, "XXXL");
        assert_eq!(match_bottom(&huge, &prefs, Gender::Homme, Morphotype::Full).unwrap().label, "52");
    }

    #[test]
    fn test_matching_is_deterministic() {
        let m = measurements(Some(101.3), Some(49.7), Some(86.2), Some(103.9));
        let prefs = FitPreferences::uniform(FitPreference::Tailored);
        let first = (
            match_top(&m, &prefs, Gender::Homme, Morphotype::Athletic),
            match_bottom(&m, &prefs, Gender::Homme, Morphotype::Athletic),
        );
        for _ in 0..50 {
            let again = (
                match_top(&m, &prefs, Gender::Homme, Morphotype::Athletic),
                match_bottom(&m, &prefs, Gender::Homme, Morphotype::Athletic),
            );
            assert_eq!(first, again);
        }
    }
}
