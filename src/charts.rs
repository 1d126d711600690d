//! Size Chart Lookup Tables
//!
//! European garment sizing (ISO 3635 / EN 13402 conventions) for men and women,
//! tops and bottoms. Each size maps body dimensions to inclusive centimeter
//! ranges.
//!
//! Tops use the alphabetic scale (XS..XXXL), bottoms the even numeric scale.
//! Only chest/shoulders (tops) and waist/hips (bottoms) drive matching; neck,
//! sleeve, rise and thigh are published reference data.
//!
//! Adjacent sizes share their boundary value (e.g. men's chest M = 94-98,
//! L = 98-102), so a measurement sitting exactly on a boundary is inside both
//! ranges and the tie goes to the smaller size.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::{Dimension, GarmentCategory, Gender};

/// Inclusive centimeter range for one body dimension
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl SizeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Squared distance from `value` to the nearest bound (0 inside the range)
    pub fn squared_distance(&self, value: f64) -> f64 {
        if value < self.min {
            (self.min - value).powi(2)
        } else if value > self.max {
            (value - self.max).powi(2)
        } else {
            0.0
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// One row of a size chart
#[derive(Debug, Clone, Copy)]
pub struct SizeEntry {
    pub label: &'static str,
    pub ranges: &'static [(Dimension, SizeRange)],
}

impl SizeEntry {
    /// Range for a dimension, if this chart publishes it
    pub fn range(&self, dimension: Dimension) -> Option<SizeRange> {
        self.ranges
            .iter()
            .find(|(dim, _)| *dim == dimension)
            .map(|(_, range)| *range)
    }
}

/// A gender- and category-specific chart, ordered smallest to largest
#[derive(Debug)]
pub struct SizeChart {
    pub gender: Gender,
    pub category: GarmentCategory,
    pub entries: &'static [SizeEntry],
}

impl SizeChart {
    pub fn entry(&self, label: &str) -> Option<&SizeEntry> {
        self.entries.iter().find(|e| e.label == label)
    }
}

/// Chart selection by gender and garment category
pub fn chart_for(gender: Gender, category: GarmentCategory) -> &'static SizeChart {
    match (gender, category) {
        (Gender::Homme, GarmentCategory::Top) => &MEN_TOP_CHART,
        (Gender::Homme, GarmentCategory::Bottom) => &MEN_BOTTOM_CHART,
        (Gender::Femme, GarmentCategory::Top) => &WOMEN_TOP_CHART,
        (Gender::Femme, GarmentCategory::Bottom) => &WOMEN_BOTTOM_CHART,
    }
}

/// All four charts, in publication order
pub fn all_charts() -> [&'static SizeChart; 4] {
    [&MEN_TOP_CHART, &WOMEN_TOP_CHART, &MEN_BOTTOM_CHART, &WOMEN_BOTTOM_CHART]
}

// ============================================================================
// Serialization: charts render as { label: { dimension: {min, max} } }
// ============================================================================

struct EntryRanges<'a>(&'a SizeEntry);

impl Serialize for EntryRanges<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.ranges.len()))?;
        for (dim, range) in self.0.ranges {
            map.serialize_entry(dim.key(), range)?;
        }
        map.end()
    }
}

impl Serialize for SizeChart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in self.entries {
            map.serialize_entry(entry.label, &EntryRanges(entry))?;
        }
        map.end()
    }
}

// ============================================================================
// EMBEDDED CHART DATA
// ============================================================================

use Dimension::{Chest, Hips, Neck, Rise, Shoulders, Sleeve, Thigh, Waist};

const fn r(min: f64, max: f64) -> SizeRange {
    SizeRange::new(min, max)
}

pub static MEN_TOP_CHART: SizeChart = SizeChart {
    gender: Gender::Homme,
    category: GarmentCategory::Top,
    entries: &[
        SizeEntry { label: "XS", ranges: &[(Chest, r(86.0, 90.0)), (Shoulders, r(42.0, 44.0)), (Neck, r(36.0, 37.0)), (Sleeve, r(58.0, 60.0))] },
        SizeEntry { label: "S", ranges: &[(Chest, r(90.0, 94.0)), (Shoulders, r(44.0, 46.0)), (Neck, r(37.0, 38.0)), (Sleeve, r(60.0, 62.0))] },
        SizeEntry { label: "M", ranges: &[(Chest, r(94.0, 98.0)), (Shoulders, r(46.0, 48.0)), (Neck, r(38.0, 39.0)), (Sleeve, r(62.0, 64.0))] },
        SizeEntry { label: "L", ranges: &[(Chest, r(98.0, 102.0)), (Shoulders, r(48.0, 50.0)), (Neck, r(39.0, 40.0)), (Sleeve, r(64.0, 66.0))] },
        SizeEntry { label: "XL", ranges: &[(Chest, r(102.0, 106.0)), (Shoulders, r(50.0, 52.0)), (Neck, r(40.0, 41.0)), (Sleeve, r(66.0, 68.0))] },
        SizeEntry { label: "XXL", ranges: &[(Chest, r(106.0, 110.0)), (Shoulders, r(52.0, 54.0)), (Neck, r(41.0, 42.0)), (Sleeve, r(68.0, 70.0))] },
        SizeEntry { label: "XXXL", ranges: &[(Chest, r(110.0, 116.0)), (Shoulders, r(54.0, 56.0)), (Neck, r(42.0, 43.0)), (Sleeve, r(70.0, 72.0))] },
    ],
};

pub static WOMEN_TOP_CHART: SizeChart = SizeChart {
    gender: Gender::Femme,
    category: GarmentCategory::Top,
    entries: &[
        SizeEntry { label: "XS", ranges: &[(Chest, r(82.0, 86.0)), (Shoulders, r(36.0, 38.0)), (Sleeve, r(56.0, 58.0))] },
        SizeEntry { label: "S", ranges: &[(Chest, r(86.0, 90.0)), (Shoulders, r(38.0, 40.0)), (Sleeve, r(58.0, 60.0))] },
        SizeEntry { label: "M", ranges: &[(Chest, r(90.0, 94.0)), (Shoulders, r(40.0, 42.0)), (Sleeve, r(60.0, 62.0))] },
        SizeEntry { label: "L", ranges: &[(Chest, r(94.0, 98.0)), (Shoulders, r(42.0, 44.0)), (Sleeve, r(62.0, 64.0))] },
        SizeEntry { label: "XL", ranges: &[(Chest, r(98.0, 102.0)), (Shoulders, r(44.0, 46.0)), (Sleeve, r(64.0, 66.0))] },
        SizeEntry { label: "XXL", ranges: &[(Chest, r(102.0, 106.0)), (Shoulders, r(46.0, 48.0)), (Sleeve, r(66.0, 68.0))] },
    ],
};

pub static MEN_BOTTOM_CHART: SizeChart = SizeChart {
    gender: Gender::Homme,
    category: GarmentCategory::Bottom,
    entries: &[
        SizeEntry { label: "38", ranges: &[(Waist, r(76.0, 79.0)), (Hips, r(92.0, 95.0)), (Rise, r(24.0, 26.0)), (Thigh, r(56.0, 59.0))] },
        SizeEntry { label: "40", ranges: &[(Waist, r(79.0, 82.0)), (Hips, r(95.0, 98.0)), (Rise, r(25.0, 27.0)), (Thigh, r(58.0, 61.0))] },
        SizeEntry { label: "42", ranges: &[(Waist, r(82.0, 85.0)), (Hips, r(98.0, 101.0)), (Rise, r(26.0, 28.0)), (Thigh, r(60.0, 63.0))] },
        SizeEntry { label: "44", ranges: &[(Waist, r(85.0, 88.0)), (Hips, r(101.0, 104.0)), (Rise, r(27.0, 29.0)), (Thigh, r(62.0, 65.0))] },
        SizeEntry { label: "46", ranges: &[(Waist, r(88.0, 91.0)), (Hips, r(104.0, 107.0)), (Rise, r(28.0, 30.0)), (Thigh, r(64.0, 67.0))] },
        SizeEntry { label: "48", ranges: &[(Waist, r(91.0, 94.0)), (Hips, r(107.0, 110.0)), (Rise, r(29.0, 31.0)), (Thigh, r(66.0, 69.0))] },
        SizeEntry { label: "50", ranges: &[(Waist, r(94.0, 97.0)), (Hips, r(110.0, 113.0)), (Rise, r(30.0, 32.0)), (Thigh, r(68.0, 71.0))] },
        SizeEntry { label: "52", ranges: &[(Waist, r(97.0, 100.0)), (Hips, r(113.0, 116.0)), (Rise, r(31.0, 33.0)), (Thigh, r(70.0, 73.0))] },
    ],
};

pub static WOMEN_BOTTOM_CHART: SizeChart = SizeChart {
    gender: Gender::Femme,
    category: GarmentCategory::Bottom,
    entries: &[
        SizeEntry { label: "34", ranges: &[(Waist, r(60.0, 64.0)), (Hips, r(86.0, 90.0)), (Rise, r(20.0, 22.0)), (Thigh, r(50.0, 53.0))] },
        SizeEntry { label: "36", ranges: &[(Waist, r(64.0, 68.0)), (Hips, r(90.0, 94.0)), (Rise, r(21.0, 23.0)), (Thigh, r(52.0, 55.0))] },
        SizeEntry { label: "38", ranges: &[(Waist, r(68.0, 72.0)), (Hips, r(94.0, 98.0)), (Rise, r(22.0, 24.0)), (Thigh, r(54.0, 57.0))] },
        SizeEntry { label: "40", ranges: &[(Waist, r(72.0, 76.0)), (Hips, r(98.0, 102.0)), (Rise, r(23.0, 25.0)), (Thigh, r(56.0, 59.0))] },
        SizeEntry { label: "42", ranges: &[(Waist, r(76.0, 80.0)), (Hips, r(102.0, 106.0)), (Rise, r(24.0, 26.0)), (Thigh, r(58.0, 61.0))] },
        SizeEntry { label: "44", ranges: &[(Waist, r(80.0, 84.0)), (Hips, r(106.0, 110.0)), (Rise, r(25.0, 27.0)), (Thigh, r(60.0, 63.0))] },
        SizeEntry { label: "46", ranges: &[(Waist, r(84.0, 88.0)), (Hips, r(110.0, 114.0)), (Rise, r(26.0, 28.0)), (Thigh, r(62.0, 65.0))] },
        SizeEntry { label: "48", ranges: &[(Waist, r(88.0, 92.0)), (Hips, r(114.0, 118.0)), (Rise, r(27.0, 29.0)), (Thigh, r(64.0, 67.0))] },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_are_well_formed() {
        for chart in all_charts() {
            for entry in chart.entries {
                for (dim, range) in entry.ranges {
                    assert!(
                        range.min <= range.max,
                        "{:?}/{:?} size {} has inverted {} range",
                        chart.gender, chart.category, entry.label, dim.key()
                    );
                }
            }
        }
    }

    #[test]
    fn test_adjacent_sizes_are_non_decreasing() {
        for chart in all_charts() {
            for pair in chart.entries.windows(2) {
                for (dim, lower) in pair[0].ranges {
                    let upper = pair[1].range(*dim).expect("dimension present in every row");
                    assert!(upper.min >= lower.min, "{} -> {} min decreases", pair[0].label, pair[1].label);
                    assert!(upper.max >= lower.max, "{} -> {} max decreases", pair[0].label, pair[1].label);
                }
            }
        }
    }

    #[test]
    fn test_matching_dimensions_touch_without_gaps() {
        // Chest/shoulders (tops) and waist/hips (bottoms) share a boundary
        // value between neighbours: no gaps, overlap only at the edge.
        for chart in all_charts() {
            let dims: &[Dimension] = match chart.category {
                GarmentCategory::Top => &[Chest, Shoulders],
                GarmentCategory::Bottom => &[Waist, Hips],
            };
            for pair in chart.entries.windows(2) {
                for dim in dims {
                    let lower = pair[0].range(*dim).unwrap();
                    let upper = pair[1].range(*dim).unwrap();
                    assert_eq!(lower.max, upper.min, "{} -> {} {}", pair[0].label, pair[1].label, dim.key());
                }
            }
        }
    }

    #[test]
    fn test_squared_distance() {
        let range = SizeRange::new(94.0, 98.0);
        assert_eq!(range.squared_distance(96.0), 0.0);
        assert_eq!(range.squared_distance(94.0), 0.0);
        assert_eq!(range.squared_distance(98.0), 0.0);
        assert_eq!(range.squared_distance(91.0), 9.0);
        assert_eq!(range.squared_distance(100.0), 4.0);
        assert_eq!(range.midpoint(), 96.0);
    }

    #[test]
    fn test_chart_selection() {
        assert_eq!(chart_for(Gender::Homme, GarmentCategory::Top).entries.len(), 7);
        assert_eq!(chart_for(Gender::Femme, GarmentCategory::Top).entries.len(), 6);
        assert_eq!(chart_for(Gender::Homme, GarmentCategory::Bottom).entries[0].label, "38");
        assert_eq!(chart_for(Gender::Femme, GarmentCategory::Bottom).entries[0].label, "34");
    }

    #[test]
    fn test_chart_serializes_in_order() {
        let json = serde_json::to_string(&MEN_TOP_CHART).unwrap();
        let xs = json.find("\"XS\"").unwrap();
        let xxxl = json.find("\"XXXL\"").unwrap();
        assert!(xs < xxxl);

        let value = serde_json::to_value(&WOMEN_BOTTOM_CHART).unwrap();
        assert_eq!(value["40"]["waist"]["min"], 72.0);
        assert_eq!(value["40"]["hips"]["max"], 102.0);
    }
}
