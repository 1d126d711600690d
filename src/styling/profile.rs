//! Styling profile lookup tables keyed by body shape.

use serde::Serialize;

use crate::analysis::BodyShape;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorAnalysis {
    pub neutrals: &'static [&'static str],
    pub accent_colors: &'static [&'static str],
    pub avoid_colors: &'static [&'static str],
    pub color_strategy: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FabricGuidance {
    pub recommended: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub notes: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SilhouetteGuide {
    pub tops: &'static [&'static str],
    pub bottoms: &'static [&'static str],
    pub dresses: &'static [&'static str],
    pub outerwear: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StylingPrinciple {
    pub principle: &'static str,
    pub description: &'static str,
    pub application: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShoppingStrategy {
    pub priority: &'static str,
    pub key_pieces: &'static [&'static str],
    pub sizing_strategy: &'static str,
    pub investment_pieces: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StylingProfile {
    pub colors: ColorAnalysis,
    pub fabrics: FabricGuidance,
    pub silhouettes: SilhouetteGuide,
    pub principles: Vec<StylingPrinciple>,
    pub shopping_strategy: ShoppingStrategy,
}

pub fn styling_profile(shape: BodyShape) -> StylingProfile {
    StylingProfile {
        colors: colors_for(shape),
        fabrics: fabrics_for(shape),
        silhouettes: silhouettes_for(shape),
        principles: principles_for(shape),
        shopping_strategy: shopping_strategy_for(shape),
    }
}

// ============================================================================
// Colors
// ============================================================================

const NEUTRALS: &[&str] = &["Navy", "Charcoal", "Cream", "Camel", "Black"];

pub fn colors_for(shape: BodyShape) -> ColorAnalysis {
    let (accent_colors, color_strategy): (&'static [&'static str], &'static str) = match shape {
        BodyShape::AthleticVShape | BodyShape::InvertedTriangle => (
            &["Deep Blues", "Forest Green", "Burgundy"],
            "Use darker colors on top, lighter on bottom to balance proportions",
        ),
        BodyShape::Pear => (
            &["Bright Blues", "Coral", "Emerald"],
            "Use brighter colors on top, darker on bottom to balance proportions",
        ),
        BodyShape::Hourglass => (
            &["Rich Jewel Tones", "Classic Red", "Royal Blue"],
            "Can wear bold colors confidently, emphasize waist with contrasting belts",
        ),
        BodyShape::Rectangle => (
            &["Vibrant Colors", "Patterns", "Textures"],
            "Use color blocking and patterns to create visual interest",
        ),
        _ => (&[], ""),
    };

    ColorAnalysis {
        neutrals: NEUTRALS,
        accent_colors,
        avoid_colors: &[],
        color_strategy,
    }
}

// ============================================================================
// Fabrics
// ============================================================================

pub fn fabrics_for(shape: BodyShape) -> FabricGuidance {
    match shape {
        BodyShape::AthleticVShape | BodyShape::InvertedTriangle => FabricGuidance {
            recommended: &["Structured cottons", "Wool blends", "Technical fabrics"],
            avoid: &["Clingy materials", "Horizontal stripes on top"],
            notes: "Choose fabrics that accommodate muscle mass without clinging",
        },
        BodyShape::Hourglass => FabricGuidance {
            recommended: &["Fitted knits", "Structured wovens", "Draping fabrics"],
            avoid: &["Boxy cuts", "Stiff fabrics that hide curves"],
            notes: "Choose fabrics that follow your natural silhouette",
        },
        BodyShape::Rectangle => FabricGuidance {
            recommended: &["Textured fabrics", "Patterns", "Layering pieces"],
            avoid: &["Straight, unstructured pieces"],
            notes: "Use fabric texture and layering to create visual interest",
        },
        _ => FabricGuidance {
            recommended: &["Versatile basics", "Quality fabrics"],
            avoid: &["Poor quality materials"],
            notes: "Focus on fit and quality over trends",
        },
    }
}

// ============================================================================
// Silhouettes
// ============================================================================

pub fn silhouettes_for(shape: BodyShape) -> SilhouetteGuide {
    match shape {
        BodyShape::AthleticVShape => SilhouetteGuide {
            tops: &["Fitted shirts", "V-necks", "Athletic cuts"],
            bottoms: &["Straight leg", "Slim fit", "Tapered cuts"],
            dresses: &[],
            outerwear: &["Structured blazers", "Fitted jackets"],
        },
        BodyShape::Hourglass => SilhouetteGuide {
            tops: &["Fitted blouses", "Wrap tops", "Belted styles"],
            bottoms: &["High-waisted", "Fitted through hip", "A-line skirts"],
            dresses: &["Fit and flare", "Wrap dresses", "Sheath dresses"],
            outerwear: &["Belted coats", "Fitted blazers"],
        },
        BodyShape::Rectangle => SilhouetteGuide {
            tops: &["Peplum styles", "Layered looks", "Textured pieces"],
            bottoms: &["Bootcut", "Wide leg", "Pleated styles"],
            dresses: &["A-line", "Empire waist", "Shift with accessories"],
            outerwear: &["Structured jackets", "Belted styles"],
        },
        _ => SilhouetteGuide {
            tops: &[],
            bottoms: &[],
            dresses: &[],
            outerwear: &[],
        },
    }
}

// ============================================================================
// Principles
// ============================================================================

const CORE_PRINCIPLES: [StylingPrinciple; 3] = [
    StylingPrinciple {
        principle: "Proportion",
        description: "Create visual balance through strategic styling",
        application: "Use clothing to enhance your natural proportions",
    },
    StylingPrinciple {
        principle: "Fit",
        description: "Proper fit is the foundation of great style",
        application: "Invest in tailoring for key pieces",
    },
    StylingPrinciple {
        principle: "Quality",
        description: "Choose quality over quantity",
        application: "Build a capsule wardrobe with versatile pieces",
    },
];

pub fn principles_for(shape: BodyShape) -> Vec<StylingPrinciple> {
    let mut principles = CORE_PRINCIPLES.to_vec();
    match shape {
        BodyShape::AthleticVShape | BodyShape::InvertedTriangle => principles.push(StylingPrinciple {
            principle: "Balance",
            description: "Balance broad shoulders with lower body volume",
            application: "Choose lighter colors and fuller cuts for bottoms",
        }),
        BodyShape::Hourglass => principles.push(StylingPrinciple {
            principle: "Enhancement",
            description: "Emphasize your natural waist",
            application: "Use belts, fitted styles, and waist-defining cuts",
        }),
        _ => {}
    }
    principles
}

// ============================================================================
// Shopping strategy
// ============================================================================

pub fn shopping_strategy_for(shape: BodyShape) -> ShoppingStrategy {
    match shape {
        BodyShape::AthleticVShape => ShoppingStrategy {
            priority: "Find brands with athletic fits",
            key_pieces: &["Well-fitted blazers", "Athletic-cut shirts", "Tapered trousers"],
            sizing_strategy: "Size for shoulders and chest, tailor waist if needed",
            investment_pieces: &["Custom shirts", "Tailored suits", "Quality knitwear"],
        },
        BodyShape::Hourglass => ShoppingStrategy {
            priority: "Emphasize waist definition",
            key_pieces: &["Wrap dresses", "Belted blazers", "High-waisted bottoms"],
            sizing_strategy: "Size for bust and hips, ensure waist definition",
            investment_pieces: &["Tailored dresses", "Quality belts", "Fitted coats"],
        },
        BodyShape::Rectangle => ShoppingStrategy {
            priority: "Create visual interest and curves",
            key_pieces: &["Textured fabrics", "Layering pieces", "Statement accessories"],
            sizing_strategy: "Focus on creating shape through styling",
            investment_pieces: &["Structured blazers", "Quality accessories", "Versatile basics"],
        },
        _ => ShoppingStrategy {
            priority: "Focus on fit and quality",
            key_pieces: &["Well-fitted basics", "Quality fabrics", "Versatile pieces"],
            sizing_strategy: "Prioritize proper fit over trends",
            investment_pieces: &["Tailored basics", "Quality outerwear", "Classic accessories"],
        },
    }
}
