//! Outfit recommendations and wardrobe guidance.
//!
//! Static content; the only request-specific values are the recommended
//! sizes threaded into each outfit piece.

use serde::Serialize;

use crate::analysis::BodyShape;
use crate::types::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClothingCategories {
    pub top: &'static [&'static str],
    pub bottom: &'static [&'static str],
}

pub fn clothing_categories(gender: Gender) -> ClothingCategories {
    match gender {
        Gender::Homme => ClothingCategories {
            top: &["Dress Shirts", "Polo Shirts", "Knitwear", "Blazers", "Suits", "Casual Shirts"],
            bottom: &["Dress Trousers", "Chinos", "Jeans", "Shorts", "Formal Wear"],
        },
        Gender::Femme => ClothingCategories {
            top: &["Blouses", "Knitwear", "Blazers", "Dresses", "Casual Tops", "Formal Wear"],
            bottom: &["Trousers", "Skirts", "Jeans", "Formal Wear", "Casual Bottoms"],
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitPiece {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub size: Option<String>,
    pub icon: &'static str,
    pub fit_notes: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorSwatch {
    pub name: &'static str,
    pub hex: &'static str,
    pub usage: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outfit {
    pub name: &'static str,
    pub occasion: &'static str,
    pub pieces: Vec<OutfitPiece>,
    pub styling_tips: &'static [&'static str],
    pub color_palette: &'static [ColorSwatch],
    pub investment_level: &'static str,
    pub versatility_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub outfits: Vec<Outfit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StylingPhilosophy {
    pub core_principle: &'static str,
    pub approach: &'static str,
    pub mindset: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonalAdaptation {
    pub colors: &'static [&'static str],
    pub fabrics: &'static [&'static str],
    pub styling: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonalAdaptations {
    pub spring: SeasonalAdaptation,
    pub summer: SeasonalAdaptation,
    pub autumn: SeasonalAdaptation,
    pub winter: SeasonalAdaptation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentPriority {
    pub item: &'static str,
    pub priority: u8,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitRecommendations {
    pub categories: Vec<OutfitCategory>,
    pub styling_philosophy: StylingPhilosophy,
    pub seasonal_adaptations: SeasonalAdaptations,
    pub investment_priorities: &'static [InvestmentPriority],
}

// ============================================================================
// Static content
// ============================================================================

const STYLING_PHILOSOPHY: StylingPhilosophy = StylingPhilosophy {
    core_principle: "Enhance your natural proportions through strategic styling",
    approach: "Quality over quantity - invest in pieces that work with your body",
    mindset: "Confidence comes from clothes that fit perfectly and feel authentic to you",
};

const SEASONAL_ADAPTATIONS: SeasonalAdaptations = SeasonalAdaptations {
    spring: SeasonalAdaptation {
        colors: &["Fresh blues", "Soft greens", "Cream"],
        fabrics: &["Lightweight wools", "Cotton blends", "Linen mixes"],
        styling: "Layer strategically for changing temperatures",
    },
    summer: SeasonalAdaptation {
        colors: &["Navy", "White", "Soft pastels"],
        fabrics: &["Linen", "Cotton", "Breathable blends"],
        styling: "Focus on breathable fabrics and lighter colors",
    },
    autumn: SeasonalAdaptation {
        colors: &["Rich browns", "Deep burgundy", "Forest green"],
        fabrics: &["Wool", "Cashmere", "Tweed"],
        styling: "Embrace richer textures and deeper colors",
    },
    winter: SeasonalAdaptation {
        colors: &["Charcoal", "Navy", "Rich jewel tones"],
        fabrics: &["Heavy wools", "Cashmere", "Quality outerwear"],
        styling: "Layer for warmth while maintaining silhouette",
    },
};

static INVESTMENT_PRIORITIES: &[InvestmentPriority] = &[
    InvestmentPriority { item: "Well-fitted suit", priority: 1, reason: "Foundation of professional wardrobe" },
    InvestmentPriority { item: "Quality dress shirts", priority: 2, reason: "Versatile and frequently worn" },
    InvestmentPriority { item: "Leather dress shoes", priority: 3, reason: "Complete professional look" },
];

/// General recommendations attached to every result
pub const PROFESSIONAL_RECOMMENDATIONS: &[&str] = &[
    "Invest in quality basics that fit your body type perfectly",
    "Consider professional tailoring for key pieces",
    "Build a capsule wardrobe around your ideal silhouettes",
    "Focus on fit over trends for professional success",
];

fn executive_outfit_men(top: Option<&str>, bottom: Option<&str>) -> Outfit {
    Outfit {
        name: "Executive Power Suit",
        occasion: "Board meetings, presentations",
        pieces: vec![
            OutfitPiece {
                kind: "Suit Jacket",
                description: "Navy or charcoal wool, structured shoulders",
                size: top.map(str::to_string),
                icon: "🧥",
                fit_notes: "Structured fit",
            },
            OutfitPiece {
                kind: "Dress Shirt",
                description: "White or light blue, French cuffs",
                size: top.map(str::to_string),
                icon: "👔",
                fit_notes: "Tailored fit through body",
            },
            OutfitPiece {
                kind: "Dress Trousers",
                description: "Matching suit fabric, proper break",
                size: bottom.map(str::to_string),
                icon: "👖",
                fit_notes: "Tailored through hip and thigh",
            },
        ],
        styling_tips: &[
            "Choose structured shoulders to complement your build",
            "Ensure adequate room through chest and shoulders",
            "Tailor waist for optimal silhouette",
        ],
        color_palette: &[
            ColorSwatch { name: "Navy", hex: "#1e3a8a", usage: "Primary suit color" },
            ColorSwatch { name: "White", hex: "#ffffff", usage: "Shirt base" },
            ColorSwatch { name: "Silver", hex: "#94a3b8", usage: "Accessories" },
        ],
        investment_level: "High",
        versatility_score: 95,
    }
}

fn executive_outfit_women(shape: BodyShape, top: Option<&str>) -> Outfit {
    let blazer_fit = if shape == BodyShape::Hourglass {
        "Fitted through waist"
    } else {
        "Structured silhouette"
    };

    Outfit {
        name: "Executive Power Suit",
        occasion: "C-suite meetings, presentations",
        pieces: vec![
            OutfitPiece {
                kind: "Blazer",
                description: "Structured shoulders, quality wool",
                size: top.map(str::to_string),
                icon: "🧥",
                fit_notes: blazer_fit,
            },
            OutfitPiece {
                kind: "Blouse",
                description: "Silk or quality cotton, professional neckline",
                size: top.map(str::to_string),
                icon: "👚",
                fit_notes: "Tailored fit, appropriate coverage",
            },
        ],
        styling_tips: &[
            "Emphasize your natural waist with fitted styles",
            "Choose pieces that follow your curves",
            "Avoid boxy cuts that hide your silhouette",
        ],
        color_palette: &[
            ColorSwatch { name: "Navy", hex: "#1e3a8a", usage: "Primary suit" },
            ColorSwatch { name: "Ivory", hex: "#fffbeb", usage: "Blouse" },
        ],
        investment_level: "High",
        versatility_score: 90,
    }
}

/// Outfit recommendations with the recommended sizes filled in
pub fn outfit_recommendations(
    gender: Gender,
    shape: BodyShape,
    top_size: Option<&str>,
    bottom_size: Option<&str>,
) -> OutfitRecommendations {
    let outfit = match gender {
        Gender::Homme => executive_outfit_men(top_size, bottom_size),
        Gender::Femme => executive_outfit_women(shape, top_size),
    };

    OutfitRecommendations {
        categories: vec![OutfitCategory {
            name: "Executive Professional",
            icon: "💼",
            outfits: vec![outfit],
        }],
        styling_philosophy: STYLING_PHILOSOPHY,
        seasonal_adaptations: SEASONAL_ADAPTATIONS,
        investment_priorities: INVESTMENT_PRIORITIES,
    }
}

/// Tailoring suggestions for the virtual fitting assessment
pub fn suggest_adjustments(shape: BodyShape) -> Vec<&'static str> {
    match shape {
        BodyShape::AthleticVShape => vec![
            "Consider athletic-cut shirts for optimal shoulder fit",
            "Tailor waist on jackets for best silhouette",
        ],
        BodyShape::Hourglass => vec![
            "Ensure waist definition in all fitted pieces",
            "Consider tailoring for perfect curve accommodation",
        ],
        BodyShape::Rectangle => vec![
            "Add structure through tailoring and fit",
            "Consider pieces that create waist definition",
        ],
        _ => vec!["Standard fit should work well for your proportions"],
    }
}
