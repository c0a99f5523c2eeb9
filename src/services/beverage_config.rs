//! Beverage type registry.
//!
//! Mandatory/optional field sets and standards of fill per 27 CFR Part 5
//! (Distilled Spirits), Part 4 (Wine) and Part 7 (Malt Beverages).

use crate::models::beverage::{BeverageType, BeverageTypeConfig};
use crate::models::field::FieldName;

// ── Distilled Spirits (27 CFR 5.203) ────────────────────────────────────

/// Authorized standards of fill for distilled spirits (in mL).
pub const DISTILLED_SPIRITS_SIZES_ML: &[u32] = &[
    50, 100, 187, 200, 250, 331, 350, 355, 375, 475, 500, 570, 700, 710, 720, 750, 900, 945,
    1000, 1500, 1750, 1800, 2000, 3000, 3750,
];

static DISTILLED_SPIRITS: BeverageTypeConfig = BeverageTypeConfig {
    label: "Distilled Spirits",
    mandatory_fields: &[
        FieldName::BrandName,
        FieldName::ClassType,
        FieldName::AlcoholContent,
        FieldName::NetContents,
        FieldName::NameAndAddress,
        FieldName::HealthWarning,
    ],
    optional_fields: &[
        FieldName::FancifulName,
        FieldName::QualifyingPhrase,
        FieldName::CountryOfOrigin,
        FieldName::AgeStatement,
        FieldName::StateOfDistillation,
    ],
    valid_sizes_ml: Some(DISTILLED_SPIRITS_SIZES_ML),
};

// ── Wine (27 CFR 4.72) ──────────────────────────────────────────────────

/// Authorized standards of fill for wine (in mL).
pub const WINE_SIZES_ML: &[u32] = &[
    50, 100, 180, 187, 200, 250, 300, 330, 360, 375, 473, 500, 550, 568, 600, 620, 700, 720,
    750, 1000, 1500, 1800, 2250, 3000,
];

static WINE: BeverageTypeConfig = BeverageTypeConfig {
    label: "Wine",
    mandatory_fields: &[
        FieldName::BrandName,
        FieldName::ClassType,
        FieldName::AlcoholContent,
        FieldName::NetContents,
        FieldName::NameAndAddress,
        FieldName::HealthWarning,
    ],
    optional_fields: &[
        FieldName::FancifulName,
        FieldName::QualifyingPhrase,
        FieldName::CountryOfOrigin,
        FieldName::GrapeVarietal,
        FieldName::AppellationOfOrigin,
        FieldName::VintageYear,
        FieldName::SulfiteDeclaration,
    ],
    valid_sizes_ml: Some(WINE_SIZES_ML),
};

// ── Malt Beverages (27 CFR 7.70) ────────────────────────────────────────

// Malt beverages have no standards of fill.
static MALT_BEVERAGE: BeverageTypeConfig = BeverageTypeConfig {
    label: "Malt Beverage",
    mandatory_fields: &[
        FieldName::BrandName,
        FieldName::ClassType,
        FieldName::NetContents,
        FieldName::NameAndAddress,
        FieldName::HealthWarning,
    ],
    optional_fields: &[
        FieldName::FancifulName,
        FieldName::AlcoholContent,
        FieldName::QualifyingPhrase,
        FieldName::CountryOfOrigin,
        FieldName::SulfiteDeclaration,
    ],
    valid_sizes_ml: None,
};

/// Look up the labeling rules for a beverage type.
pub fn get_config(beverage_type: BeverageType) -> &'static BeverageTypeConfig {
    match beverage_type {
        BeverageType::DistilledSpirits => &DISTILLED_SPIRITS,
        BeverageType::Wine => &WINE,
        BeverageType::MaltBeverage => &MALT_BEVERAGE,
    }
}

/// Whether `size_ml` is an authorized standard of fill for the beverage type.
pub fn is_valid_size(beverage_type: BeverageType, size_ml: u32) -> bool {
    match get_config(beverage_type).valid_sizes_ml {
        Some(sizes) => sizes.contains(&size_ml),
        None => true,
    }
}
