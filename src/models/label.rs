use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::models::field::FieldName;

/// Field values claimed on a COLA application.
///
/// Only the fields relevant to the beverage type are ever read; the rest are
/// carried so one shape serves every category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ApplicationData {
    #[garde(length(max = 200))]
    pub brand_name: Option<String>,

    #[garde(length(max = 200))]
    pub fanciful_name: Option<String>,

    #[garde(length(max = 200))]
    pub class_type: Option<String>,

    #[garde(length(max = 100))]
    pub alcohol_content: Option<String>,

    #[garde(length(max = 100))]
    pub net_contents: Option<String>,

    #[garde(length(max = 1000))]
    pub health_warning: Option<String>,

    #[garde(length(max = 500))]
    pub name_and_address: Option<String>,

    #[garde(length(max = 200))]
    pub qualifying_phrase: Option<String>,

    #[garde(length(max = 100))]
    pub country_of_origin: Option<String>,

    #[garde(length(max = 200))]
    pub grape_varietal: Option<String>,

    #[garde(length(max = 200))]
    pub appellation_of_origin: Option<String>,

    #[garde(length(max = 20))]
    pub vintage_year: Option<String>,

    #[garde(skip)]
    pub contains_sulfites: bool,

    #[garde(length(max = 200))]
    pub age_statement: Option<String>,

    #[garde(length(max = 100))]
    pub state_of_distillation: Option<String>,

    /// Declared container size in mL, used for the standards-of-fill check.
    #[garde(range(min = 1, max = 100_000))]
    pub container_size_ml: Option<u32>,
}

/// Literal rendered for a sulfite declaration claimed on the application.
pub const SULFITE_DECLARATION_TEXT: &str = "Contains Sulfites";

/// Optional region of the label image where a value was read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One value produced by the upstream OCR / vision extractor.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExtractedField {
    #[garde(skip)]
    pub field_name: FieldName,

    #[garde(length(max = 2000))]
    pub value: Option<String>,

    /// Extractor confidence in `[0, 1]`.
    #[garde(range(min = 0.0, max = 1.0))]
    #[serde(default)]
    pub confidence: f64,

    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

/// A field the comparator must score, with the value claimed on the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedField {
    pub field_name: FieldName,
    pub expected_value: String,
}

/// Per-field comparison outcome.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VerdictStatus {
    Match,
    Mismatch,
    NotFound,
    NeedsCorrection,
}

/// The comparator's judgment on one field. Immutable once produced; review
/// overrides are recorded separately and flattened into [`VerdictSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonVerdict {
    pub field_name: FieldName,
    pub expected_value: String,
    pub extracted_value: Option<String>,
    pub status: VerdictStatus,
    /// 0-100.
    pub confidence: u8,
    pub reasoning: String,
}

/// The slice of a verdict the status resolver needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictSummary {
    pub field_name: FieldName,
    pub status: VerdictStatus,
}

impl From<&ComparisonVerdict> for VerdictSummary {
    fn from(verdict: &ComparisonVerdict) -> Self {
        Self {
            field_name: verdict.field_name,
            status: verdict.status,
        }
    }
}

/// A specialist's decision on one field during review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOverride {
    pub field_name: FieldName,
    pub status: VerdictStatus,
}
