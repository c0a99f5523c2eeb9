use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Every label field the engine knows how to check.
///
/// The set is closed: normalization and comparison dispatch on it with an
/// exhaustive `match`, so adding a field forces every rule to take a position.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldName {
    BrandName,
    FancifulName,
    ClassType,
    AlcoholContent,
    NetContents,
    HealthWarning,
    NameAndAddress,
    QualifyingPhrase,
    CountryOfOrigin,
    GrapeVarietal,
    AppellationOfOrigin,
    VintageYear,
    SulfiteDeclaration,
    AgeStatement,
    StateOfDistillation,
    StandardsOfFill,
}

impl FieldName {
    /// Human-readable label used in reasoning strings and review rows.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::BrandName => "brand name",
            FieldName::FancifulName => "fanciful name",
            FieldName::ClassType => "class/type",
            FieldName::AlcoholContent => "alcohol content",
            FieldName::NetContents => "net contents",
            FieldName::HealthWarning => "health warning",
            FieldName::NameAndAddress => "name and address",
            FieldName::QualifyingPhrase => "qualifying phrase",
            FieldName::CountryOfOrigin => "country of origin",
            FieldName::GrapeVarietal => "grape varietal",
            FieldName::AppellationOfOrigin => "appellation of origin",
            FieldName::VintageYear => "vintage year",
            FieldName::SulfiteDeclaration => "sulfite declaration",
            FieldName::AgeStatement => "age statement",
            FieldName::StateOfDistillation => "state of distillation",
            FieldName::StandardsOfFill => "standards of fill",
        }
    }
}

/// How much textual variation a field tolerates before it stops matching.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StrictnessLevel {
    Strict,
    #[default]
    Moderate,
    Lenient,
}
