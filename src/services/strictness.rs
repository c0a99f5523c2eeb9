//! Per-field strictness policy.
//!
//! Settings live outside the engine; this is the value object callers hand to
//! the comparator, seeded with the regulatory defaults.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::models::field::{FieldName, StrictnessLevel};

#[derive(Debug, thiserror::Error)]
pub enum StrictnessError {
    #[error("Malformed strictness override '{0}', expected field=level")]
    Malformed(String),

    #[error("Unknown field name '{0}'")]
    UnknownField(String),

    #[error("Unknown strictness level '{0}', expected strict, moderate or lenient")]
    UnknownLevel(String),
}

/// Default strictness for a field.
pub fn default_strictness(field: FieldName) -> StrictnessLevel {
    match field {
        FieldName::BrandName
        | FieldName::ClassType
        | FieldName::AlcoholContent
        | FieldName::NetContents
        | FieldName::HealthWarning
        | FieldName::VintageYear
        | FieldName::SulfiteDeclaration
        | FieldName::StandardsOfFill => StrictnessLevel::Strict,
        FieldName::FancifulName => StrictnessLevel::Lenient,
        FieldName::NameAndAddress
        | FieldName::QualifyingPhrase
        | FieldName::CountryOfOrigin
        | FieldName::GrapeVarietal
        | FieldName::AppellationOfOrigin
        | FieldName::AgeStatement
        | FieldName::StateOfDistillation => StrictnessLevel::Moderate,
    }
}

/// Default strictness for every field.
pub fn get_field_strictness_defaults() -> BTreeMap<FieldName, StrictnessLevel> {
    FieldName::iter()
        .map(|field| (field, default_strictness(field)))
        .collect()
}

/// Field -> strictness lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StrictnessPolicy {
    levels: BTreeMap<FieldName, StrictnessLevel>,
}

impl Default for StrictnessPolicy {
    fn default() -> Self {
        Self {
            levels: get_field_strictness_defaults(),
        }
    }
}

impl StrictnessPolicy {
    pub fn level_for(&self, field: FieldName) -> StrictnessLevel {
        self.levels
            .get(&field)
            .copied()
            .unwrap_or_else(|| default_strictness(field))
    }

    /// A copy of this policy with `overrides` layered on top.
    pub fn with_overrides<'a, I>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a FieldName, &'a StrictnessLevel)>,
    {
        let mut levels = self.levels.clone();
        levels.extend(overrides.into_iter().map(|(field, level)| (*field, *level)));
        Self { levels }
    }

    /// Parse `field=level,field=level` (as found in `STRICTNESS_OVERRIDES`)
    /// on top of the defaults.
    pub fn from_override_str(raw: &str) -> Result<Self, StrictnessError> {
        let mut overrides = BTreeMap::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (field, level) = entry
                .split_once('=')
                .ok_or_else(|| StrictnessError::Malformed(entry.to_string()))?;
            let field = FieldName::from_str(field.trim())
                .map_err(|_| StrictnessError::UnknownField(field.trim().to_string()))?;
            let level = StrictnessLevel::from_str(level.trim())
                .map_err(|_| StrictnessError::UnknownLevel(level.trim().to_string()))?;
            overrides.insert(field, level);
        }
        Ok(Self::default().with_overrides(&overrides))
    }

    pub fn levels(&self) -> &BTreeMap<FieldName, StrictnessLevel> {
        &self.levels
    }
}
