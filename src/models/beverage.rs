use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::models::field::FieldName;

/// TTB beverage categories per 27 CFR Parts 4, 5, 7.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
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
pub enum BeverageType {
    DistilledSpirits,
    Wine,
    MaltBeverage,
}

/// Static labeling rules for one beverage category.
#[derive(Debug)]
pub struct BeverageTypeConfig {
    /// Display name.
    pub label: &'static str,
    /// Fields every label of this category must carry, in review order.
    pub mandatory_fields: &'static [FieldName],
    /// Fields checked only when the application declares them.
    pub optional_fields: &'static [FieldName],
    /// Standards of fill in mL. `None` means any size is permitted.
    pub valid_sizes_ml: Option<&'static [u32]>,
}

impl BeverageTypeConfig {
    /// Mandatory fields followed by optional fields.
    pub fn checked_fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.mandatory_fields
            .iter()
            .chain(self.optional_fields.iter())
            .copied()
    }

    pub fn is_mandatory(&self, field: FieldName) -> bool {
        self.mandatory_fields.contains(&field)
    }
}
