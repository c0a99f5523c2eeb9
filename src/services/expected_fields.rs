//! Projects application data onto the fields a label must be checked for.

use std::borrow::Cow;

use crate::models::beverage::BeverageType;
use crate::models::field::FieldName;
use crate::models::label::{ApplicationData, ExpectedField, SULFITE_DECLARATION_TEXT};
use crate::services::beverage_config;

/// Ordered list of fields to compare for this submission: the beverage
/// type's mandatory fields, then its optional fields, skipping any the
/// application leaves blank.
pub fn build_expected_fields(
    application: &ApplicationData,
    beverage_type: BeverageType,
) -> Vec<ExpectedField> {
    beverage_config::get_config(beverage_type)
        .checked_fields()
        .filter_map(|field_name| {
            let value = application_value(application, field_name)?;
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(ExpectedField {
                field_name,
                expected_value: trimmed.to_string(),
            })
        })
        .collect()
}

/// Value the application claims for `field`, if any.
pub fn application_value(application: &ApplicationData, field: FieldName) -> Option<Cow<'_, str>> {
    match field {
        FieldName::BrandName => text(&application.brand_name),
        FieldName::FancifulName => text(&application.fanciful_name),
        FieldName::ClassType => text(&application.class_type),
        FieldName::AlcoholContent => text(&application.alcohol_content),
        FieldName::NetContents => text(&application.net_contents),
        FieldName::HealthWarning => text(&application.health_warning),
        FieldName::NameAndAddress => text(&application.name_and_address),
        FieldName::QualifyingPhrase => text(&application.qualifying_phrase),
        FieldName::CountryOfOrigin => text(&application.country_of_origin),
        FieldName::GrapeVarietal => text(&application.grape_varietal),
        FieldName::AppellationOfOrigin => text(&application.appellation_of_origin),
        FieldName::VintageYear => text(&application.vintage_year),
        FieldName::SulfiteDeclaration => application
            .contains_sulfites
            .then_some(Cow::Borrowed(SULFITE_DECLARATION_TEXT)),
        FieldName::AgeStatement => text(&application.age_statement),
        FieldName::StateOfDistillation => text(&application.state_of_distillation),
        FieldName::StandardsOfFill => application
            .container_size_ml
            .map(|size| Cow::Owned(format!("{size} mL"))),
    }
}

fn text(value: &Option<String>) -> Option<Cow<'_, str>> {
    value.as_deref().map(Cow::Borrowed)
}
