pub mod beverage_config;
pub mod comparison;
pub mod expected_fields;
pub mod normalize;
pub mod status;
pub mod strictness;
pub mod validation;
