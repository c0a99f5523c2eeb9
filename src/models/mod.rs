pub mod beverage;
pub mod field;
pub mod label;
pub mod status;
pub mod verification;
