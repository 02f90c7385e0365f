pub mod country;
pub mod catalog;
