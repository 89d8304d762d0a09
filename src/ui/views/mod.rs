pub mod catalog;
pub mod quiz;
pub mod results;
