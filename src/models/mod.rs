pub mod expense;
pub mod report;
