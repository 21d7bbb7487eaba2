pub mod add;
pub mod chart;
pub mod import;
pub mod plan;
pub mod search_by_category;
