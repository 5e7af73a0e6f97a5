pub mod analyze;
pub mod lint;
pub mod list;
pub mod variants;
