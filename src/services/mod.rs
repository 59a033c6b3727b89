pub mod api;
pub mod orders;
