pub mod error;
pub mod order;
pub mod revenue;
pub mod view_state;
