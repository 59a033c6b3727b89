pub mod use_orders;
