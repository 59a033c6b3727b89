pub mod delete_confirm;
pub mod order_list;
pub mod order_modal;
pub mod order_table;
pub mod pagination;
pub mod revenue_chart;

pub use order_list::OrderListView;
