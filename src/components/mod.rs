//! UI Components
//!
//! Leptos components mounted into the server-rendered form.

mod cart_table;
mod resource_cart;
mod time_range_notice;

pub use cart_table::CartTable;
pub use resource_cart::ResourceCart;
pub use time_range_notice::TimeRangeNotice;
