//! Order aggregate

pub mod model;
pub mod repository;

pub use model::{NewOrder, Order, OrderStatus};
pub use repository::OrderRepositoryInterface;
