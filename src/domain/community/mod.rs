//! Community aggregate

pub mod model;
pub mod repository;

pub use model::{Community, NewCommunity};
pub use repository::CommunityRepositoryInterface;
