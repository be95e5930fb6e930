//! SeaORM implementations of the domain persistence gateways

pub mod community_repository;
pub mod inhabitant_repository;
pub mod order_repository;
pub mod user_repository;

pub use community_repository::CommunityRepository;
pub use inhabitant_repository::InhabitantRepository;
pub use order_repository::OrderRepository;
pub use user_repository::UserRepository;
