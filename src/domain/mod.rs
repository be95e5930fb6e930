//! Core business entities, validation rules and gateway traits
//!
//! The store enforces neither uniqueness nor references; every integrity
//! rule lives in the service layer on top of these traits.

pub mod community;
pub mod cpf;
pub mod error;
pub mod inhabitant;
pub mod order;
pub mod user;
pub mod violations;

pub use community::{Community, CommunityRepositoryInterface, NewCommunity};
pub use error::{DomainError, DomainResult, FieldViolation};
pub use inhabitant::{Address, Inhabitant, InhabitantRepositoryInterface, NewInhabitant};
pub use order::{NewOrder, Order, OrderRepositoryInterface, OrderStatus};
pub use user::{NewUser, User, UserNameUpdate, UserRepositoryInterface, UserRole};
pub use violations::collect_violations;
