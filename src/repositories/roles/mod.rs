//! 역할 데이터 액세스 계층
//!
//! - [`RoleRepository`] - 서비스가 의존하는 저장소 trait
//! - [`MongoRoleRepository`] - MongoDB 구현 (역할은 수가 적어 캐싱하지 않음)

pub mod role_repository;
pub mod role_repo;

pub use role_repository::RoleRepository;
pub use role_repo::MongoRoleRepository;
