//! 사용자 데이터 액세스 계층
//!
//! - [`UserRepository`] - 서비스가 의존하는 저장소 trait
//! - [`MongoUserRepository`] - MongoDB + Redis 캐싱 구현

pub mod user_repository;
pub mod user_repo;

pub use user_repository::UserRepository;
pub use user_repo::MongoUserRepository;
