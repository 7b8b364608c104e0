//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 [`UserRepository`], [`RoleRepository`] trait에만 의존합니다.
//! 구현은 두 가지입니다.
//!
//! | 구현 | 저장소 | 용도 |
//! |------|--------|------|
//! | `MongoUserRepository`, `MongoRoleRepository` | MongoDB (+ Redis 캐시) | 운영 |
//! | `InMemoryUserRepository`, `InMemoryRoleRepository` | 프로세스 메모리 | 로컬 실행, 테스트 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{memory::InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = repo.get_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod roles;
pub mod memory;

pub use users::{MongoUserRepository, UserRepository};
pub use roles::{MongoRoleRepository, RoleRepository};
pub use memory::{InMemoryRoleRepository, InMemoryUserRepository};
