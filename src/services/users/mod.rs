//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지
//! - 비밀번호 형식 재검증 (수정 시)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{UserService, UserServiceImpl};
//!
//! let service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(user_repo, role_repo, 12));
//! service.create(request).await?;
//! ```

pub mod user_service;

pub use user_service::{UserService, UserServiceImpl};
