//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let mut user = User::new(
//!     "user@example.com".to_string(),
//!     "username".to_string(),
//!     "Display Name".to_string(),
//!     "Full Name".to_string(),
//! );
//! user.encrypt_password("Secret123", PasswordConfig::bcrypt_cost())?;
//! ```

pub mod user;

pub use user::{User, DEFAULT_ROLE};
