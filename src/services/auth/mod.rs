//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증과 로컬 계정 로그인을 담당합니다.
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 생성, 검증 (HMAC-SHA256)
//! - 이메일/비밀번호 로그인, 토큰 갱신
//! - 토큰 용도(`access`/`refresh`) 구분
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenService};
//!
//! let tokens = Arc::new(TokenService::from_config()?);
//! let login = auth_service.login("user@example.com", "Secret123").await?;
//! let claims = tokens.verify_access_token(&login.access_token)?;
//! ```

pub mod token_service;
pub mod auth_service;

pub use token_service::TokenService;
pub use auth_service::{AuthService, AuthServiceImpl};
