//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! | 구분 | 위치 | 예시 |
//! |------|------|------|
//! | 영속 엔티티 (`@Entity`) | `../entities/` | `User`, `Role` |
//! | 값 객체 (`@Embeddable`) | `./` | `TokenClaims`, `AuthenticatedUser` |
//!
//! - [`auth`] - 미들웨어가 요청에 주입하는 인증 사용자와 역할 요구사항
//! - [`token`] - JWT 클레임과 토큰 쌍

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
