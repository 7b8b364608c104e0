//! # Domain Layer Module
//!
//! 계정 도메인의 엔티티, 값 객체, 데이터 전송 객체를 담는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 객체 (User, Role)
//! ├── models    - 인증 컨텍스트, JWT 클레임
//! └── dto       - 요청/응답, 페이지네이션
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@Entity` | [`entities`] |
//! | `@Embeddable` / 값 객체 | [`models`] |
//! | `@RequestBody` / `@ResponseBody` | [`dto`] |
//!
//! 도메인 계층은 actix-web 추출자(`AuthenticatedUser`)를 제외하면 웹 프레임워크와
//! 저장소 구현에 의존하지 않습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Role, User, ADMIN_ROLE, DEFAULT_ROLE};
