//! # Domain Entities Module
//!
//! 이 모듈은 계정 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와 직접 매핑되는
//! 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 사용자와 역할을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: `users`, `roles` 컬렉션과 1:1 대응되는 문서 구조
//! - **도메인 동작**: 비밀번호 해싱/검증처럼 엔티티가 소유하는 규칙
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (User, Role)
//! ├── models/       ← 인증 컨텍스트, 토큰 클레임
//! └── dto/          ← 데이터 전송 객체
//! ```
//!
//! ## MongoDB 통합
//!
//! - `_id` 필드는 `Option<ObjectId>`로 매핑되며, 저장 시 할당됩니다.
//! - 시간 필드는 BSON `DateTime`을 사용합니다.
//! - 유일성 제약은 리포지토리의 인덱스가 보장합니다.

pub mod users;
pub mod roles;

pub use users::{User, DEFAULT_ROLE};
pub use roles::{Role, ADMIN_ROLE};
