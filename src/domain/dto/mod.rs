//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 객체들을 정의합니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 같은 역할입니다.
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `Page<T>` / `Pageable` | `common::pagination` | 페이지 단위 목록 조회 |
//!
//! ```text
//! dto/
//! ├── users/     # 사용자 요청/응답
//! ├── roles/     # 역할 요청/응답
//! └── common/    # 페이지네이션
//! ```
//!
//! 엔티티는 DTO로 변환한 뒤에만 응답에 실립니다. 비밀번호 해시 같은 내부 필드는
//! 응답 DTO에 존재하지 않습니다.

pub mod users;
pub mod roles;
pub mod common;

pub use users::*;
pub use roles::*;
pub use common::*;
