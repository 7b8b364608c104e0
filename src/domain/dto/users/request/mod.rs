//! # 사용자 관련 요청 DTO 모듈
//!
//! 이 모듈은 사용자 도메인과 관련된 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@RequestBody`와 유사한 역할을 하며, 클라이언트로부터 받은 JSON 데이터를
//! 구조화된 Rust 타입으로 변환하고 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (serde)
//! 2. **형식 검증**: 이메일, 길이, 패턴 등 기본 형식 규칙 (validator)
//! 3. **비즈니스 검증**: 이메일 중복 확인 등 (서비스 계층)
//!
//! 검증 실패 시 `validator::ValidationErrors`가 `AppError::ValidationError`로 변환되어
//! HTTP 400 Bad Request 응답이 됩니다.

pub mod create_user;
pub mod update_user;
pub mod auth_request;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
pub use auth_request::{AssignRoleRequest, LoginRequest, RefreshTokenRequest};
