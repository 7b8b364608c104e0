//! # 사용자 관련 응답 DTO 모듈
//!
//! 서비스 처리 결과를 클라이언트에게 전달하는 응답 객체들입니다.
//! Spring Boot의 `@ResponseBody`에 해당하며, 엔티티를 그대로 노출하지 않고
//! 필요한 필드만 골라 담습니다.
//!
//! - `UserResponse` - 표준 사용자 정보 (조회, 목록, 수정 결과)
//! - `CreateUserResponse` - 회원가입 완료 응답
//! - `LoginResponse` - 액세스/리프레시 토큰을 포함한 로그인 응답
//!
//! ## 로그인 응답 예제
//! ```json
//! {
//!   "user": { "id": "507f1f77bcf86cd799439011", "email": "user@example.com", "...": "..." },
//!   "access_token": "eyJhbGciOiJIUzI1NiIs...",
//!   "refresh_token": "eyJhbGciOiJIUzI1NiIs...",
//!   "token_type": "Bearer",
//!   "expires_in": 86400
//! }
//! ```

pub mod user_response;

pub use user_response::{UserResponse, CreateUserResponse, LoginResponse};
