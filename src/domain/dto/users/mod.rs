//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody CreateUserDto` | `CreateUserRequest` | 회원가입 요청 |
//! | `@RequestBody UpdateUserDto` | `UpdateUserRequest` | 부분 수정 요청 |
//! | `@ResponseBody UserDto` | `UserResponse` | 사용자 정보 응답 |
//! | `JwtAuthenticationToken` | `LoginResponse` | 인증 토큰 응답 |
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs     # 회원가입 요청
//! │   ├── update_user.rs     # 부분 수정 요청
//! │   └── auth_request.rs    # 로그인, 토큰 갱신, 역할 부여
//! └── response/
//!     └── user_response.rs   # 사용자/로그인 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
