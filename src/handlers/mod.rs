//! # HTTP 핸들러
//!
//! Spring MVC의 `@RestController` 메서드에 해당합니다. 각 핸들러는
//! 요청 DTO를 검증하고, `web::Data<dyn Service>`로 주입된 서비스를 호출한 뒤
//! 응답 DTO로 변환합니다. 실패는 `AppError`가 JSON 에러 응답으로 바꿉니다.

pub mod users;
pub mod roles;
pub mod auth;
