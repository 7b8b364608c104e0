//! # HTTP 미들웨어
//!
//! Spring Security의 `OncePerRequestFilter`에 해당하는 JWT 인증 미들웨어입니다.
//! `Authorization: Bearer <access token>`을 검증하고, 성공하면
//! [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 extensions에 넣어 핸들러가 추출자로 받을 수 있게 합니다.
//!
//! ```rust,ignore
//! web::scope("/api/v1/roles")
//!     .wrap(AuthMiddleware::required_with_role("admin"))
//!     .service(list_roles)
//! ```
//!
//! 토큰 검증에는 app data에 등록된 `web::Data<TokenService>`를 사용합니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
