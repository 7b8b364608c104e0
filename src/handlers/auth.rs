//! 인증 API 핸들러 (`/api/v1/auth`)
//!
//! 스코프는 `AuthMiddleware::optional()`로 감싸져 있어, 유효한 액세스 토큰이
//! 있으면 `AuthenticatedUser`가 요청에 담깁니다. `/me`는 이 추출자를 요구하므로
//! 토큰이 없으면 401이 됩니다.

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::domain::dto::users::request::{CreateUserRequest, LoginRequest, RefreshTokenRequest};
use crate::domain::dto::users::response::{CreateUserResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::auth::{AuthService, TokenService};

#[post("/signup")]
pub async fn signup(
    payload: web::Json<CreateUserRequest>,
    auth: web::Data<dyn AuthService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = auth.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreateUserResponse {
        user: UserResponse::from(user),
        message: "사용자가 성공적으로 생성되었습니다".to_string(),
    }))
}

#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    auth: web::Data<dyn AuthService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!("로컬 로그인 시도 - 사용자: {}", payload.email);

    let response = auth.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/refresh")]
pub async fn refresh_tokens(
    payload: web::Json<RefreshTokenRequest>,
    auth: web::Data<dyn AuthService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = auth.refresh(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// `Authorization: Bearer` 헤더의 액세스 토큰을 검증하고 클레임을 돌려줍니다.
#[post("/verify")]
pub async fn verify_token(
    req: HttpRequest,
    auth: web::Data<dyn AuthService>,
    tokens: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let header = req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = tokens.extract_bearer_token(header)?;
    let claims = auth.verify(token)?;

    Ok(HttpResponse::Ok().json(json!({
        "valid": true,
        "user_id": claims.sub,
        "roles": claims.roles,
        "expires_at": claims.exp,
    })))
}

#[get("/me")]
pub async fn get_current_user(
    current: AuthenticatedUser,
    auth: web::Data<dyn AuthService>,
) -> Result<HttpResponse, AppError> {
    let user = auth.current_user(&current.user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
