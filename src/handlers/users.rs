//! 사용자 API 핸들러
//!
//! `/api/v1/users` 스코프 아래에 등록되며, 스코프 전체가
//! `AuthMiddleware::required_with_roles(vec!["user", "admin"])`로 보호됩니다.
//! 수정/삭제는 본인 또는 관리자만, 역할 부여는 관리자만 가능합니다.

use actix_web::{web, HttpResponse, get, patch, post, delete};
use validator::Validate;
use crate::domain::dto::common::PaginationOptions;
use crate::domain::dto::users::request::{AssignRoleRequest, UpdateUserRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

fn ensure_owner_or_admin(current: &AuthenticatedUser, user_id: &str) -> Result<(), AppError> {
    if current.can_access(user_id) {
        Ok(())
    } else {
        log::warn!("권한 없는 사용자 접근: {} → {}", current.user_id, user_id);
        Err(AppError::AuthorizationError("본인 또는 관리자만 접근할 수 있습니다".to_string()))
    }
}

#[get("")]
pub async fn list_users(
    query: web::Query<PaginationOptions>,
    service: web::Data<dyn UserService>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let page = service.list(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(page.map(UserResponse::from)))
}

#[get("/email/{email}")]
pub async fn get_user_by_email(
    email: web::Path<String>,
    service: web::Data<dyn UserService>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_by_email(&email).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[get("/username/{username}")]
pub async fn get_user_by_username(
    username: web::Path<String>,
    service: web::Data<dyn UserService>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_by_username(&username).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
    service: web::Data<dyn UserService>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[patch("/{user_id}")]
pub async fn update_user(
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
    current: AuthenticatedUser,
    service: web::Data<dyn UserService>,
) -> Result<HttpResponse, AppError> {
    ensure_owner_or_admin(&current, &user_id)?;

    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = service.update(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<String>,
    current: AuthenticatedUser,
    service: web::Data<dyn UserService>,
) -> Result<HttpResponse, AppError> {
    ensure_owner_or_admin(&current, &user_id)?;

    service.delete(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[post("/{user_id}/roles")]
pub async fn assign_role(
    user_id: web::Path<String>,
    payload: web::Json<AssignRoleRequest>,
    current: AuthenticatedUser,
    service: web::Data<dyn UserService>,
) -> Result<HttpResponse, AppError> {
    if !current.is_admin() {
        return Err(AppError::AuthorizationError("관리자만 역할을 부여할 수 있습니다".to_string()));
    }

    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = service.assign_role(&user_id, payload.role.trim()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
