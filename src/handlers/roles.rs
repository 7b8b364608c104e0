//! 역할 API 핸들러 (`/api/v1/roles`, 관리자 전용)

use actix_web::{web, HttpResponse, get, patch, post, delete};
use validator::Validate;
use crate::domain::dto::common::PaginationOptions;
use crate::domain::dto::roles::{CreateRoleRequest, RoleResponse, UpdateRoleRequest};
use crate::errors::AppError;
use crate::services::roles::RoleService;

#[get("")]
pub async fn list_roles(
    query: web::Query<PaginationOptions>,
    service: web::Data<dyn RoleService>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let page = service.list(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(page.map(RoleResponse::from)))
}

#[post("")]
pub async fn create_role(
    payload: web::Json<CreateRoleRequest>,
    service: web::Data<dyn RoleService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let role = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(RoleResponse::from(role)))
}

#[get("/{role_id}")]
pub async fn get_role(
    role_id: web::Path<String>,
    service: web::Data<dyn RoleService>,
) -> Result<HttpResponse, AppError> {
    let role = service.get_by_id(&role_id).await?;

    Ok(HttpResponse::Ok().json(RoleResponse::from(role)))
}

#[patch("/{role_id}")]
pub async fn update_role(
    role_id: web::Path<String>,
    payload: web::Json<UpdateRoleRequest>,
    service: web::Data<dyn RoleService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let role = service.update(&role_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(RoleResponse::from(role)))
}

#[delete("/{role_id}")]
pub async fn delete_role(
    role_id: web::Path<String>,
    service: web::Data<dyn RoleService>,
) -> Result<HttpResponse, AppError> {
    service.delete(&role_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
