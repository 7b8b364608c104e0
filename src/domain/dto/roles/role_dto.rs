use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::roles::Role;
use crate::utils::string_utils::deserialize_optional_string;

/// 역할 생성 요청 (`POST /api/v1/roles`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoleRequest {
    #[validate(length(min = 2, max = 30, message = "역할 이름은 2-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_role_name"))]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 200, message = "설명은 200자를 넘을 수 없습니다"))]
    pub description: Option<String>,
}

/// 역할 부분 수정 요청 (`PATCH /api/v1/roles/{id}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 2, max = 30, message = "역할 이름은 2-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_role_name"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 200, message = "설명은 200자를 넘을 수 없습니다"))]
    pub description: Option<String>,
}

/// 역할 이름 형식 검증 (소문자, 숫자, 언더스코어)
fn validate_role_name(name: &str) -> Result<(), ValidationError> {
    if !name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        return Err(ValidationError::new("invalid_role_name")
            .with_message("역할 이름은 소문자, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

/// 역할 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: role.name,
            description: role.description,
            created_at: role.created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: role.updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}
