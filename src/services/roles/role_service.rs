//! 역할 관리 서비스 구현
//!
//! 사용자 서비스와 같은 규칙을 따릅니다: 모든 실패는 기록 후 전달되고,
//! 저장소 오류는 원래 종류를 유지합니다.
//!
//! 역할 이름이 바뀌거나 역할이 삭제되면 사용자 문서의 `roles`도 함께 갱신됩니다.
//! 이미 발급된 액세스 토큰은 만료될 때까지 이전 역할 이름을 그대로 담고 있습니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    domain::{
        dto::{
            common::{Page, PageMeta, PaginationOptions},
            roles::{CreateRoleRequest, UpdateRoleRequest},
        },
        entities::{roles::{Role, ADMIN_ROLE}, users::DEFAULT_ROLE},
    },
    errors::AppError,
    repositories::{RoleRepository, UserRepository},
    utils::string_utils::clean_optional_string,
};

/// 시작 시 보장되는 기본 역할 (이름, 설명)
pub const DEFAULT_ROLES: [(&str, &str); 2] = [
    (DEFAULT_ROLE, "Regular account"),
    (ADMIN_ROLE, "Administrator"),
];

/// 역할 서비스 계약
#[async_trait]
pub trait RoleService: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Role, AppError>;

    async fn get_by_name(&self, name: &str) -> Result<Role, AppError>;

    /// 같은 이름이 있으면 `BadRequest("Role name is already in use")`
    async fn create(&self, request: CreateRoleRequest) -> Result<Role, AppError>;

    async fn update(&self, id: &str, request: UpdateRoleRequest) -> Result<Role, AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;

    async fn list(&self, options: PaginationOptions) -> Result<Page<Role>, AppError>;

    /// 기본 역할이 없으면 생성합니다. 새로 만든 역할 수를 반환합니다.
    async fn seed_defaults(&self) -> Result<usize, AppError>;
}

pub struct RoleServiceImpl {
    role_repo: Arc<dyn RoleRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl RoleServiceImpl {
    pub fn new(role_repo: Arc<dyn RoleRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { role_repo, user_repo }
    }

    /// 사용자들이 가진 `old` 역할을 `new`로 바꾸거나 제거합니다.
    async fn sync_user_roles(&self, old: &str, new: Option<&str>) -> Result<(), AppError> {
        let changed = self.user_repo.replace_role(old, new).await.map_err(|e| {
            log::error!("❌ 사용자 역할 정리 실패 ({}): {}", old, e);
            e
        })?;

        if changed > 0 {
            log::info!("🔁 역할 {} → {:?}: 사용자 {}명 갱신", old, new, changed);
        }
        Ok(())
    }

    fn found(result: Result<Option<Role>, AppError>, missing: String) -> Result<Role, AppError> {
        match result {
            Ok(Some(role)) => Ok(role),
            Ok(None) => {
                log::error!("❌ {}", missing);
                Err(AppError::NotFound(missing))
            }
            Err(e) => {
                log::error!("❌ 역할 조회 실패: {}", e);
                Err(e)
            }
        }
    }

    async fn ensure_name_available(&self, name: &str) -> Result<(), AppError> {
        let existing = self.role_repo.get_by_name(name).await.map_err(|e| {
            log::error!("❌ 역할 이름 중복 확인 실패 ({}): {}", name, e);
            e
        })?;

        if existing.is_some() {
            log::error!("❌ 이미 사용 중인 역할 이름: {}", name);
            return Err(AppError::BadRequest("Role name is already in use".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RoleService for RoleServiceImpl {
    async fn get_by_id(&self, id: &str) -> Result<Role, AppError> {
        Self::found(
            self.role_repo.get_by_id(id).await,
            format!("Role with ID {} not found", id),
        )
    }

    async fn get_by_name(&self, name: &str) -> Result<Role, AppError> {
        Self::found(
            self.role_repo.get_by_name(name).await,
            format!("Role {} not found", name),
        )
    }

    async fn create(&self, request: CreateRoleRequest) -> Result<Role, AppError> {
        let name = request.name.trim().to_string();
        self.ensure_name_available(&name).await?;

        let role = self.role_repo
            .create(Role::new(name, clean_optional_string(request.description)))
            .await
            .map_err(|e| {
                log::error!("❌ 역할 생성 실패: {}", e);
                e
            })?;

        log::info!("✅ 역할 생성 완료: {}", role.name);
        Ok(role)
    }

    async fn update(&self, id: &str, request: UpdateRoleRequest) -> Result<Role, AppError> {
        let mut role = self.get_by_id(id).await?;
        let previous_name = role.name.clone();

        if let Some(name) = clean_optional_string(request.name) {
            if name != role.name {
                self.ensure_name_available(&name).await?;
                role.name = name;
            }
        }

        if let Some(description) = clean_optional_string(request.description) {
            role.description = Some(description);
        }

        role.touch();

        match self.role_repo.update(id, &role).await {
            Ok(Some(updated)) => {
                if updated.name != previous_name {
                    self.sync_user_roles(&previous_name, Some(&updated.name)).await?;
                }
                log::info!("✏️ 역할 수정 완료: {}", id);
                Ok(updated)
            }
            Ok(None) => {
                let message = format!("Failed to update role with ID {}", id);
                log::error!("❌ {}", message);
                Err(AppError::NotFound(message))
            }
            Err(e) => {
                log::error!("❌ 역할 수정 실패 (id={}): {}", id, e);
                Err(e)
            }
        }
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let role = self.get_by_id(id).await?;

        match self.role_repo.delete(id).await {
            Ok(true) => {
                self.sync_user_roles(&role.name, None).await?;
                log::info!("🗑️ 역할 삭제 완료: {}", id);
                Ok(())
            }
            Ok(false) => {
                let message = format!("Failed to delete role with ID {}", id);
                log::error!("❌ {}", message);
                Err(AppError::NotFound(message))
            }
            Err(e) => {
                log::error!("❌ 역할 삭제 실패 (id={}): {}", id, e);
                Err(e)
            }
        }
    }

    async fn list(&self, options: PaginationOptions) -> Result<Page<Role>, AppError> {
        let (roles, total) = self.role_repo.find_page(&options).await.map_err(|e| {
            log::error!("❌ 역할 목록 조회 실패: {}", e);
            e
        })?;

        Ok(Page::new(roles, PageMeta::new(&options, total)?))
    }

    async fn seed_defaults(&self) -> Result<usize, AppError> {
        let mut created = 0;

        for (name, description) in DEFAULT_ROLES {
            if self.role_repo.get_by_name(name).await?.is_none() {
                self.role_repo
                    .create(Role::new(name.to_string(), Some(description.to_string())))
                    .await?;
                created += 1;
            }
        }

        if created > 0 {
            log::info!("🌱 기본 역할 {}개 생성", created);
        }
        Ok(created)
    }
}
