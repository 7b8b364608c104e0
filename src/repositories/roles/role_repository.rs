//! 역할 저장소 추상화

use async_trait::async_trait;
use crate::domain::dto::common::PaginationOptions;
use crate::domain::entities::roles::Role;
use crate::errors::AppError;

/// 역할 영속성 포트
///
/// 의미는 [`UserRepository`](crate::repositories::users::UserRepository)와 같습니다.
/// 역할 이름 유일성 위반은 `AppError::ConflictError`로 보고됩니다.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<Role>, AppError>;

    async fn get_by_name(&self, name: &str) -> Result<Option<Role>, AppError>;

    async fn create(&self, role: Role) -> Result<Role, AppError>;

    async fn update(&self, id: &str, role: &Role) -> Result<Option<Role>, AppError>;

    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// 이름순으로 한 페이지와 전체 역할 수를 반환합니다.
    async fn find_page(&self, options: &PaginationOptions) -> Result<(Vec<Role>, u64), AppError>;
}
