//! 사용자 저장소 추상화
//!
//! Spring Data의 `UserRepository extends Repository<User, String>`에 해당하는 trait입니다.
//! 서비스 계층은 이 trait에만 의존하며, 실제 구현(MongoDB, 메모리)은
//! [`AccountModule`](crate::core::AccountModule)에서 주입됩니다.

use async_trait::async_trait;
use crate::domain::dto::common::PaginationOptions;
use crate::domain::entities::users::User;
use crate::errors::AppError;

/// 사용자 영속성 포트
///
/// | 메서드 | 없는 경우 |
/// |--------|-----------|
/// | `get_by_*` | `Ok(None)` |
/// | `update` | `Ok(None)` |
/// | `delete` | `Ok(false)` |
///
/// 잘못된 ID 형식은 `AppError::ValidationError`, 이메일/사용자명 유일성 위반은
/// `AppError::ConflictError`, 그 밖의 저장소 장애는 `AppError::DatabaseError`로
/// 보고됩니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID(ObjectId 16진수 문자열)로 사용자 조회
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 이메일로 사용자 조회
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 사용자명으로 사용자 조회
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자 저장. 할당된 ID가 채워진 사용자를 반환합니다.
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 기존 사용자를 주어진 상태로 덮어씁니다.
    async fn update(&self, id: &str, user: &User) -> Result<Option<User>, AppError>;

    /// 사용자 삭제. 실제로 삭제된 문서가 있으면 `true`.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// 최신 생성순으로 한 페이지와 전체 사용자 수를 반환합니다.
    async fn find_page(&self, options: &PaginationOptions) -> Result<(Vec<User>, u64), AppError>;

    /// 모든 사용자의 역할 목록에서 `old`를 `new`로 바꾸거나(`None`이면 제거)
    /// 변경된 사용자 수를 반환합니다.
    async fn replace_role(&self, old: &str, new: Option<&str>) -> Result<u64, AppError>;
}
