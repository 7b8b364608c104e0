//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기(등록, 조회, 수정, 삭제, 역할 부여)를 관리하는
//! 비즈니스 로직입니다. Spring Framework의 `UserService` 인터페이스 +
//! `UserServiceImpl` 구현 패턴을 trait과 구조체로 옮겼습니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              UserServiceImpl                 │
//! │  • 이메일 중복 확인     • 부분 수정           │
//! │  • 비밀번호 형식/해싱   • 존재 확인 후 삭제   │
//! └──────────────────────────────────────────────┘
//!                 │                  │
//!                 ▼                  ▼
//!     Arc<dyn UserRepository>  Arc<dyn RoleRepository>
//! ```
//!
//! ## 에러 처리 규칙
//!
//! - 모든 실패는 `log::error!`로 기록한 뒤 호출자에게 전달합니다.
//! - 저장소 오류는 종류와 메시지를 그대로 유지합니다.
//! - 수정/삭제 시 저장소가 "변경된 행 없음"을 보고하면 `NotFound`가 됩니다.
//!
//! ## 동시성
//!
//! 존재 확인과 쓰기는 서로 다른 두 번의 저장소 호출입니다. 같은 이메일로
//! 동시에 가입하면 서비스 검사는 둘 다 통과할 수 있고, 이 경우 저장소의
//! 유니크 인덱스가 최종적으로 거부합니다 (`ConflictError`, 409).

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    domain::{
        dto::{
            common::{Page, PageMeta, PaginationOptions},
            users::request::{CreateUserRequest, UpdateUserRequest},
        },
        entities::users::User,
    },
    errors::AppError,
    repositories::{RoleRepository, UserRepository},
    utils::string_utils::{clean_optional_string, normalize_email},
};

/// 사용자 서비스 계약
#[async_trait]
pub trait UserService: Send + Sync {
    /// ID로 사용자 조회. 없으면 `NotFound`.
    async fn get_by_id(&self, id: &str) -> Result<User, AppError>;

    /// 이메일로 사용자 조회. 없으면 `NotFound`.
    async fn get_by_email(&self, email: &str) -> Result<User, AppError>;

    /// 사용자명으로 사용자 조회. 없으면 `NotFound`.
    async fn get_by_username(&self, username: &str) -> Result<User, AppError>;

    /// 신규 사용자 등록
    ///
    /// 같은 이메일이 이미 있으면 `BadRequest("Email is already in use")`이며
    /// 저장소에는 아무것도 쓰지 않습니다.
    async fn create(&self, request: CreateUserRequest) -> Result<(), AppError>;

    /// 부분 수정. 값이 있는 필드만 덮어쓰고 갱신된 사용자를 반환합니다.
    async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, AppError>;

    /// 사용자 삭제. 존재하지 않으면 삭제를 시도하지 않고 `NotFound`.
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// 최신 생성순 페이지 조회
    async fn list(&self, options: PaginationOptions) -> Result<Page<User>, AppError>;

    /// 사용자에게 역할 부여. 이미 가진 역할이면 변경 없이 반환합니다.
    async fn assign_role(&self, user_id: &str, role_name: &str) -> Result<User, AppError>;
}

/// 저장소 trait 객체 위에서 동작하는 기본 구현
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepository>,
    role_repo: Arc<dyn RoleRepository>,
    bcrypt_cost: u32,
}

impl UserServiceImpl {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        role_repo: Arc<dyn RoleRepository>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            role_repo,
            bcrypt_cost,
        }
    }

    /// 조회 결과를 서비스 결과로 변환 (없음 → `NotFound`, 오류는 기록 후 전달)
    fn found(result: Result<Option<User>, AppError>, missing: String) -> Result<User, AppError> {
        match result {
            Ok(Some(user)) => Ok(user),
            Ok(None) => {
                log::error!("❌ {}", missing);
                Err(AppError::NotFound(missing))
            }
            Err(e) => {
                log::error!("❌ 사용자 조회 실패: {}", e);
                Err(e)
            }
        }
    }

    /// 변경된 사용자를 저장하고 결과를 해석합니다.
    async fn persist(&self, id: &str, user: &User) -> Result<User, AppError> {
        match self.user_repo.update(id, user).await {
            Ok(Some(updated)) => Ok(updated),
            Ok(None) => {
                let message = format!("Failed to update user with ID {}", id);
                log::error!("❌ {}", message);
                Err(AppError::NotFound(message))
            }
            Err(e) => {
                log::error!("❌ 사용자 수정 실패 (id={}): {}", id, e);
                Err(e)
            }
        }
    }

    async fn ensure_email_available(&self, email: &str, owner: Option<&str>) -> Result<(), AppError> {
        let existing = self.user_repo.get_by_email(email).await.map_err(|e| {
            log::error!("❌ 이메일 중복 확인 실패 ({}): {}", email, e);
            e
        })?;

        match existing {
            Some(user) if user.id_string().as_deref() != owner => {
                log::error!("❌ 이미 사용 중인 이메일: {}", email);
                Err(AppError::BadRequest("Email is already in use".to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn get_by_id(&self, id: &str) -> Result<User, AppError> {
        Self::found(
            self.user_repo.get_by_id(id).await,
            format!("User with ID {} not found", id),
        )
    }

    async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        let email = normalize_email(email);
        Self::found(
            self.user_repo.get_by_email(&email).await,
            format!("User with email {} not found", email),
        )
    }

    async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        Self::found(
            self.user_repo.get_by_username(username).await,
            format!("User with username {} not found", username),
        )
    }

    async fn create(&self, request: CreateUserRequest) -> Result<(), AppError> {
        let start_time = std::time::Instant::now();
        let email = normalize_email(&request.email);

        self.ensure_email_available(&email, None).await?;

        let mut user = User::new(
            email,
            request.username.trim().to_string(),
            request.name.trim().to_string(),
            request.fullname.trim().to_string(),
        );

        let hash_start = std::time::Instant::now();
        user.encrypt_password(&request.password, self.bcrypt_cost).map_err(|e| {
            log::error!("❌ 비밀번호 해싱 실패: {}", e);
            e
        })?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let created = self.user_repo.create(user).await.map_err(|e| {
            log::error!("❌ 사용자 생성 실패 ({}): {}", request.email, e);
            e
        })?;

        log::info!(
            "✅ 사용자 생성 완료: {} ({:?})",
            created.id_string().unwrap_or_default(),
            start_time.elapsed()
        );
        Ok(())
    }

    async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, AppError> {
        let mut user = self.get_by_id(id).await?;

        if let Some(email) = clean_optional_string(request.email) {
            let email = normalize_email(&email);
            if email != user.email {
                self.ensure_email_available(&email, Some(id)).await?;
                user.email = email;
            }
        }

        if let Some(name) = clean_optional_string(request.name) {
            user.name = name;
        }

        if let Some(fullname) = clean_optional_string(request.fullname) {
            user.fullname = fullname;
        }

        // 비밀번호는 보낸 그대로 검증하고 해싱 (공백도 비밀번호의 일부)
        if let Some(password) = request.password {
            User::validate_password_format(&password).map_err(|e| {
                log::error!("❌ 비밀번호 형식 오류 (id={}): {}", id, e);
                AppError::BadRequest("Invalid password format".to_string())
            })?;

            user.encrypt_password(&password, self.bcrypt_cost).map_err(|e| {
                log::error!("❌ 비밀번호 해싱 실패 (id={}): {}", id, e);
                e
            })?;
        }

        user.touch();
        let updated = self.persist(id, &user).await?;

        log::info!("✏️ 사용자 수정 완료: {}", id);
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.get_by_id(id).await?;

        match self.user_repo.delete(id).await {
            Ok(true) => {
                log::info!("🗑️ 사용자 삭제 완료: {}", id);
                Ok(())
            }
            Ok(false) => {
                let message = format!("Failed to delete user with ID {}", id);
                log::error!("❌ {}", message);
                Err(AppError::NotFound(message))
            }
            Err(e) => {
                log::error!("❌ 사용자 삭제 실패 (id={}): {}", id, e);
                Err(e)
            }
        }
    }

    async fn list(&self, options: PaginationOptions) -> Result<Page<User>, AppError> {
        let (users, total) = self.user_repo.find_page(&options).await.map_err(|e| {
            log::error!("❌ 사용자 목록 조회 실패: {}", e);
            e
        })?;

        let meta = PageMeta::new(&options, total).map_err(|e| {
            log::error!("❌ 페이지 정보 계산 실패: {}", e);
            e
        })?;

        Ok(Page::new(users, meta))
    }

    async fn assign_role(&self, user_id: &str, role_name: &str) -> Result<User, AppError> {
        let mut user = self.get_by_id(user_id).await?;

        let role = self.role_repo.get_by_name(role_name).await.map_err(|e| {
            log::error!("❌ 역할 조회 실패 ({}): {}", role_name, e);
            e
        })?;

        if role.is_none() {
            let message = format!("Role {} not found", role_name);
            log::error!("❌ {}", message);
            return Err(AppError::NotFound(message));
        }

        if user.has_role(role_name) {
            return Ok(user);
        }

        user.roles.push(role_name.to_string());
        user.touch();
        let updated = self.persist(user_id, &user).await?;

        log::info!("🔑 역할 부여 완료: {} → {}", role_name, user_id);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use mongodb::bson::oid::ObjectId;
    use crate::domain::entities::roles::Role;
    use crate::repositories::{InMemoryRoleRepository, InMemoryUserRepository};

    /// 쓰기 호출 횟수를 세는 저장소 래퍼
    #[derive(Default)]
    struct RecordingUserRepository {
        inner: InMemoryUserRepository,
        creates: AtomicUsize,
        updates: AtomicUsize,
        deletes: AtomicUsize,
        fail_writes: bool,
    }

    impl RecordingUserRepository {
        fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Default::default()
            }
        }

        fn writes(&self) -> usize {
            self.creates.load(Ordering::SeqCst)
                + self.updates.load(Ordering::SeqCst)
                + self.deletes.load(Ordering::SeqCst)
        }

        fn write_error(&self) -> Result<(), AppError> {
            if self.fail_writes {
                return Err(AppError::DatabaseError("connection reset".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for RecordingUserRepository {
        async fn get_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
            self.inner.get_by_id(id).await
        }

        async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
            self.inner.get_by_email(email).await
        }

        async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
            self.inner.get_by_username(username).await
        }

        async fn create(&self, user: User) -> Result<User, AppError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            self.inner.create(user).await
        }

        async fn update(&self, id: &str, user: &User) -> Result<Option<User>, AppError> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            self.write_error()?;
            self.inner.update(id, user).await
        }

        async fn delete(&self, id: &str) -> Result<bool, AppError> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            self.write_error()?;
            self.inner.delete(id).await
        }

        async fn find_page(&self, options: &PaginationOptions) -> Result<(Vec<User>, u64), AppError> {
            self.inner.find_page(options).await
        }

        async fn replace_role(&self, old: &str, new: Option<&str>) -> Result<u64, AppError> {
            self.write_error()?;
            self.inner.replace_role(old, new).await
        }
    }

    fn service_with(repo: Arc<RecordingUserRepository>) -> (UserServiceImpl, Arc<InMemoryRoleRepository>) {
        let roles = Arc::new(InMemoryRoleRepository::new());
        (UserServiceImpl::new(repo, roles.clone(), 4), roles)
    }

    fn signup(email: &str, username: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            username: username.to_string(),
            name: "Alice".to_string(),
            fullname: "Alice Liddell".to_string(),
            password: "Wonderland1".to_string(),
        }
    }

    async fn seeded(repo: &Arc<RecordingUserRepository>, service: &UserServiceImpl) -> User {
        service.create(signup("a@x.com", "alice")).await.unwrap();
        repo.inner.get_by_email("a@x.com").await.unwrap().unwrap()
    }

    #[actix_web::test]
    async fn test_create_hashes_password() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());

        let user = seeded(&repo, &service).await;

        assert_ne!(user.password_hash, "Wonderland1");
        assert!(user.verify_password("Wonderland1").unwrap());
        assert_eq!(user.roles, vec!["user".to_string()]);
    }

    #[actix_web::test]
    async fn test_create_duplicate_email_is_rejected_without_write() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());

        service.create(signup("a@x.com", "alice")).await.unwrap();
        let second = service.create(signup("a@x.com", "alice2")).await;

        match second {
            Err(AppError::BadRequest(message)) => assert_eq!(message, "Email is already in use"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
        assert_eq!(repo.creates.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_create_duplicate_username_surfaces_store_conflict() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());

        service.create(signup("a@x.com", "alice")).await.unwrap();
        let result = service.create(signup("b@x.com", "alice")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_lookups_report_not_found() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo);
        let missing = ObjectId::new().to_hex();

        match service.get_by_id(&missing).await {
            Err(AppError::NotFound(message)) => {
                assert_eq!(message, format!("User with ID {} not found", missing))
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(matches!(service.get_by_email("nobody@x.com").await, Err(AppError::NotFound(_))));
        assert!(matches!(service.get_by_username("nobody").await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_lookup_store_errors_are_passed_through() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo);

        assert!(matches!(service.get_by_id("not-an-id").await, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_update_name_only_keeps_other_fields() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());
        let before = seeded(&repo, &service).await;
        let id = before.id_string().unwrap();

        let request = UpdateUserRequest {
            name: Some("Bob".to_string()),
            ..Default::default()
        };
        let after = service.update(&id, request).await.unwrap();

        assert_eq!(after.name, "Bob");
        assert_eq!(after.email, before.email);
        assert_eq!(after.fullname, before.fullname);
        assert_eq!(after.password_hash, before.password_hash);
    }

    #[actix_web::test]
    async fn test_update_blank_fields_are_ignored() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());
        let before = seeded(&repo, &service).await;
        let id = before.id_string().unwrap();

        let request = UpdateUserRequest {
            name: Some("   ".to_string()),
            email: Some(String::new()),
            ..Default::default()
        };
        let after = service.update(&id, request).await.unwrap();

        assert_eq!(after.name, before.name);
        assert_eq!(after.email, before.email);
    }

    #[actix_web::test]
    async fn test_update_invalid_password_is_rejected_without_write() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());
        let user = seeded(&repo, &service).await;
        let id = user.id_string().unwrap();

        let request = UpdateUserRequest {
            password: Some("short".to_string()),
            ..Default::default()
        };

        match service.update(&id, request).await {
            Err(AppError::BadRequest(message)) => assert_eq!(message, "Invalid password format"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
        assert_eq!(repo.updates.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_update_password_is_rehashed() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());
        let before = seeded(&repo, &service).await;
        let id = before.id_string().unwrap();

        let request = UpdateUserRequest {
            password: Some("NewSecret9".to_string()),
            ..Default::default()
        };
        let after = service.update(&id, request).await.unwrap();

        assert_ne!(after.password_hash, before.password_hash);
        assert!(after.verify_password("NewSecret9").unwrap());
    }

    #[actix_web::test]
    async fn test_update_password_keeps_surrounding_spaces() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());
        let user = seeded(&repo, &service).await;
        let id = user.id_string().unwrap();

        let request = UpdateUserRequest {
            password: Some(" NewSecret9 ".to_string()),
            ..Default::default()
        };
        let after = service.update(&id, request).await.unwrap();

        assert!(after.verify_password(" NewSecret9 ").unwrap());
        assert!(!after.verify_password("NewSecret9").unwrap());
    }

    #[actix_web::test]
    async fn test_update_blank_password_is_rejected_without_write() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());
        let user = seeded(&repo, &service).await;
        let id = user.id_string().unwrap();

        for blank in ["", "   "] {
            let request = UpdateUserRequest {
                password: Some(blank.to_string()),
                ..Default::default()
            };
            match service.update(&id, request).await {
                Err(AppError::BadRequest(message)) => assert_eq!(message, "Invalid password format"),
                other => panic!("expected BadRequest, got {:?}", other),
            }
        }
        assert_eq!(repo.updates.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_update_to_taken_email_is_rejected() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());
        let alice = seeded(&repo, &service).await;
        service.create(signup("b@x.com", "bob")).await.unwrap();

        let request = UpdateUserRequest {
            email: Some("B@X.com".to_string()),
            ..Default::default()
        };
        let result = service.update(&alice.id_string().unwrap(), request).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(repo.updates.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_update_missing_user_is_not_found() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());

        let result = service.update(&ObjectId::new().to_hex(), UpdateUserRequest::default()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(repo.writes(), 0);
    }

    #[actix_web::test]
    async fn test_update_store_failure_keeps_original_error() {
        let repo = Arc::new(RecordingUserRepository::failing());
        let (service, _) = service_with(repo.clone());
        let user = seeded(&repo, &service).await;

        let request = UpdateUserRequest {
            name: Some("Bob".to_string()),
            ..Default::default()
        };
        let result = service.update(&user.id_string().unwrap(), request).await;

        match result {
            Err(AppError::DatabaseError(message)) => assert_eq!(message, "connection reset"),
            other => panic!("expected DatabaseError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_delete_missing_user_does_not_touch_store() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());

        let result = service.delete(&ObjectId::new().to_hex()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(repo.deletes.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_delete_removes_user() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());
        let id = seeded(&repo, &service).await.id_string().unwrap();

        service.delete(&id).await.unwrap();

        assert!(matches!(service.get_by_id(&id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_store_failure_keeps_original_error() {
        let repo = Arc::new(RecordingUserRepository::failing());
        let (service, _) = service_with(repo.clone());
        let id = seeded(&repo, &service).await.id_string().unwrap();

        assert!(matches!(service.delete(&id).await, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_list_builds_page_meta() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());
        for i in 0..3 {
            service.create(signup(&format!("u{}@x.com", i), &format!("user{}", i))).await.unwrap();
        }

        let page = service.list(PaginationOptions::new(1, 2)).await.unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.item_count, 3);
        assert_eq!(page.meta.page_count, 2);
        assert!(page.meta.has_next_page);
    }

    #[actix_web::test]
    async fn test_assign_role_is_idempotent() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, roles) = service_with(repo.clone());
        roles.create(Role::new("admin".to_string(), None)).await.unwrap();
        let id = seeded(&repo, &service).await.id_string().unwrap();

        let first = service.assign_role(&id, "admin").await.unwrap();
        let second = service.assign_role(&id, "admin").await.unwrap();

        assert_eq!(first.roles, vec!["user".to_string(), "admin".to_string()]);
        assert_eq!(second.roles, first.roles);
        assert_eq!(repo.updates.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_assign_unknown_role_is_not_found() {
        let repo = Arc::new(RecordingUserRepository::default());
        let (service, _) = service_with(repo.clone());
        let id = seeded(&repo, &service).await.id_string().unwrap();

        assert!(matches!(service.assign_role(&id, "ghost").await, Err(AppError::NotFound(_))));
    }
}
