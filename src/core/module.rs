//! 계정 모듈 조립

use std::sync::Arc;
use actix_web::web;
use crate::{
    caching::redis::RedisClient,
    db::Database,
    domain::entities::roles::ADMIN_ROLE,
    errors::AppError,
    repositories::{
        InMemoryRoleRepository, InMemoryUserRepository, MongoRoleRepository,
        MongoUserRepository, RoleRepository, UserRepository,
    },
    routes::configure_all_routes,
    utils::string_utils::normalize_email,
    services::{
        auth::{AuthService, AuthServiceImpl, TokenService},
        roles::{RoleService, RoleServiceImpl},
        users::{UserService, UserServiceImpl},
    },
};

/// 저장소, 서비스, 토큰 설정을 묶은 애플리케이션 모듈
///
/// `HttpServer::new` 팩토리는 워커마다 호출되므로 `Clone`으로 공유합니다.
#[derive(Clone)]
pub struct AccountModule {
    pub user_repo: Arc<dyn UserRepository>,
    pub role_repo: Arc<dyn RoleRepository>,
    pub user_service: Arc<dyn UserService>,
    pub role_service: Arc<dyn RoleService>,
    pub auth_service: Arc<dyn AuthService>,
    pub token_service: Arc<TokenService>,
}

impl AccountModule {
    /// 주어진 저장소 구현으로 서비스를 조립합니다.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        role_repo: Arc<dyn RoleRepository>,
        token_service: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> Self {
        let user_service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(
            user_repo.clone(),
            role_repo.clone(),
            bcrypt_cost,
        ));
        let role_service: Arc<dyn RoleService> = Arc::new(RoleServiceImpl::new(
            role_repo.clone(),
            user_repo.clone(),
        ));
        let auth_service: Arc<dyn AuthService> = Arc::new(AuthServiceImpl::new(
            user_service.clone(),
            token_service.clone(),
        ));

        Self {
            user_repo,
            role_repo,
            user_service,
            role_service,
            auth_service,
            token_service,
        }
    }

    /// MongoDB + Redis 구현으로 조립하고 컬렉션 인덱스를 준비합니다.
    pub async fn with_mongo(
        database: Arc<Database>,
        redis: Arc<RedisClient>,
        token_service: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> Result<Self, AppError> {
        let users = MongoUserRepository::new(database.clone(), redis);
        users.create_indexes().await?;

        let roles = MongoRoleRepository::new(database);
        roles.create_indexes().await?;

        Ok(Self::new(Arc::new(users), Arc::new(roles), token_service, bcrypt_cost))
    }

    /// 메모리 저장소로 조립합니다 (로컬 실행, 테스트).
    pub fn in_memory(token_service: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryRoleRepository::new()),
            token_service,
            bcrypt_cost,
        )
    }

    /// 기본 역할을 보장하고, `admin_email` 사용자가 있으면 관리자 역할을 부여합니다.
    pub async fn bootstrap(&self, admin_email: Option<&str>) -> Result<(), AppError> {
        self.role_service.seed_defaults().await?;

        let Some(email) = admin_email.map(normalize_email) else {
            return Ok(());
        };

        match self.user_repo.get_by_email(&email).await? {
            Some(user) => {
                let id = user.id_string().ok_or_else(|| {
                    AppError::InternalError("관리자 계정에 ID가 없습니다".to_string())
                })?;
                self.user_service.assign_role(&id, ADMIN_ROLE).await?;
                log::info!("👑 관리자 권한 확인: {}", email);
            }
            None => log::warn!("⚠️ ADMIN_EMAIL 사용자가 아직 없습니다: {}", email),
        }

        Ok(())
    }

    /// 서비스들을 app data로 등록하고 모든 라우트를 구성합니다.
    ///
    /// ```rust,ignore
    /// HttpServer::new(move || {
    ///     let module = module.clone();
    ///     App::new().configure(move |cfg| module.configure(cfg))
    /// })
    /// ```
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.user_service.clone()))
            .app_data(web::Data::from(self.role_service.clone()))
            .app_data(web::Data::from(self.auth_service.clone()))
            .app_data(web::Data::from(self.token_service.clone()));

        configure_all_routes(cfg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::CreateUserRequest;

    fn module() -> AccountModule {
        AccountModule::in_memory(Arc::new(TokenService::new("module-secret", 1, 7)), 4)
    }

    #[actix_web::test]
    async fn test_bootstrap_seeds_roles_and_promotes_admin() {
        let module = module();
        module.user_service.create(CreateUserRequest {
            email: "root@example.com".to_string(),
            username: "root".to_string(),
            name: "Root".to_string(),
            fullname: "Root Admin".to_string(),
            password: "RootPass123".to_string(),
        })
        .await
        .unwrap();

        module.bootstrap(Some("root@example.com")).await.unwrap();

        assert!(module.role_repo.get_by_name("admin").await.unwrap().is_some());
        let root = module.user_service.get_by_email("root@example.com").await.unwrap();
        assert!(root.has_role(ADMIN_ROLE));
    }

    #[actix_web::test]
    async fn test_bootstrap_matches_admin_email_case_insensitively() {
        let module = module();
        module.user_service.create(CreateUserRequest {
            email: "root@example.com".to_string(),
            username: "root".to_string(),
            name: "Root".to_string(),
            fullname: "Root Admin".to_string(),
            password: "RootPass123".to_string(),
        })
        .await
        .unwrap();

        module.bootstrap(Some(" Root@Example.com ")).await.unwrap();

        let root = module.user_service.get_by_email("root@example.com").await.unwrap();
        assert!(root.has_role(ADMIN_ROLE));
    }

    #[actix_web::test]
    async fn test_bootstrap_without_admin_user_succeeds() {
        let module = module();
        module.bootstrap(Some("nobody@example.com")).await.unwrap();
        module.bootstrap(None).await.unwrap();

        assert!(module.role_repo.get_by_name("user").await.unwrap().is_some());
    }
}
