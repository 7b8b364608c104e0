//! # 라우트 구성
//!
//! | 스코프 | 보호 |
//! |--------|------|
//! | `/health` | 공개 |
//! | `/api/v1/auth` | 선택적 인증 (`/me`만 토큰 필요) |
//! | `/api/v1/users` | `user` 또는 `admin` 역할 |
//! | `/api/v1/roles` | `admin` 역할 |

use crate::domain::entities::{roles::ADMIN_ROLE, users::DEFAULT_ROLE};
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_role_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .wrap(AuthMiddleware::optional())
            .service(handlers::auth::signup)
            .service(handlers::auth::login)
            .service(handlers::auth::refresh_tokens)
            .service(handlers::auth::verify_token)
            .service(handlers::auth::get_current_user)
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(AuthMiddleware::required_with_roles(vec![DEFAULT_ROLE, ADMIN_ROLE]))
            .service(handlers::users::list_users)
            .service(handlers::users::get_user_by_email)
            .service(handlers::users::get_user_by_username)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
            .service(handlers::users::assign_role)
    );
}

fn configure_role_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/roles")
            .wrap(AuthMiddleware::required_with_role(ADMIN_ROLE))
            .service(handlers::roles::list_roles)
            .service(handlers::roles::create_role)
            .service(handlers::roles::get_role)
            .service(handlers::roles::update_role)
            .service(handlers::roles::delete_role)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use crate::core::AccountModule;
    use crate::services::auth::TokenService;

    fn module() -> AccountModule {
        AccountModule::in_memory(Arc::new(TokenService::new("routes-secret", 1, 7)), 4)
    }

    fn signup_body(email: &str, username: &str) -> Value {
        json!({
            "email": email,
            "username": username,
            "name": "Alice",
            "fullname": "Alice Liddell",
            "password": "Wonderland1"
        })
    }

    macro_rules! app {
        ($module:expr) => {{
            let module = $module.clone();
            test::init_service(App::new().configure(move |cfg| module.configure(cfg))).await
        }};
    }

    macro_rules! login {
        ($app:expr, $email:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(json!({ "email": $email, "password": "Wonderland1" }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&$app, req).await;
            body
        }};
    }

    macro_rules! signup {
        ($app:expr, $email:expr, $username:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/v1/auth/signup")
                .set_json(signup_body($email, $username))
                .to_request();
            test::call_service(&$app, req).await
        }};
    }

    #[actix_web::test]
    async fn test_health() {
        let module = module();
        let app = app!(module);

        let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_signup_login_me_flow() {
        let module = module();
        module.bootstrap(None).await.unwrap();
        let app = app!(module);

        let res = signup!(app, "alice@example.com", "alice");
        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(res).await;
        assert!(created["user"].get("password_hash").is_none());

        let login = login!(app, "alice@example.com");
        assert_eq!(login["token_type"], "Bearer");
        let token = login["access_token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me["email"], "alice@example.com");
        assert_eq!(me["fullname"], "Alice Liddell");
    }

    #[actix_web::test]
    async fn test_duplicate_signup_returns_bad_request() {
        let module = module();
        let app = app!(module);

        assert_eq!(signup!(app, "a@x.com", "alice").status(), StatusCode::CREATED);

        let res = signup!(app, "a@x.com", "alice2");
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Email is already in use");
    }

    #[actix_web::test]
    async fn test_duplicate_username_returns_conflict() {
        let module = module();
        let app = app!(module);

        assert_eq!(signup!(app, "a@x.com", "alice").status(), StatusCode::CREATED);

        let res = signup!(app, "b@x.com", "alice");
        assert_eq!(res.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Conflict error: Username is already in use");
        assert!(!body["error"].as_str().unwrap().contains("E11000"));
    }

    #[actix_web::test]
    async fn test_password_update_is_stored_verbatim() {
        let module = module();
        let app = app!(module);
        signup!(app, "a@x.com", "alice");
        let login = login!(app, "a@x.com");
        let token = login["access_token"].as_str().unwrap().to_string();
        let id = login["user"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/users/{}", id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({ "password": " NewSecret9 " }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "a@x.com", "password": " NewSecret9 " }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/users/{}", id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({ "password": "   " }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Invalid password format");
    }

    #[actix_web::test]
    async fn test_me_without_token_is_unauthorized() {
        let module = module();
        let app = app!(module);

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/v1/auth/me").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/v1/users").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_list_users_returns_page_meta() {
        let module = module();
        let app = app!(module);

        for i in 0..3 {
            signup!(app, &format!("u{}@example.com", i), &format!("user{}", i));
        }
        let login = login!(app, "u0@example.com");
        let token = login["access_token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/v1/users?page=2&limit=2")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["meta"]["itemCount"], 3);
        assert_eq!(body["meta"]["pageCount"], 2);
        assert_eq!(body["meta"]["hasPreviousPage"], true);
        assert_eq!(body["meta"]["hasNextPage"], false);
    }

    #[actix_web::test]
    async fn test_zero_limit_is_rejected() {
        let module = module();
        let app = app!(module);
        signup!(app, "a@x.com", "alice");
        let login = login!(app, "a@x.com");
        let token = login["access_token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/v1/users?limit=0")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_user_cannot_modify_someone_else() {
        let module = module();
        let app = app!(module);
        signup!(app, "a@x.com", "alice");
        signup!(app, "b@x.com", "bob");

        let alice = login!(app, "a@x.com");
        let bob = login!(app, "b@x.com");
        let alice_token = alice["access_token"].as_str().unwrap().to_string();
        let bob_id = bob["user"]["id"].as_str().unwrap().to_string();
        let alice_id = alice["user"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/users/{}", bob_id))
            .insert_header(("Authorization", format!("Bearer {}", alice_token)))
            .set_json(json!({ "name": "Hacked" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/users/{}", alice_id))
            .insert_header(("Authorization", format!("Bearer {}", alice_token)))
            .set_json(json!({ "name": "Al" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Al");
        assert_eq!(body["email"], "a@x.com");
    }

    #[actix_web::test]
    async fn test_roles_require_admin() {
        let module = module();
        module.bootstrap(None).await.unwrap();
        let app = app!(module);
        signup!(app, "a@x.com", "alice");
        signup!(app, "root@x.com", "root");
        module.bootstrap(Some("root@x.com")).await.unwrap();

        let member = login!(app, "a@x.com");
        let member_token = member["access_token"].as_str().unwrap().to_string();
        let req = test::TestRequest::get()
            .uri("/api/v1/roles")
            .insert_header(("Authorization", format!("Bearer {}", member_token)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let admin = login!(app, "root@x.com");
        let admin_token = admin["access_token"].as_str().unwrap().to_string();
        let req = test::TestRequest::post()
            .uri("/api/v1/roles")
            .insert_header(("Authorization", format!("Bearer {}", admin_token)))
            .set_json(json!({ "name": "moderator", "description": "Keeps order" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/users/{}/roles", member["user"]["id"].as_str().unwrap()))
            .insert_header(("Authorization", format!("Bearer {}", admin_token)))
            .set_json(json!({ "role": "moderator" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["roles"], json!(["user", "moderator"]));
    }

    #[actix_web::test]
    async fn test_delete_own_account() {
        let module = module();
        let app = app!(module);
        signup!(app, "a@x.com", "alice");
        let login = login!(app, "a@x.com");
        let token = login["access_token"].as_str().unwrap().to_string();
        let id = login["user"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/users/{}", id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}", id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
