//! 계정 관리 서비스 백엔드
//!
//! 사용자와 역할을 관리하고 로컬 계정(이메일/비밀번호) 인증을 제공하는
//! Actix-web 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 가입, 조회(ID/이메일/사용자명), 부분 수정, 삭제, 페이지 목록
//! - **역할 관리**: 역할 CRUD, 기본 역할 시드, 사용자 역할 부여
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **저장소 교체**: MongoDB + Redis 캐시 또는 메모리 저장소
//!
//! # Architecture
//!
//! ```text
//! routes → handlers → services (dyn trait) → repositories (dyn trait) → MongoDB + Redis | memory
//!                         ▲
//!                  middlewares (JWT → AuthenticatedUser)
//! ```
//!
//! 각 계층은 [`core::AccountModule`]에서 생성자 주입으로 조립됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use account_service_backend::core::AccountModule;
//! use account_service_backend::services::auth::TokenService;
//!
//! let module = AccountModule::in_memory(Arc::new(TokenService::from_config()?), 10);
//! module.bootstrap(None).await?;
//!
//! let page = module.user_service.list(Default::default()).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
