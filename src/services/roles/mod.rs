//! 역할 관리 서비스 모듈
//!
//! 역할 CRUD와 기본 역할(`user`, `admin`) 시드를 담당합니다.

pub mod role_service;

pub use role_service::{RoleService, RoleServiceImpl, DEFAULT_ROLES};
