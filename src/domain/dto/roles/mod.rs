//! 역할 관련 요청/응답 DTO

pub mod role_dto;

pub use role_dto::{CreateRoleRequest, RoleResponse, UpdateRoleRequest};
