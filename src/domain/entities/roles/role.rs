//! Role Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 관리자 역할 이름
pub const ADMIN_ROLE: &str = "admin";

/// 역할 엔티티
///
/// 역할 이름(`name`)은 전체 역할 사이에서 유일합니다.
/// 사용자는 역할 이름 목록(`User::roles`)으로 역할을 참조합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 역할 이름 (unique)
    pub name: String,
    /// 역할 설명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Role {
    pub fn new(name: String, description: Option<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}
