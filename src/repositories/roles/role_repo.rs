//! MongoDB 역할 리포지토리

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_document},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::{dto::common::PaginationOptions, entities::roles::Role},
    errors::{AppError, ErrorContext},
};
use super::role_repository::RoleRepository;

const COLLECTION: &str = "roles";

/// `roles` 컬렉션 리포지토리
pub struct MongoRoleRepository {
    db: Arc<Database>,
}

impl MongoRoleRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Role> {
        self.db.collection::<Role>(COLLECTION)
    }

    fn parse_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }

    /// `name` 유니크 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("name_unique".to_string())
                .build())
            .build();

        self.collection().create_index(name_index).await?;

        log::info!("📇 roles 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

#[async_trait]
impl RoleRepository for MongoRoleRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<Role>, AppError> {
        let object_id = Self::parse_id(id)?;
        Ok(self.collection().find_one(doc! { "_id": object_id }).await?)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Role>, AppError> {
        Ok(self.collection().find_one(doc! { "name": name }).await?)
    }

    async fn create(&self, mut role: Role) -> Result<Role, AppError> {
        let result = self.collection().insert_one(&role).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 역할 ID를 읽을 수 없습니다".to_string())
        })?;
        role.id = Some(id);

        Ok(role)
    }

    async fn update(&self, id: &str, role: &Role) -> Result<Option<Role>, AppError> {
        let object_id = Self::parse_id(id)?;

        let mut fields = to_document(role).context("역할 문서 직렬화 실패")?;
        fields.remove("_id");

        let result = self.collection()
            .update_one(doc! { "_id": object_id }, doc! { "$set": fields })
            .await?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        let mut updated = role.clone();
        updated.id = Some(object_id);
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = Self::parse_id(id)?;
        let result = self.collection().delete_one(doc! { "_id": object_id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn find_page(&self, options: &PaginationOptions) -> Result<(Vec<Role>, u64), AppError> {
        let collection = self.collection();

        let total = collection.count_documents(doc! {}).await?;

        let limit = i64::try_from(options.limit)
            .map_err(|_| AppError::ValidationError("limit 값이 너무 큽니다".to_string()))?;

        let roles: Vec<Role> = collection
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .skip(options.skip())
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok((roles, total))
    }
}
