//! 메모리 기반 리포지토리
//!
//! `STORAGE_BACKEND=memory`로 실행할 때와 테스트에서 사용합니다.
//! MongoDB 구현과 같은 계약을 지킵니다: 잘못된 ID 형식은 `ValidationError`,
//! 유니크 필드 중복은 `ConflictError`로 보고됩니다.
//! 프로세스가 종료되면 데이터는 사라집니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::dto::common::PaginationOptions;
use crate::domain::entities::{roles::Role, users::User};
use crate::errors::{duplicate_key_conflict, AppError};
use super::roles::RoleRepository;
use super::users::UserRepository;

fn parse_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

fn duplicate_key(collection: &str, field: &str, value: &str) -> AppError {
    duplicate_key_conflict(&format!(
        "E11000 duplicate key error collection: {} index: {}_unique dup key: {{ {}: \"{}\" }}",
        collection, field, field, value
    ))
}

fn page_of<T: Clone>(items: &[T], options: &PaginationOptions) -> Vec<T> {
    let skip = usize::try_from(options.skip()).unwrap_or(usize::MAX);
    let limit = usize::try_from(options.limit).unwrap_or(usize::MAX);
    items.iter().skip(skip).take(limit).cloned().collect()
}

struct Store<T> {
    rows: RwLock<HashMap<ObjectId, T>>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self { rows: RwLock::new(HashMap::new()) }
    }
}

impl<T> Store<T> {
    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ObjectId, T>>, AppError> {
        self.rows
            .read()
            .map_err(|_| AppError::InternalError("메모리 저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<ObjectId, T>>, AppError> {
        self.rows
            .write()
            .map_err(|_| AppError::InternalError("메모리 저장소 잠금 실패".to_string()))
    }
}

/// 메모리 사용자 리포지토리
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: Store<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_unique(rows: &HashMap<ObjectId, User>, user: &User, except: Option<ObjectId>) -> Result<(), AppError> {
        for (id, existing) in rows {
            if Some(*id) == except {
                continue;
            }
            if existing.email == user.email {
                return Err(duplicate_key("users", "email", &user.email));
            }
            if existing.username == user.username {
                return Err(duplicate_key("users", "username", &user.username));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_id(id)?;
        Ok(self.store.read()?.get(&object_id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.store.read()?.values().find(|u| u.email == email).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.store.read()?.values().find(|u| u.username == username).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut rows = self.store.write()?;
        Self::check_unique(&rows, &user, None)?;

        let id = ObjectId::new();
        user.id = Some(id);
        rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: &str, user: &User) -> Result<Option<User>, AppError> {
        let object_id = parse_id(id)?;
        let mut rows = self.store.write()?;

        let Some(created_at) = rows.get(&object_id).map(|existing| existing.created_at) else {
            return Ok(None);
        };
        Self::check_unique(&rows, user, Some(object_id))?;

        let mut updated = user.clone();
        updated.id = Some(object_id);
        updated.created_at = created_at;
        rows.insert(object_id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_id(id)?;
        Ok(self.store.write()?.remove(&object_id).is_some())
    }

    async fn find_page(&self, options: &PaginationOptions) -> Result<(Vec<User>, u64), AppError> {
        let rows = self.store.read()?;
        let mut users: Vec<User> = rows.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));

        Ok((page_of(&users, options), users.len() as u64))
    }

    async fn replace_role(&self, old: &str, new: Option<&str>) -> Result<u64, AppError> {
        let mut rows = self.store.write()?;
        let mut changed = 0;

        for user in rows.values_mut().filter(|u| u.has_role(old)) {
            match new {
                Some(new) => {
                    for role in user.roles.iter_mut().filter(|r| r.as_str() == old) {
                        *role = new.to_string();
                    }
                }
                None => user.roles.retain(|r| r != old),
            }
            changed += 1;
        }
        Ok(changed)
    }
}

/// 메모리 역할 리포지토리
#[derive(Default)]
pub struct InMemoryRoleRepository {
    store: Store<Role>,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_unique(rows: &HashMap<ObjectId, Role>, role: &Role, except: Option<ObjectId>) -> Result<(), AppError> {
        let clash = rows
            .iter()
            .any(|(id, existing)| Some(*id) != except && existing.name == role.name);
        if clash {
            return Err(duplicate_key("roles", "name", &role.name));
        }
        Ok(())
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<Role>, AppError> {
        let object_id = parse_id(id)?;
        Ok(self.store.read()?.get(&object_id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Role>, AppError> {
        Ok(self.store.read()?.values().find(|r| r.name == name).cloned())
    }

    async fn create(&self, mut role: Role) -> Result<Role, AppError> {
        let mut rows = self.store.write()?;
        Self::check_unique(&rows, &role, None)?;

        let id = ObjectId::new();
        role.id = Some(id);
        rows.insert(id, role.clone());
        Ok(role)
    }

    async fn update(&self, id: &str, role: &Role) -> Result<Option<Role>, AppError> {
        let object_id = parse_id(id)?;
        let mut rows = self.store.write()?;

        if !rows.contains_key(&object_id) {
            return Ok(None);
        }
        Self::check_unique(&rows, role, Some(object_id))?;

        let mut updated = role.clone();
        updated.id = Some(object_id);
        rows.insert(object_id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_id(id)?;
        Ok(self.store.write()?.remove(&object_id).is_some())
    }

    async fn find_page(&self, options: &PaginationOptions) -> Result<(Vec<Role>, u64), AppError> {
        let rows = self.store.read()?;
        let mut roles: Vec<Role> = rows.values().cloned().collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));

        Ok((page_of(&roles, options), roles.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, username: &str) -> User {
        User::new(
            email.to_string(),
            username.to_string(),
            "Name".to_string(),
            "Full Name".to_string(),
        )
    }

    #[actix_web::test]
    async fn test_create_assigns_id_and_lookups_work() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("a@example.com", "alice")).await.unwrap();
        let id = created.id_string().unwrap();

        assert!(repo.get_by_id(&id).await.unwrap().is_some());
        assert!(repo.get_by_email("a@example.com").await.unwrap().is_some());
        assert!(repo.get_by_username("alice").await.unwrap().is_some());
        assert!(repo.get_by_email("missing@example.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_unique_fields_are_enforced() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("a@example.com", "alice")).await.unwrap();

        match repo.create(user("a@example.com", "other")).await {
            Err(AppError::ConflictError(message)) => assert_eq!(message, "Email is already in use"),
            other => panic!("expected ConflictError, got {:?}", other),
        }

        match repo.create(user("b@example.com", "alice")).await {
            Err(AppError::ConflictError(message)) => assert_eq!(message, "Username is already in use"),
            other => panic!("expected ConflictError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_invalid_id_is_validation_error() {
        let repo = InMemoryUserRepository::new();
        assert!(matches!(repo.get_by_id("nope").await, Err(AppError::ValidationError(_))));
        assert!(matches!(repo.delete("nope").await, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_update_and_delete_missing_rows() {
        let repo = InMemoryUserRepository::new();
        let missing = ObjectId::new().to_hex();
        let u = user("a@example.com", "alice");

        assert!(repo.update(&missing, &u).await.unwrap().is_none());
        assert!(!repo.delete(&missing).await.unwrap());
    }

    #[actix_web::test]
    async fn test_update_keeps_id_and_created_at() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("a@example.com", "alice")).await.unwrap();
        let id = created.id_string().unwrap();

        let mut changed = created.clone();
        changed.id = None;
        changed.name = "Changed".to_string();
        let updated = repo.update(&id, &changed).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(repo.get_by_id(&id).await.unwrap().unwrap().name, "Changed");
    }

    #[actix_web::test]
    async fn test_find_page_slices_and_counts() {
        let repo = InMemoryUserRepository::new();
        for i in 0..25 {
            repo.create(user(&format!("u{}@example.com", i), &format!("user{}", i))).await.unwrap();
        }

        let (page, total) = repo.find_page(&PaginationOptions::new(3, 10)).await.unwrap();
        assert_eq!(total, 25);
        assert_eq!(page.len(), 5);
    }

    #[actix_web::test]
    async fn test_replace_role_renames_and_removes() {
        let repo = InMemoryUserRepository::new();
        let mut admin = user("a@example.com", "alice");
        admin.roles.push("admin".to_string());
        let admin = repo.create(admin).await.unwrap();
        repo.create(user("b@example.com", "bob")).await.unwrap();

        assert_eq!(repo.replace_role("admin", Some("owner")).await.unwrap(), 1);
        let id = admin.id_string().unwrap();
        assert_eq!(repo.get_by_id(&id).await.unwrap().unwrap().roles, vec!["user", "owner"]);

        assert_eq!(repo.replace_role("owner", None).await.unwrap(), 1);
        assert_eq!(repo.get_by_id(&id).await.unwrap().unwrap().roles, vec!["user"]);
        assert_eq!(repo.replace_role("missing", None).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_role_name_is_unique() {
        let repo = InMemoryRoleRepository::new();
        repo.create(Role::new("admin".to_string(), None)).await.unwrap();

        let duplicate = repo.create(Role::new("admin".to_string(), None)).await;
        assert!(matches!(duplicate, Err(AppError::ConflictError(_))));
        assert!(repo.get_by_name("admin").await.unwrap().is_some());
    }
}
