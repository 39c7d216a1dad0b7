use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{PlatformUserId, UserId},
    user::{
        event::{CreateUser, LinkPlatformId, UpdateUserRole},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

const USER_COLUMNS: &str = r#"
    u.user_id, u.user_name, u.platform_id, u.created_at,
    r.role_id, r.role_name,
    r.can_answer_questions, r.is_root,
    r.can_create_roles, r.can_remove_roles,
    r.can_change_roles, r.can_assign_roles
"#;

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<UserId> {
        let user_id = UserId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, platform_id)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(event.platform_id)
        .execute(self.db.inner_ref())
        .await;

        match res {
            Ok(_) => Ok(user_id),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::UnprocessableEntity(
                    "the platform id is already tied to another user".into(),
                ))
            }
            Err(e) => Err(AppError::SpecificOperationError(e)),
        }
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            r#"
                SELECT {USER_COLUMNS}
                FROM users AS u
                LEFT OUTER JOIN roles AS r ON u.role_id = r.role_id
                ORDER BY u.created_at DESC
            "#
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            r#"
                SELECT {USER_COLUMNS}
                FROM users AS u
                LEFT OUTER JOIN roles AS r ON u.role_id = r.role_id
                WHERE u.user_id = $1
            "#
        ))
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_platform_id(&self, platform_id: PlatformUserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            r#"
                SELECT {USER_COLUMNS}
                FROM users AS u
                LEFT OUTER JOIN roles AS r ON u.role_id = r.role_id
                WHERE u.platform_id = $1
            "#
        ))
        .bind(platform_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(UserRow::into_user).transpose()
    }

    async fn link_platform_id(&self, event: LinkPlatformId) -> AppResult<()> {
        // the identity is set once; re-linking has to stay an error
        let res = sqlx::query(
            r#"
                UPDATE users
                SET platform_id = $2
                WHERE user_id = $1 AND platform_id IS NULL
            "#,
        )
        .bind(event.user_id)
        .bind(event.platform_id)
        .execute(self.db.inner_ref())
        .await;

        let res = match res {
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(AppError::UnprocessableEntity(
                    "the platform id is already tied to another user".into(),
                ))
            }
            other => other.map_err(AppError::SpecificOperationError)?,
        };
        if res.rows_affected() < 1 {
            return match self.find_by_id(event.user_id).await? {
                None => Err(AppError::EntityNotFound(format!(
                    "user {} was not found",
                    event.user_id
                ))),
                Some(_) => Err(AppError::UnprocessableEntity(format!(
                    "user {} already has a platform id",
                    event.user_id
                ))),
            };
        }
        Ok(())
    }

    async fn update_role(&self, event: UpdateUserRole) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET role_id = $2
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(event.role_id)
        .execute(self.db.inner_ref())
        .await;

        let res = match res {
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                return Err(AppError::EntityNotFound(
                    "the role to assign does not exist".into(),
                ))
            }
            other => other.map_err(AppError::SpecificOperationError)?,
        };
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "user {} was not found",
                event.user_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::role::RoleRepositoryImpl;
    use kernel::model::{
        id::RoleId,
        name::DescriptiveName,
        role::{event::CreateRole, RoleCapabilities, SupportRole},
    };
    use kernel::repository::role::RoleRepository;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_register_and_link_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let user_id = repo
            .create(CreateUser {
                user_name: "alice".into(),
                platform_id: None,
            })
            .await?;

        let user = repo.find_by_id(user_id).await?.unwrap();
        assert_eq!(user.user_name, "alice");
        assert!(user.platform_id.is_none());
        assert!(user.role.is_none());

        let platform_id = PlatformUserId::new(420_001);
        repo.link_platform_id(LinkPlatformId::new(user_id, platform_id))
            .await?;
        let user = repo.find_by_platform_id(platform_id).await?.unwrap();
        assert_eq!(user.user_id, user_id);

        // linking is set-once
        let res = repo
            .link_platform_id(LinkPlatformId::new(user_id, PlatformUserId::new(9)))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        // and the id is unique across users
        let res = repo
            .create(CreateUser {
                user_name: "impostor".into(),
                platform_id: Some(platform_id),
            })
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_role_assignment(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let roles = RoleRepositoryImpl::new(ConnectionPool::new(pool));

        let user_id = users
            .create(CreateUser {
                user_name: "bob".into(),
                platform_id: Some(PlatformUserId::new(420_002)),
            })
            .await?;
        let role_id = roles
            .create(CreateRole::new(
                DescriptiveName::new("helper")?,
                RoleCapabilities {
                    answer_questions: true,
                    assign_roles: true,
                    ..RoleCapabilities::default()
                },
            ))
            .await?;

        users
            .update_role(UpdateUserRole::new(user_id, Some(role_id)))
            .await?;
        let user = users.find_by_id(user_id).await?.unwrap();
        let role = user.role.expect("role should be assigned");
        assert_eq!(role.role_id, role_id);
        assert!(role.can_answer_questions());
        assert!(!role.can_create_roles());

        // deleting the role clears the assignment
        roles.delete(role_id).await?;
        let user = users.find_by_id(user_id).await?.unwrap();
        assert!(user.role.is_none());

        // assigning an unknown role is an error
        let res = users
            .update_role(UpdateUserRole::new(user_id, Some(RoleId::new())))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
