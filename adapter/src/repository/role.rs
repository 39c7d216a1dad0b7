use crate::database::{model::role::RoleRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::RoleId,
    role::{
        event::{CreateRole, UpdateRole},
        Role,
    },
};
use kernel::repository::role::RoleRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RoleRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoleRepository for RoleRepositoryImpl {
    async fn create(&self, event: CreateRole) -> AppResult<RoleId> {
        let role_id = RoleId::new();
        let caps = event.capabilities;
        let res = sqlx::query(
            r#"
                INSERT INTO roles
                (role_id, role_name, can_answer_questions, is_root,
                 can_create_roles, can_remove_roles, can_change_roles, can_assign_roles)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(role_id)
        .bind(event.name.as_str())
        .bind(caps.answer_questions)
        .bind(caps.root)
        .bind(caps.create_roles)
        .bind(caps.remove_roles)
        .bind(caps.change_roles)
        .bind(caps.assign_roles)
        .execute(self.db.inner_ref())
        .await;

        match res {
            Ok(_) => Ok(role_id),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::UnprocessableEntity(format!(
                    "a role named \"{}\" already exists",
                    event.name
                )))
            }
            Err(e) => Err(AppError::SpecificOperationError(e)),
        }
    }

    async fn find_all(&self) -> AppResult<Vec<Role>> {
        let rows: Vec<RoleRow> = sqlx::query_as(
            r#"
                SELECT
                    role_id, role_name,
                    can_answer_questions, is_root,
                    can_create_roles, can_remove_roles,
                    can_change_roles, can_assign_roles
                FROM roles
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Role::try_from).collect()
    }

    async fn find_by_id(&self, role_id: RoleId) -> AppResult<Role> {
        let row: Option<RoleRow> = sqlx::query_as(
            r#"
                SELECT
                    role_id, role_name,
                    can_answer_questions, is_root,
                    can_create_roles, can_remove_roles,
                    can_change_roles, can_assign_roles
                FROM roles
                WHERE role_id = $1
            "#,
        )
        .bind(role_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            Some(row) => Role::try_from(row),
            None => Err(AppError::EntityNotFound(format!(
                "role {role_id} was not found"
            ))),
        }
    }

    async fn update(&self, event: UpdateRole) -> AppResult<()> {
        let name = event.name.as_ref().map(|n| n.as_str());
        let caps = event.capabilities;
        let res = sqlx::query(
            r#"
                UPDATE roles
                SET role_name = COALESCE($2, role_name),
                    can_answer_questions = COALESCE($3, can_answer_questions),
                    is_root = COALESCE($4, is_root),
                    can_create_roles = COALESCE($5, can_create_roles),
                    can_remove_roles = COALESCE($6, can_remove_roles),
                    can_change_roles = COALESCE($7, can_change_roles),
                    can_assign_roles = COALESCE($8, can_assign_roles)
                WHERE role_id = $1
            "#,
        )
        .bind(event.role_id)
        .bind(name)
        .bind(caps.map(|c| c.answer_questions))
        .bind(caps.map(|c| c.root))
        .bind(caps.map(|c| c.create_roles))
        .bind(caps.map(|c| c.remove_roles))
        .bind(caps.map(|c| c.change_roles))
        .bind(caps.map(|c| c.assign_roles))
        .execute(self.db.inner_ref())
        .await;

        let res = match res {
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(AppError::UnprocessableEntity(
                    "the new role name is already taken".into(),
                ))
            }
            other => other.map_err(AppError::SpecificOperationError)?,
        };
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "role {} was not found",
                event.role_id
            )));
        }
        Ok(())
    }

    async fn delete(&self, role_id: RoleId) -> AppResult<()> {
        // users.role_id carries ON DELETE SET NULL, so assignments
        // pointing at this role disappear together with it
        let res = sqlx::query("DELETE FROM roles WHERE role_id = $1")
            .bind(role_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "role {role_id} was not found"
            )));
        }
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM roles")
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{name::DescriptiveName, role::RoleCapabilities};

    fn caps_answering() -> RoleCapabilities {
        RoleCapabilities {
            answer_questions: true,
            ..RoleCapabilities::default()
        }
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_role_lifecycle(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = RoleRepositoryImpl::new(ConnectionPool::new(pool));

        // migrations seed the root role
        let seeded = repo.find_all().await?;
        assert_eq!(seeded.len(), 1);
        assert_eq!(seeded[0].name, "root");

        let role_id = repo
            .create(CreateRole::new(
                DescriptiveName::new("first-line support")?,
                caps_answering(),
            ))
            .await?;

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 2);

        let found = repo.find_by_id(role_id).await?;
        assert_eq!(found.name, "first-line support");
        assert_eq!(found.capabilities, caps_answering());

        repo.update(UpdateRole {
            role_id,
            name: Some(DescriptiveName::new("triage")?),
            capabilities: None,
        })
        .await?;
        let renamed = repo.find_by_id(role_id).await?;
        assert_eq!(renamed.name, "triage");
        // capabilities untouched by a rename-only update
        assert_eq!(renamed.capabilities, caps_answering());

        repo.delete(role_id).await?;
        assert!(matches!(
            repo.find_by_id(role_id).await,
            Err(AppError::EntityNotFound(_))
        ));

        repo.delete_all().await?;
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_duplicate_role_name_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = RoleRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateRole::new(
            DescriptiveName::new("triage")?,
            RoleCapabilities::default(),
        ))
        .await?;

        let res = repo
            .create(CreateRole::new(
                DescriptiveName::new("triage")?,
                caps_answering(),
            ))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_deleting_missing_role_is_not_found(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = RoleRepositoryImpl::new(ConnectionPool::new(pool));
        let res = repo.delete(RoleId::new()).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
