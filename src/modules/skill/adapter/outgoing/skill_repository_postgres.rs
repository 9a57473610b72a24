use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{
    ActiveModel, Column, Entity,
};
use crate::modules::skill::application::ports::outgoing::{
    CreateSkillData, PatchSkillData, SkillRepository, SkillRepositoryError, SkillResult,
};

#[derive(Debug, Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn create_skill(
        &self,
        data: CreateSkillData,
    ) -> Result<SkillResult, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            level: Set(data.level),
            category: Set(data.category),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_result())
    }

    async fn patch_skill(
        &self,
        skill_id: Uuid,
        data: PatchSkillData,
    ) -> Result<SkillResult, SkillRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = data.name {
            model.name = Set(name);
        }
        if let Some(level) = data.level {
            model.level = Set(level);
        }
        if let Some(category) = data.category {
            model.category = Set(category);
        }

        let has_changes = model.name.is_set() || model.level.is_set() || model.category.is_set();

        if !has_changes {
            let current = Entity::find_by_id(skill_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(SkillRepositoryError::NotFound)?;

            return Ok(current.to_result());
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(skill_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(SkillRepositoryError::NotFound)?;

        Ok(updated.to_result())
    }

    async fn delete_skill(&self, skill_id: Uuid) -> Result<(), SkillRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(skill_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}
