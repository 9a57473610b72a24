use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    ActiveModel, Column, Entity,
};
use crate::modules::experience::application::ports::outgoing::{
    CreateExperienceData, ExperienceRepository, ExperienceRepositoryError, ExperienceResult,
    PatchExperienceData,
};

#[derive(Debug, Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn create_experience(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            company: Set(data.company),
            location: Set(data.location),
            period: Set(data.period),
            description: Set(data.description),
            experience_type: Set(data.experience_type.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_result())
    }

    async fn patch_experience(
        &self,
        experience_id: Uuid,
        data: PatchExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(period) = data.period {
            model.period = Set(period);
        }
        if let Some(kind) = data.experience_type {
            model.experience_type = Set(kind.as_str().to_string());
        }
        if let Some(company) = data.company.into_update() {
            model.company = Set(company);
        }
        if let Some(location) = data.location.into_update() {
            model.location = Set(location);
        }
        if let Some(description) = data.description.into_update() {
            model.description = Set(description);
        }

        let has_changes = model.title.is_set()
            || model.period.is_set()
            || model.experience_type.is_set()
            || model.company.is_set()
            || model.location.is_set()
            || model.description.is_set();

        if !has_changes {
            let current = Entity::find_by_id(experience_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ExperienceRepositoryError::NotFound)?;

            return Ok(current.to_result());
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(experience_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ExperienceRepositoryError::NotFound)?;

        Ok(updated.to_result())
    }

    async fn delete_experience(
        &self,
        experience_id: Uuid,
    ) -> Result<(), ExperienceRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(experience_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}
