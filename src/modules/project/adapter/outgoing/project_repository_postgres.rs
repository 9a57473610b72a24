use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            tech: Set(to_json(&data.tech)?),
            github: Set(data.github),
            live: Set(data.live),
            image: Set(data.image),
            icon: Set(data.icon),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_result(inserted)
    }

    async fn patch_project(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(description) = data.description {
            model.description = Set(description);
        }
        if let Some(tech) = data.tech {
            model.tech = Set(to_json(&tech)?);
        }
        if let Some(github) = data.github.into_update() {
            model.github = Set(github);
        }
        if let Some(live) = data.live.into_update() {
            model.live = Set(live);
        }
        if let Some(image) = data.image.into_update() {
            model.image = Set(image);
        }
        if let Some(icon) = data.icon.into_update() {
            model.icon = Set(icon);
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.tech.is_set()
            || model.github.is_set()
            || model.live.is_set()
            || model.image.is_set()
            || model.icon.is_set();

        if !has_changes {
            let current = Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return model_to_result(current);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_result(result)
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(project_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: projects::Model) -> Result<ProjectResult, ProjectRepositoryError> {
    model
        .to_result()
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
