use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::coding_profile::adapter::outgoing::sea_orm_entity::coding_profiles::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::coding_profile::application::ports::outgoing::{
    CodingProfileRepository, CodingProfileRepositoryError, CodingProfileResult,
    CreateCodingProfileData, PatchCodingProfileData,
};

#[derive(Debug, Clone)]
pub struct CodingProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CodingProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CodingProfileRepository for CodingProfileRepositoryPostgres {
    async fn create_coding_profile(
        &self,
        data: CreateCodingProfileData,
    ) -> Result<CodingProfileResult, CodingProfileRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            platform: Set(data.platform),
            username: Set(data.username),
            description: Set(data.description),
            icon: Set(data.icon),
            color: Set(data.color),
            link: Set(data.link),
            stats: Set(to_json(&data.stats)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_result(inserted)
    }

    async fn patch_coding_profile(
        &self,
        profile_id: Uuid,
        data: PatchCodingProfileData,
    ) -> Result<CodingProfileResult, CodingProfileRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(platform) = data.platform {
            model.platform = Set(platform);
        }
        if let Some(username) = data.username {
            model.username = Set(username);
        }
        if let Some(stats) = data.stats {
            model.stats = Set(to_json(&stats)?);
        }
        if let Some(description) = data.description.into_update() {
            model.description = Set(description);
        }
        if let Some(icon) = data.icon.into_update() {
            model.icon = Set(icon);
        }
        if let Some(color) = data.color.into_update() {
            model.color = Set(color);
        }
        if let Some(link) = data.link.into_update() {
            model.link = Set(link);
        }

        let has_changes = model.platform.is_set()
            || model.username.is_set()
            || model.stats.is_set()
            || model.description.is_set()
            || model.icon.is_set()
            || model.color.is_set()
            || model.link.is_set();

        if !has_changes {
            let current = Entity::find_by_id(profile_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(CodingProfileRepositoryError::NotFound)?;

            return model_to_result(current);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(profile_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(CodingProfileRepositoryError::NotFound)?;

        model_to_result(updated)
    }

    async fn delete_coding_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<(), CodingProfileRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(profile_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(CodingProfileRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: Model) -> Result<CodingProfileResult, CodingProfileRepositoryError> {
    model
        .to_result()
        .map_err(|e| CodingProfileRepositoryError::SerializationError(e.to_string()))
}

fn to_json<T: serde::Serialize>(
    data: &T,
) -> Result<serde_json::Value, CodingProfileRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| CodingProfileRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> CodingProfileRepositoryError {
    CodingProfileRepositoryError::DatabaseError(e.to_string())
}
