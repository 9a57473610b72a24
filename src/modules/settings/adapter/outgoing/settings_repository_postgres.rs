use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::settings::adapter::outgoing::sea_orm_entity::portfolio_settings::{
    ActiveModel, Column, Entity,
};
use crate::modules::settings::application::ports::outgoing::{
    NewSettingsData, PatchSettingsData, SettingsRepository, SettingsRepositoryError,
    SettingsResult,
};

#[derive(Debug, Clone)]
pub struct SettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn find_settings(&self) -> Result<Option<SettingsResult>, SettingsRepositoryError> {
        // Oldest row wins if a second one ever slips in
        let model = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_result()))
    }

    async fn insert_settings(
        &self,
        data: NewSettingsData,
    ) -> Result<SettingsResult, SettingsRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            title: Set(data.title),
            bio: Set(data.bio),
            profile_image: Set(data.profile_image),
            resume_link: Set(data.resume_link),
            linkedin: Set(data.linkedin),
            github: Set(data.github),
            devpost: Set(data.devpost),
            leetcode: Set(data.leetcode),
            email: Set(data.email),
            about_description: Set(data.about_description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_result())
    }

    async fn patch_settings(
        &self,
        settings_id: Uuid,
        data: PatchSettingsData,
    ) -> Result<SettingsResult, SettingsRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = data.name {
            model.name = Set(name);
        }
        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(bio) = data.bio {
            model.bio = Set(bio);
        }
        if let Some(v) = data.profile_image.into_update() {
            model.profile_image = Set(v);
        }
        if let Some(v) = data.resume_link.into_update() {
            model.resume_link = Set(v);
        }
        if let Some(v) = data.linkedin.into_update() {
            model.linkedin = Set(v);
        }
        if let Some(v) = data.github.into_update() {
            model.github = Set(v);
        }
        if let Some(v) = data.devpost.into_update() {
            model.devpost = Set(v);
        }
        if let Some(v) = data.leetcode.into_update() {
            model.leetcode = Set(v);
        }
        if let Some(v) = data.email.into_update() {
            model.email = Set(v);
        }
        if let Some(v) = data.about_description.into_update() {
            model.about_description = Set(v);
        }

        let has_changes = model.name.is_set()
            || model.title.is_set()
            || model.bio.is_set()
            || model.profile_image.is_set()
            || model.resume_link.is_set()
            || model.linkedin.is_set()
            || model.github.is_set()
            || model.devpost.is_set()
            || model.leetcode.is_set()
            || model.email.is_set()
            || model.about_description.is_set();

        if !has_changes {
            let current = Entity::find_by_id(settings_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(SettingsRepositoryError::NotFound)?;

            return Ok(current.to_result());
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(settings_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(SettingsRepositoryError::NotFound)?;

        Ok(updated.to_result())
    }
}

fn map_db_err(e: DbErr) -> SettingsRepositoryError {
    SettingsRepositoryError::DatabaseError(e.to_string())
}
