use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::modules::coding_profile::adapter::outgoing::sea_orm_entity::coding_profiles;
use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::seed::application::domain::{PortfolioDataset, SeedSummary};
use crate::modules::seed::application::ports::outgoing::{PortfolioSeedStore, SeedStoreError};
use crate::modules::settings::adapter::outgoing::sea_orm_entity::portfolio_settings;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;

#[derive(Debug, Clone)]
pub struct SeedStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl SeedStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioSeedStore for SeedStorePostgres {
    async fn replace_portfolio(
        &self,
        dataset: PortfolioDataset,
    ) -> Result<SeedSummary, SeedStoreError> {
        // Dropping the transaction without commit rolls everything back
        let txn = self.db.begin().await.map_err(map_db_err)?;

        clear_portfolio(&txn).await.map_err(map_db_err)?;
        let summary = insert_dataset(&txn, dataset).await?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(summary)
    }
}

async fn clear_portfolio(txn: &DatabaseTransaction) -> Result<(), DbErr> {
    let settings = portfolio_settings::Entity::delete_many().exec(txn).await?;
    let projects = projects::Entity::delete_many().exec(txn).await?;
    let skills = skills::Entity::delete_many().exec(txn).await?;
    let experiences = experiences::Entity::delete_many().exec(txn).await?;
    let profiles = coding_profiles::Entity::delete_many().exec(txn).await?;

    debug!(
        settings = settings.rows_affected,
        projects = projects.rows_affected,
        skills = skills.rows_affected,
        experiences = experiences.rows_affected,
        profiles = profiles.rows_affected,
        "Cleared portfolio tables"
    );

    Ok(())
}

async fn insert_dataset(
    txn: &DatabaseTransaction,
    dataset: PortfolioDataset,
) -> Result<SeedSummary, SeedStoreError> {
    let base = Utc::now();

    let s = dataset.settings;
    let settings = portfolio_settings::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(s.name),
        title: Set(s.title),
        bio: Set(s.bio),
        profile_image: Set(s.profile_image),
        resume_link: Set(s.resume_link),
        linkedin: Set(s.linkedin),
        github: Set(s.github),
        devpost: Set(s.devpost),
        leetcode: Set(s.leetcode),
        email: Set(s.email),
        about_description: Set(s.about_description),
        created_at: Set(stamp(base, 0)),
        updated_at: Set(stamp(base, 0)),
    };

    let mut project_models = Vec::with_capacity(dataset.projects.len());
    for (i, p) in dataset.projects.into_iter().enumerate() {
        project_models.push(projects::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(p.title),
            description: Set(p.description),
            tech: Set(to_json(&p.tech)?),
            github: Set(p.github),
            live: Set(p.live),
            image: Set(p.image),
            icon: Set(p.icon),
            created_at: Set(stamp(base, i)),
            updated_at: Set(stamp(base, i)),
        });
    }

    let skill_models = dataset
        .skills
        .into_iter()
        .enumerate()
        .map(|(i, s)| skills::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(s.name),
            level: Set(s.level),
            category: Set(s.category),
            created_at: Set(stamp(base, i)),
            updated_at: Set(stamp(base, i)),
        });

    let experience_models = dataset
        .experiences
        .into_iter()
        .enumerate()
        .map(|(i, e)| experiences::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(e.title),
            company: Set(e.company),
            location: Set(e.location),
            period: Set(e.period),
            description: Set(e.description),
            experience_type: Set(e.experience_type.as_str().to_string()),
            created_at: Set(stamp(base, i)),
            updated_at: Set(stamp(base, i)),
        });

    let mut profile_models = Vec::with_capacity(dataset.profiles.len());
    for (i, p) in dataset.profiles.into_iter().enumerate() {
        profile_models.push(coding_profiles::ActiveModel {
            id: Set(Uuid::new_v4()),
            platform: Set(p.platform),
            username: Set(p.username),
            description: Set(p.description),
            icon: Set(p.icon),
            color: Set(p.color),
            link: Set(p.link),
            stats: Set(to_json(&p.stats)?),
            created_at: Set(stamp(base, i)),
            updated_at: Set(stamp(base, i)),
        });
    }

    let settings = portfolio_settings::Entity::insert(settings)
        .exec_without_returning(txn)
        .await
        .map_err(map_db_err)?;
    let projects = projects::Entity::insert_many(project_models)
        .exec_without_returning(txn)
        .await
        .map_err(map_db_err)?;
    let skills = skills::Entity::insert_many(skill_models)
        .exec_without_returning(txn)
        .await
        .map_err(map_db_err)?;
    let experiences = experiences::Entity::insert_many(experience_models)
        .exec_without_returning(txn)
        .await
        .map_err(map_db_err)?;
    let profiles = coding_profiles::Entity::insert_many(profile_models)
        .exec_without_returning(txn)
        .await
        .map_err(map_db_err)?;

    Ok(SeedSummary {
        settings,
        projects,
        skills,
        experiences,
        profiles,
    })
}

/// Rows of one kind get strictly increasing timestamps in dataset order.
fn stamp(base: DateTime<Utc>, index: usize) -> sea_orm::prelude::DateTimeWithTimeZone {
    (base + TimeDelta::milliseconds(index as i64)).fixed_offset()
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, SeedStoreError> {
    serde_json::to_value(data).map_err(|e| SeedStoreError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> SeedStoreError {
    SeedStoreError::DatabaseError(e.to_string())
}
