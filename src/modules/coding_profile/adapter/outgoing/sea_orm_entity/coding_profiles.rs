use sea_orm::entity::prelude::*;

use crate::modules::coding_profile::application::domain::entities::ProfileStat;
use crate::modules::coding_profile::application::ports::outgoing::CodingProfileResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "coding_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub platform: String,

    #[sea_orm(column_type = "Text")]
    pub username: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub icon: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub color: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub link: Option<String>,

    // [{ "label": .., "value": .. }]
    #[sea_orm(column_type = "JsonBinary")]
    pub stats: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_result(self) -> Result<CodingProfileResult, serde_json::Error> {
        let stats: Vec<ProfileStat> = serde_json::from_value(self.stats)?;

        Ok(CodingProfileResult {
            id: self.id,
            platform: self.platform,
            username: self.username,
            description: self.description,
            icon: self.icon,
            color: self.color,
            link: self.link,
            stats,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
