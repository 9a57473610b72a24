use sea_orm::entity::prelude::*;

use crate::modules::settings::application::ports::outgoing::SettingsResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub profile_image: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub resume_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub devpost: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub leetcode: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub email: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub about_description: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_result(self) -> SettingsResult {
        SettingsResult {
            id: self.id,
            name: self.name,
            title: self.title,
            bio: self.bio,
            profile_image: self.profile_image,
            resume_link: self.resume_link,
            linkedin: self.linkedin,
            github: self.github,
            devpost: self.devpost,
            leetcode: self.leetcode,
            email: self.email,
            about_description: self.about_description,
        }
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
