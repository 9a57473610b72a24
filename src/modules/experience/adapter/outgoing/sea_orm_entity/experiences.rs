use sea_orm::entity::prelude::*;

use crate::modules::experience::application::domain::entities::ExperienceType;
use crate::modules::experience::application::ports::outgoing::ExperienceResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub company: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub period: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    // work | education | hackathon | certification (CHECK constraint)
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub experience_type: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_result(self) -> ExperienceResult {
        let experience_type = self.experience_type.parse().unwrap_or_else(|_| {
            tracing::warn!(
                experience_id = %self.id,
                stored = %self.experience_type,
                "Unknown experience type in store, reporting as work"
            );
            ExperienceType::default()
        });

        ExperienceResult {
            id: self.id,
            title: self.title,
            company: self.company,
            location: self.location,
            period: self.period,
            description: self.description,
            experience_type,
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
