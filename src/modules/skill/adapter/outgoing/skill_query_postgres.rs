use async_trait::async_trait;
use sea_orm::{sea_query::Expr, DatabaseConnection, DbErr, EntityTrait, Order, QueryOrder};
use std::sync::Arc;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{Column, Entity};
use crate::modules::skill::application::ports::outgoing::{
    SkillQuery, SkillQueryError, SkillResult,
};

#[derive(Debug, Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list_skills(&self) -> Result<Vec<SkillResult>, SkillQueryError> {
        let models = Entity::find()
            // Byte-wise, independent of the database locale.
            .order_by(Expr::cust(r#""skills"."category" COLLATE "C""#), Order::Asc)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(|m| m.to_result()).collect())
    }
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}
