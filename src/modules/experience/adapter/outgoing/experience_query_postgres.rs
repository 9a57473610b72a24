use async_trait::async_trait;
use sea_orm::{sea_query::Expr, DatabaseConnection, DbErr, EntityTrait, Order, QueryOrder};
use std::sync::Arc;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::experiences::{
    Column, Entity,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError, ExperienceResult,
};

#[derive(Debug, Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn list_experiences(&self) -> Result<Vec<ExperienceResult>, ExperienceQueryError> {
        let models = Entity::find()
            // Byte-wise, independent of the database locale.
            .order_by(Expr::cust(r#""experiences"."period" COLLATE "C""#), Order::Desc)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(|m| m.to_result()).collect())
    }
}

fn map_db_err(e: DbErr) -> ExperienceQueryError {
    ExperienceQueryError::DatabaseError(e.to_string())
}
