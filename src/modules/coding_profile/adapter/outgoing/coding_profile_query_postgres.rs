use async_trait::async_trait;
use sea_orm::{sea_query::Expr, DatabaseConnection, DbErr, EntityTrait, Order, QueryOrder};
use std::sync::Arc;

use crate::modules::coding_profile::adapter::outgoing::sea_orm_entity::coding_profiles::Entity;
use crate::modules::coding_profile::application::ports::outgoing::{
    CodingProfileQuery, CodingProfileQueryError, CodingProfileResult,
};

#[derive(Debug, Clone)]
pub struct CodingProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CodingProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CodingProfileQuery for CodingProfileQueryPostgres {
    async fn list_coding_profiles(
        &self,
    ) -> Result<Vec<CodingProfileResult>, CodingProfileQueryError> {
        let models = Entity::find()
            // Byte-wise, independent of the database locale.
            .order_by(Expr::cust(r#""coding_profiles"."platform" COLLATE "C""#), Order::Asc)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models
            .into_iter()
            .map(|m| {
                m.to_result()
                    .map_err(|e| CodingProfileQueryError::SerializationError(e.to_string()))
            })
            .collect()
    }
}

fn map_db_err(e: DbErr) -> CodingProfileQueryError {
    CodingProfileQueryError::DatabaseError(e.to_string())
}
