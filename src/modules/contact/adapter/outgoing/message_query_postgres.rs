use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::messages::{Column, Entity};
use crate::modules::contact::application::ports::outgoing::{
    MessageQuery, MessageQueryError, MessageResult,
};

#[derive(Debug, Clone)]
pub struct MessageQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageQuery for MessageQueryPostgres {
    async fn list_messages(&self) -> Result<Vec<MessageResult>, MessageQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::Date)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(|m| m.to_result()).collect())
    }
}

fn map_db_err(e: DbErr) -> MessageQueryError {
    MessageQueryError::DatabaseError(e.to_string())
}
