mod message_query_postgres;
mod message_repository_postgres;
pub mod sea_orm_entity;

pub use message_query_postgres::MessageQueryPostgres;
pub use message_repository_postgres::MessageRepositoryPostgres;
