pub mod sea_orm_entity;
mod skill_query_postgres;
mod skill_repository_postgres;

pub use skill_query_postgres::SkillQueryPostgres;
pub use skill_repository_postgres::SkillRepositoryPostgres;
