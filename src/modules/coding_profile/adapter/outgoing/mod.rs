mod coding_profile_query_postgres;
mod coding_profile_repository_postgres;
pub mod sea_orm_entity;

pub use coding_profile_query_postgres::CodingProfileQueryPostgres;
pub use coding_profile_repository_postgres::CodingProfileRepositoryPostgres;
