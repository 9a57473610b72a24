pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_updated_at_function;
mod m20260301_000010_create_table_portfolio_settings;
mod m20260301_000020_create_table_projects;
mod m20260301_000030_create_table_skills;
mod m20260301_000040_create_table_experiences;
mod m20260301_000050_create_table_coding_profiles;
mod m20260301_000060_create_table_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_updated_at_function::Migration),
            Box::new(m20260301_000010_create_table_portfolio_settings::Migration),
            Box::new(m20260301_000020_create_table_projects::Migration),
            Box::new(m20260301_000030_create_table_skills::Migration),
            Box::new(m20260301_000040_create_table_experiences::Migration),
            Box::new(m20260301_000050_create_table_coding_profiles::Migration),
            Box::new(m20260301_000060_create_table_messages::Migration),
        ]
    }
}
