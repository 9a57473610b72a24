use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CodingProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CodingProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(CodingProfiles::Platform)
                            .text()
                            .not_null()
                            .extra("COLLATE \"C\""),
                    )
                    .col(ColumnDef::new(CodingProfiles::Username).text().not_null())
                    .col(ColumnDef::new(CodingProfiles::Description).text())
                    .col(ColumnDef::new(CodingProfiles::Icon).text())
                    .col(ColumnDef::new(CodingProfiles::Color).text())
                    .col(ColumnDef::new(CodingProfiles::Link).text())
                    .col(
                        ColumnDef::new(CodingProfiles::Stats)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(CodingProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CodingProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_coding_profiles_updated_at
                BEFORE UPDATE ON coding_profiles
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_coding_profiles_updated_at ON coding_profiles;",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CodingProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CodingProfiles {
    Table,
    Id,
    Platform,
    Username,
    Description,
    Icon,
    Color,
    Link,
    Stats,
    CreatedAt,
    UpdatedAt,
}
