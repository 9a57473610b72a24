use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioSettings::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(PortfolioSettings::Name).text().not_null())
                    .col(ColumnDef::new(PortfolioSettings::Title).text().not_null())
                    .col(ColumnDef::new(PortfolioSettings::Bio).text().not_null())
                    .col(ColumnDef::new(PortfolioSettings::ProfileImage).text())
                    .col(ColumnDef::new(PortfolioSettings::ResumeLink).text())
                    .col(ColumnDef::new(PortfolioSettings::Linkedin).text())
                    .col(ColumnDef::new(PortfolioSettings::Github).text())
                    .col(ColumnDef::new(PortfolioSettings::Devpost).text())
                    .col(ColumnDef::new(PortfolioSettings::Leetcode).text())
                    .col(ColumnDef::new(PortfolioSettings::Email).text())
                    .col(ColumnDef::new(PortfolioSettings::AboutDescription).text())
                    .col(
                        ColumnDef::new(PortfolioSettings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PortfolioSettings::UpdatedAt)
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
                CREATE TRIGGER update_portfolio_settings_updated_at
                BEFORE UPDATE ON portfolio_settings
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
                "DROP TRIGGER IF EXISTS update_portfolio_settings_updated_at ON portfolio_settings;",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioSettings {
    Table,
    Id,
    Name,
    Title,
    Bio,
    ProfileImage,
    ResumeLink,
    Linkedin,
    Github,
    Devpost,
    Leetcode,
    Email,
    AboutDescription,
    CreatedAt,
    UpdatedAt,
}
