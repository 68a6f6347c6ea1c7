use sea_orm_migration::{
    prelude::*,
    sea_orm::{EnumIter, Iterable},
    sea_query::extension::postgres::Type,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("work_type"))
                    .values(WorkType::iter())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkItems::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkItems::Slug).string().not_null())
                    .col(
                        ColumnDef::new(WorkItems::WorkType)
                            .enumeration(
                                Alias::new("work_type"),
                                WorkType::iter(),
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkItems::Title).string().not_null())
                    .col(
                        ColumnDef::new(WorkItems::Subtext).string().not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkItems::Description)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkItems::Content).text())
                    .col(ColumnDef::new(WorkItems::Tags).text().not_null())
                    .col(ColumnDef::new(WorkItems::Image).string().not_null())
                    .col(ColumnDef::new(WorkItems::Link).string())
                    .col(ColumnDef::new(WorkItems::Date).string())
                    .col(
                        ColumnDef::new(WorkItems::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(WorkItems::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WorkItems::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkItems::UpdatedAt).date_time())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkItems::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Alias::new("work_type")).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkItems {
    Table,
    Id,
    Slug,
    WorkType,
    Title,
    Subtext,
    Description,
    Content,
    Tags,
    Image,
    Link,
    Date,
    Published,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, EnumIter)]
pub enum WorkType {
    #[iden = "project"]
    Project,
    #[iden = "blog"]
    Blog,
}
