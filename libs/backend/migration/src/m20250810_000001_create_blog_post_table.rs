use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPosts::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPosts::Slug).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Title).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Date).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Summary).text().not_null())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(ColumnDef::new(BlogPosts::Tags).text().not_null())
                    .col(
                        ColumnDef::new(BlogPosts::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(BlogPosts::FeaturedImage).string())
                    .col(ColumnDef::new(BlogPosts::MetaTitle).string())
                    .col(ColumnDef::new(BlogPosts::MetaDescription).text())
                    .col(ColumnDef::new(BlogPosts::CanonicalUrl).string())
                    .col(ColumnDef::new(BlogPosts::OgTitle).string())
                    .col(ColumnDef::new(BlogPosts::OgDescription).text())
                    .col(ColumnDef::new(BlogPosts::OgImage).string())
                    .col(ColumnDef::new(BlogPosts::TwitterCardType).string())
                    .col(ColumnDef::new(BlogPosts::TwitterTitle).string())
                    .col(ColumnDef::new(BlogPosts::TwitterDescription).text())
                    .col(ColumnDef::new(BlogPosts::TwitterImage).string())
                    .col(ColumnDef::new(BlogPosts::Robots).string())
                    .col(ColumnDef::new(BlogPosts::Keywords).text())
                    .col(
                        ColumnDef::new(BlogPosts::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BlogPosts::UpdatedAt).date_time())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlogPosts {
    Table,
    Id,
    Slug,
    Title,
    Date,
    Summary,
    Content,
    Tags,
    Published,
    FeaturedImage,
    MetaTitle,
    MetaDescription,
    CanonicalUrl,
    OgTitle,
    OgDescription,
    OgImage,
    TwitterCardType,
    TwitterTitle,
    TwitterDescription,
    TwitterImage,
    Robots,
    Keywords,
    CreatedAt,
    UpdatedAt,
}
