use sea_orm::entity::prelude::*;

#[derive(
    Debug, Default, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "work_type")]
pub enum WorkType {
    #[default]
    #[sea_orm(string_value = "project")]
    Project,
    #[sea_orm(string_value = "blog")]
    Blog,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "work_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub slug: String,
    pub work_type: WorkType,
    pub title: String,
    pub subtext: String,
    pub description: String,
    pub content: Option<String>,
    pub tags: String,
    pub image: String,
    pub link: Option<String>,
    pub date: Option<String>,
    pub published: bool,
    pub display_order: i32,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
