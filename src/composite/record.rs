use sea_orm::{ConnectionTrait, IdenStatic, entity::prelude::*};

use crate::fields::validate_active_text;

/// Both references are optional; a row may carry none, one or both.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "composite_composite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub title: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub content: String,
    pub relation_a_id: Option<i32>,
    pub relation_b_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::relation_a::Entity",
        from = "Column::RelationAId",
        to = "super::relation_a::Column::Id",
        on_delete = "Cascade"
    )]
    RelationA,
    #[sea_orm(
        belongs_to = "super::relation_b::Entity",
        from = "Column::RelationBId",
        to = "super::relation_b::Column::Id",
        on_delete = "Cascade"
    )]
    RelationB,
}

impl Related<super::relation_a::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RelationA.def()
    }
}

impl Related<super::relation_b::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RelationB.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        validate_active_text(Column::Title.as_str(), &self.title)?;
        validate_active_text(Column::Content.as_str(), &self.content)?;
        Ok(self)
    }
}
