use sea_orm::{ConnectionTrait, IdenStatic, entity::prelude::*};

use crate::fields::validate_active_text;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inheritance_relationb")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub b: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::child_b::Entity")]
    ChildB,
}

impl Related<super::child_b::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChildB.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        validate_active_text(Column::B.as_str(), &self.b)?;
        Ok(self)
    }
}
