use sea_orm::{ConnectionTrait, IdenStatic, entity::prelude::*};

use crate::fields::validate_active_text;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "composite_relationa")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub a: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::record::Entity")]
    Composite,
}

impl Related<super::record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Composite.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        validate_active_text(Column::A.as_str(), &self.a)?;
        Ok(self)
    }
}
