use sea_orm::entity::prelude::*;

super::base::base_model! {
    table_name = "inheritance_childb";
    pub relation_b_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::relation_b::Entity",
        from = "Column::RelationBId",
        to = "super::relation_b::Column::Id",
        on_delete = "Cascade"
    )]
    RelationB,
}

impl Related<super::relation_b::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RelationB.def()
    }
}
