use sea_orm::entity::prelude::*;

super::base::base_model! {
    table_name = "inheritance_childa";
    pub relation_a_id: i32,
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
}

impl Related<super::relation_a::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RelationA.def()
    }
}
