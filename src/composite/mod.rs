//! Composite group: a record holding optional references to two relation
//! records.

pub mod record;
pub mod relation_a;
pub mod relation_b;

pub use record::Entity as Composite;
pub use relation_a::Entity as RelationA;
pub use relation_b::Entity as RelationB;
