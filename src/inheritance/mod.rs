//! Inheritance group: two entities built from one field template, each with
//! a required reference to its own relation record.

pub mod base;
pub mod child_a;
pub mod child_b;
pub mod relation_a;
pub mod relation_b;

pub use base::{BaseActiveModel, BaseFields, WithBaseFields};
pub use child_a::Entity as ChildA;
pub use child_b::Entity as ChildB;
pub use relation_a::Entity as RelationA;
pub use relation_b::Entity as RelationB;
