//! The field template shared by [`ChildA`](super::ChildA) and
//! [`ChildB`](super::ChildB).
//!
//! The template has no table of its own. [`base_model!`] expands it, by value,
//! into the `Model` of each concrete entity, followed by the entity's own
//! columns; the `before_save` check on the template fields comes with it.

use sea_orm::DbErr;

use crate::fields::validate_text;

/// The template fields as a standalone value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseFields {
    pub title: String,
    pub content: String,
}

impl BaseFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Apply the same checks a concrete entity applies before save.
    pub fn validate(&self) -> Result<(), DbErr> {
        validate_text("title", &self.title)?;
        validate_text("content", &self.content)
    }
}

/// A stored model built from the template.
pub trait WithBaseFields {
    fn base_fields(&self) -> BaseFields;
}

/// An active model built from the template.
pub trait BaseActiveModel {
    fn set_base_fields(&mut self, fields: BaseFields);
}

/// Declare the `Model` of an entity built from the template.
///
/// The calling module must import `sea_orm::entity::prelude::*` and declare
/// its `Relation` enum. The template contributes `id`, `title` and `content`;
/// the columns listed after the table name are appended. Column types are
/// plain identifiers, optionally wrapped once (`i32`, `Option<i32>`).
///
/// ```ignore
/// base_model! {
///     table_name = "inheritance_childa";
///     pub relation_a_id: i32,
/// }
/// ```
macro_rules! base_model {
    (
        table_name = $table:tt;
        $( pub $field:ident : $ty:ident $(< $inner:ident >)?, )*
    ) => {
        #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
        #[sea_orm(table_name = $table)]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i32,
            #[sea_orm(column_type = "String(StringLen::N(255))")]
            pub title: String,
            #[sea_orm(column_type = "String(StringLen::N(255))")]
            pub content: String,
            $( pub $field: $ty $(< $inner >)?, )*
        }

        impl $crate::inheritance::base::WithBaseFields for Model {
            fn base_fields(&self) -> $crate::inheritance::base::BaseFields {
                $crate::inheritance::base::BaseFields {
                    title: self.title.clone(),
                    content: self.content.clone(),
                }
            }
        }

        impl $crate::inheritance::base::BaseActiveModel for ActiveModel {
            fn set_base_fields(&mut self, fields: $crate::inheritance::base::BaseFields) {
                self.title = ::sea_orm::ActiveValue::Set(fields.title);
                self.content = ::sea_orm::ActiveValue::Set(fields.content);
            }
        }

        #[::async_trait::async_trait]
        impl ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
            where
                C: ::sea_orm::ConnectionTrait,
            {
                $crate::fields::validate_active_text(
                    ::sea_orm::IdenStatic::as_str(&Column::Title),
                    &self.title,
                )?;
                $crate::fields::validate_active_text(
                    ::sea_orm::IdenStatic::as_str(&Column::Content),
                    &self.content,
                )?;
                Ok(self)
            }
        }
    };
}

pub(crate) use base_model;
