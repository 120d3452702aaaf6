#![deny(missing_debug_implementations)]

//! # schema-groups
//!
//! Two small groups of SeaORM entities.
//!
//! The **composite** group has a record holding two optional references:
//!
//! ```text
//! composite_relationa ◄──(nullable, cascade)── composite_composite ──(nullable, cascade)──► composite_relationb
//! ```
//!
//! The **inheritance** group has two records built from one field template
//! (`title`, `content`), each with one required reference:
//!
//! ```text
//! inheritance_relationa ◄──(cascade)── inheritance_childa
//! inheritance_relationb ◄──(cascade)── inheritance_childb
//! ```
//!
//! Every text column is limited to 255 characters; the check runs in
//! `before_save`, so it holds on engines which ignore `varchar(n)`.
//!
//! ```no_run
//! use schema_groups::{DatabaseConfig, composite, schema};
//! use sea_orm::{ActiveModelTrait, Set};
//!
//! # async fn run() -> Result<(), schema_groups::SchemaError> {
//! let db = DatabaseConfig::in_memory().connect().await?;
//! schema::create_all(&db).await?;
//!
//! let a = composite::relation_a::ActiveModel {
//!     a: Set("first".to_owned()),
//!     ..Default::default()
//! }
//! .insert(&db)
//! .await?;
//!
//! composite::record::ActiveModel {
//!     title: Set("Title".to_owned()),
//!     content: Set("Content".to_owned()),
//!     relation_a_id: Set(Some(a.id)),
//!     relation_b_id: Set(None),
//!     ..Default::default()
//! }
//! .insert(&db)
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod composite;
pub mod config;
pub mod error;
pub mod fields;
pub mod inheritance;
pub mod schema;

pub use config::DatabaseConfig;
pub use error::SchemaError;
pub use schema::SchemaGroup;
