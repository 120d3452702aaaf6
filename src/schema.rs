//! Table creation for the two schema groups.
//!
//! Tables are listed in dependency order: relation records first, then the
//! records referencing them. Dropping walks the list backwards.
//!
//! Every bounded text column also gets a `CHECK` on its character length,
//! so writes that skip `before_save` (bulk inserts, `update_many`, raw SQL)
//! are still held to the limit.

use sea_orm::{
    ColumnTrait, ColumnType, ConnectionTrait, DbBackend, DbErr, EntityName, EntityTrait,
    IdenStatic, Iterable, Schema,
    sea_query::{Alias, Expr, StringLen, Table, TableCreateStatement, TableDropStatement},
};
use tracing::{debug, info, instrument};

use crate::{composite, inheritance};

/// One of the independent groups of entities.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SchemaGroup {
    /// `RelationA`, `RelationB` and `Composite`
    Composite,
    /// `RelationA`, `RelationB`, `ChildA` and `ChildB`
    Inheritance,
}

impl SchemaGroup {
    pub const ALL: [SchemaGroup; 2] = [SchemaGroup::Composite, SchemaGroup::Inheritance];

    pub fn name(self) -> &'static str {
        match self {
            Self::Composite => "composite",
            Self::Inheritance => "inheritance",
        }
    }

    /// Table names, referenced tables first.
    pub fn table_names(self) -> Vec<String> {
        match self {
            Self::Composite => vec![
                composite::RelationA.table_name().to_owned(),
                composite::RelationB.table_name().to_owned(),
                composite::Composite.table_name().to_owned(),
            ],
            Self::Inheritance => vec![
                inheritance::RelationA.table_name().to_owned(),
                inheritance::RelationB.table_name().to_owned(),
                inheritance::ChildA.table_name().to_owned(),
                inheritance::ChildB.table_name().to_owned(),
            ],
        }
    }

    /// `CREATE TABLE IF NOT EXISTS` for every table of the group, foreign
    /// keys included.
    pub fn create_table_statements(self, backend: DbBackend) -> Vec<TableCreateStatement> {
        match self {
            Self::Composite => vec![
                create_table(backend, composite::RelationA),
                create_table(backend, composite::RelationB),
                create_table(backend, composite::Composite),
            ],
            Self::Inheritance => vec![
                create_table(backend, inheritance::RelationA),
                create_table(backend, inheritance::RelationB),
                create_table(backend, inheritance::ChildA),
                create_table(backend, inheritance::ChildB),
            ],
        }
    }

    /// `DROP TABLE IF EXISTS` for every table of the group, referencing
    /// tables first.
    pub fn drop_table_statements(self) -> Vec<TableDropStatement> {
        self.table_names()
            .into_iter()
            .rev()
            .map(|name| Table::drop().table(Alias::new(name)).if_exists().to_owned())
            .collect()
    }

    /// The create statements as SQL text for `backend`.
    pub fn ddl(self, backend: DbBackend) -> Vec<String> {
        self.create_table_statements(backend)
            .iter()
            .map(|stmt| backend.build(stmt).to_string())
            .collect()
    }
}

impl std::fmt::Display for SchemaGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn create_table<E>(backend: DbBackend, entity: E) -> TableCreateStatement
where
    E: EntityTrait,
{
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    for column in E::Column::iter() {
        if let ColumnType::String(StringLen::N(len)) = column.def().get_column_type() {
            stmt.check(Expr::cust(length_check(backend, column.as_str(), *len)));
        }
    }
    stmt.if_not_exists().to_owned()
}

/// `<length of column> <= len`, counted in characters.
fn length_check(backend: DbBackend, column: &str, len: u32) -> String {
    match backend {
        DbBackend::MySql => format!("CHAR_LENGTH(`{column}`) <= {len}"),
        DbBackend::Postgres => format!("CHAR_LENGTH(\"{column}\") <= {len}"),
        DbBackend::Sqlite => format!("LENGTH(\"{column}\") <= {len}"),
    }
}

/// Create the tables of `group` on `db`.
#[instrument(level = "debug", skip(db))]
pub async fn create_tables<C>(db: &C, group: SchemaGroup) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    for stmt in group.create_table_statements(backend) {
        let stmt = backend.build(&stmt);
        debug!(sql = %stmt, "create table");
        db.execute(stmt).await?;
    }
    info!(group = %group, tables = ?group.table_names(), "tables created");
    Ok(())
}

/// Drop the tables of `group` from `db`. Missing tables are skipped.
#[instrument(level = "debug", skip(db))]
pub async fn drop_tables<C>(db: &C, group: SchemaGroup) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    for stmt in group.drop_table_statements() {
        let stmt = backend.build(&stmt);
        debug!(sql = %stmt, "drop table");
        db.execute(stmt).await?;
    }
    info!(group = %group, "tables dropped");
    Ok(())
}

/// Create the tables of every group.
pub async fn create_all<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    for group in SchemaGroup::ALL {
        create_tables(db, group).await?;
    }
    Ok(())
}
