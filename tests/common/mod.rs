use schema_groups::{DatabaseConfig, SchemaError, composite, inheritance, schema};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    /// A fresh in-memory database with every table created.
    pub async fn new() -> Self {
        let db = DatabaseConfig::in_memory().connect().await.unwrap();
        schema::create_all(&db).await.unwrap();
        Self { db }
    }
}

pub fn long_text() -> String {
    "x".repeat(schema_groups::fields::MAX_TEXT_LEN + 1)
}

pub fn assert_validation_error(err: DbErr) {
    let err = SchemaError::from(err);
    assert!(matches!(err, SchemaError::Validation(_)), "{err:?}");
}

pub async fn composite_relation_a(
    db: &DatabaseConnection,
    a: &str,
) -> composite::relation_a::Model {
    composite::relation_a::ActiveModel {
        a: Set(a.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn composite_relation_b(
    db: &DatabaseConnection,
    b: &str,
) -> composite::relation_b::Model {
    composite::relation_b::ActiveModel {
        b: Set(b.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn inheritance_relation_a(
    db: &DatabaseConnection,
    a: &str,
) -> inheritance::relation_a::Model {
    inheritance::relation_a::ActiveModel {
        a: Set(a.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn inheritance_relation_b(
    db: &DatabaseConnection,
    b: &str,
) -> inheritance::relation_b::Model {
    inheritance::relation_b::ActiveModel {
        b: Set(b.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
