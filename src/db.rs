use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Schema, Statement};
use std::path::PathBuf;
use tokio::fs;

use crate::entity::{
    Categories, Comments, LetteringItemCategories, LetteringItemVariations, Orders,
    ProductColors, ProductVariations, Products,
};

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Brings the schema up to date: SQL migrations on Postgres, entity derived
/// tables everywhere else.
pub async fn prepare_schema(conn: &DatabaseConnection) -> Result<()> {
    match conn.get_database_backend() {
        DatabaseBackend::Postgres => run_migrations(conn).await,
        _ => create_schema(conn).await,
    }
}

/// Minimal migration runner that executes SQL files in `migrations/` in filename order.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    let mut entries = fs::read_dir("migrations").await?;
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in files {
        tracing::info!(file = %file.display(), "applying migration");
        let sql = fs::read_to_string(&file).await?;
        // Postgres prepared statements cannot contain multiple commands,
        // so split the migration file and run each statement individually.
        for stmt in sql.split(';') {
            let stmt = stmt.trim();
            if stmt.is_empty() {
                continue;
            }
            let statement = format!("{stmt};");
            conn.execute(Statement::from_string(backend, statement))
                .await?;
        }
    }

    Ok(())
}

/// Creates every table from the entity definitions, parents first.
pub async fn create_schema(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut tables = vec![
        schema.create_table_from_entity(Categories),
        schema.create_table_from_entity(LetteringItemCategories),
        schema.create_table_from_entity(ProductColors),
        schema.create_table_from_entity(Products),
        schema.create_table_from_entity(ProductVariations),
        schema.create_table_from_entity(LetteringItemVariations),
        schema.create_table_from_entity(Orders),
        schema.create_table_from_entity(Comments),
    ];
    for table in tables.iter_mut() {
        table.if_not_exists();
        conn.execute(backend.build(&*table)).await?;
    }

    Ok(())
}
