use anyhow::{Context, Result};
use log::info;
use sqlx::{Executor, PgPool};

pub mod messages;

const SCHEMA_SQL: &str = include_str!("messages/schema.sql");

const REQUIRED_TABLES: [&str; 1] = ["messages"];

async fn check_tables_exist(pool: &PgPool, tables: &[&str]) -> Result<bool> {
    for &table in tables {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = $1
            )",
        )
        .bind(table)
        .fetch_one(pool)
        .await?;

        if !exists.0 {
            info!("Table '{}' does not exist", table);
            return Ok(false);
        }
    }
    Ok(true)
}

/// Connects to Postgres and creates the message table on first run.
pub async fn setup_database(database_url: &str) -> Result<PgPool> {
    let pool = PgPool::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    if check_tables_exist(&pool, &REQUIRED_TABLES).await? {
        info!("All required tables exist.");
        return Ok(pool);
    }

    info!("Some tables missing. Running schema SQL to create tables...");
    pool.execute(SCHEMA_SQL)
        .await
        .context("Failed to execute schema SQL")?;
    info!("Schema SQL executed successfully.");

    Ok(pool)
}
