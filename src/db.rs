//! Database module
//!
//! Database connection and schema verification utilities.
//! The schema itself is created by `migrations/`.

use sqlx::PgPool;

/// Verify database connectivity
pub async fn verify_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}

/// Name of the index serving user queries on `table`
pub fn user_index_name(table: &str) -> String {
    format!("{}_user_id_idx", table)
}

/// Check that the transactions table and its user index exist
pub async fn check_schema(pool: &PgPool, table: &str) -> Result<bool, sqlx::Error> {
    let table_exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM information_schema.tables
            WHERE table_schema = 'public' AND table_name = $1
        )
        "#,
    )
    .bind(table)
    .fetch_one(pool)
    .await?;

    if !table_exists {
        tracing::error!("Required table '{}' does not exist", table);
        return Ok(false);
    }

    let index = user_index_name(table);
    let index_exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM pg_indexes
            WHERE schemaname = 'public' AND tablename = $1 AND indexname = $2
        )
        "#,
    )
    .bind(table)
    .bind(&index)
    .fetch_one(pool)
    .await?;

    if !index_exists {
        tracing::error!("Required index '{}' on '{}' does not exist", index, table);
        return Ok(false);
    }

    tracing::info!("Schema verified: table '{}' with index '{}'", table, index);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_index_name() {
        assert_eq!(user_index_name("transactions"), "transactions_user_id_idx");
    }
}
