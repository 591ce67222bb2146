//! Key-value entries in SQLite.

use sqlx::SqlitePool;

use crate::Result;

/// Create or update an entry.
pub async fn upsert_entry(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO kv_entries (key, value)
        VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = datetime('now')
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get the value stored under a key.
pub async fn get_entry(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let value = sqlx::query_scalar::<_, String>(
        r#"
        SELECT value
        FROM kv_entries
        WHERE key = ?
        "#,
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(value)
}

/// Delete an entry.
pub async fn delete_entry(pool: &SqlitePool, key: &str) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM kv_entries
        WHERE key = ?
        "#,
    )
    .bind(key)
    .execute(pool)
    .await?;

    Ok(())
}
