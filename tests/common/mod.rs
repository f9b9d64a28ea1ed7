// Common test utilities shared across test files

use sqlx::SqlitePool;

/// Set up an in-memory SQLite database for testing
#[allow(dead_code)]
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create in-memory database");

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    let migration = include_str!("../../migrations/001_create_users.sql");
    sqlx::query(migration)
        .execute(&pool)
        .await
        .expect("Failed to run migration 001");

    pool
}

/// Insert a plain (non-admin) user row directly
#[allow(dead_code)]
pub async fn insert_user(pool: &SqlitePool, employee_id: &str) {
    let password_hash = bcrypt::hash("testpass123", bcrypt::DEFAULT_COST).unwrap();

    sqlx::query(
        "INSERT INTO users (employee_id, password_hash, name, department, is_active, is_admin)
         VALUES (?, ?, 'Test User', 'QA', 1, 0)",
    )
    .bind(employee_id)
    .bind(password_hash)
    .execute(pool)
    .await
    .expect("Failed to insert test user");
}
