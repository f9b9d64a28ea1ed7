// Database module for the hoto user table

use anyhow::{Context, Result};
use sqlx::{sqlite::SqlitePool, Row};

use crate::auth;

// Initialize database and run the schema migration
pub async fn init_db(db_path: &str) -> Result<SqlitePool> {
    let database_url = format!("sqlite:{}", db_path);

    // Create the database file if it doesn't exist
    if !std::path::Path::new(db_path).exists() {
        std::fs::File::create(db_path)?;
    }

    let pool = SqlitePool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .context("Failed to enable foreign keys")?;

    let migration_sql = include_str!("../migrations/001_create_users.sql");
    sqlx::query(migration_sql)
        .execute(&pool)
        .await
        .context("Failed to run migration 001")?;

    Ok(pool)
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub is_active: bool,
    pub is_admin: bool,
}

// Field set for a new superuser row; the password is hashed before insert
pub struct NewSuperuser<'a> {
    pub employee_id: &'a str,
    pub password: &'a str,
    pub name: &'a str,
    pub department: &'a str,
}

// Delete every row in the users table, returning the number of rows removed
pub async fn delete_all_users(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM users")
        .execute(pool)
        .await
        .context("Failed to delete users")?;

    Ok(result.rows_affected())
}

// Create an enabled administrator account. The plaintext password never
// reaches the database; it is hashed here before the insert.
pub async fn create_superuser(pool: &SqlitePool, new: NewSuperuser<'_>) -> Result<User> {
    auth::validate_employee_id(new.employee_id)?;
    let password_hash = auth::hash_password(new.password)?;

    let result = sqlx::query(
        "INSERT INTO users (employee_id, password_hash, name, department, is_active, is_admin)
         VALUES (?, ?, ?, ?, 1, 1)",
    )
    .bind(new.employee_id)
    .bind(&password_hash)
    .bind(new.name)
    .bind(new.department)
    .execute(pool)
    .await
    .context("Failed to create superuser")?;

    Ok(User {
        id: result.last_insert_rowid(),
        employee_id: new.employee_id.to_string(),
        name: new.name.to_string(),
        department: new.department.to_string(),
        is_active: true,
        is_admin: true,
    })
}

// Count all users
pub async fn count_users(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

// Find user by employee ID
pub async fn get_user_by_employee_id(pool: &SqlitePool, employee_id: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, employee_id, name, department, is_active, is_admin
         FROM users WHERE employee_id = ?",
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

// Fetch the stored credential hash for an employee ID
pub async fn get_password_hash(pool: &SqlitePool, employee_id: &str) -> Result<Option<String>> {
    let result = sqlx::query("SELECT password_hash FROM users WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_optional(pool)
        .await?;

    Ok(result.map(|row| row.get("password_hash")))
}
