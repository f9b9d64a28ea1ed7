// Reset-and-seed procedure: wipe the user table and create the stock
// admin account.

use anyhow::Result;
use sqlx::SqlitePool;

use crate::db::{self, NewSuperuser};

pub const ADMIN_EMPLOYEE_ID: &str = "ADMIN001";
pub const ADMIN_PASSWORD: &str = "admin@123";
pub const ADMIN_NAME: &str = "System Admin";
pub const ADMIN_DEPARTMENT: &str = "IT";

// Delete every user, then create the admin account. The two statements
// are independent: a failed create leaves the table empty.
pub async fn reset_users(pool: &SqlitePool) -> Result<()> {
    db::delete_all_users(pool).await?;
    println!("All existing users have been removed.");

    db::create_superuser(
        pool,
        NewSuperuser {
            employee_id: ADMIN_EMPLOYEE_ID,
            password: ADMIN_PASSWORD,
            name: ADMIN_NAME,
            department: ADMIN_DEPARTMENT,
        },
    )
    .await?;

    println!();
    println!("New admin user created successfully:");
    println!("Employee ID (username): {}", ADMIN_EMPLOYEE_ID);
    println!("Password: {}", ADMIN_PASSWORD);
    println!("Department: {}", ADMIN_DEPARTMENT);

    Ok(())
}

// Top-level wrapper: failures are reported on stdout, never propagated
pub async fn run(pool: &SqlitePool) {
    if let Err(e) = reset_users(pool).await {
        println!("Error: {}", e);
    }
}
