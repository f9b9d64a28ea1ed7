// Credential handling for hoto user accounts

use anyhow::{Context, Result};
use bcrypt::{hash, verify, DEFAULT_COST};

// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String> {
    hash(password, DEFAULT_COST).context("Failed to hash password")
}

// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    verify(password, hash).context("Failed to verify password")
}

// Validate employee ID format (the employee ID doubles as the username)
pub fn validate_employee_id(employee_id: &str) -> Result<()> {
    if employee_id.is_empty() {
        anyhow::bail!("Employee ID must not be empty");
    }
    if employee_id.len() > 30 {
        anyhow::bail!("Employee ID must be at most 30 characters");
    }
    if !employee_id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        anyhow::bail!("Employee ID can only contain letters, numbers, underscores, and hyphens");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let password = "test_password_123";
        let hash = hash_password(password).unwrap();

        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_employee_id_validation() {
        assert!(validate_employee_id("ADMIN001").is_ok());
        assert!(validate_employee_id("emp_42").is_ok());
        assert!(validate_employee_id("").is_err()); // empty
        assert!(validate_employee_id("emp@corp").is_err()); // invalid char
    }
}
