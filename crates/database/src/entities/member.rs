//! Member entity definitions

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Member entity representing a persisted member row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub registration_date: DateTime<Utc>,
    pub is_active: bool,
    pub balance: Decimal,
}

/// Request for creating a new member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub initial_balance: Decimal,
}

/// Request for updating an existing member.
///
/// Carries only the mutable fields; birth date, registration date and
/// balance cannot be changed through an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
}

const NAME_MAX_LEN: usize = 50;
const EMAIL_MAX_LEN: usize = 100;

fn validate_name(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Err(format!("{field} too long (max {NAME_MAX_LEN} characters)"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(format!("Email too long (max {EMAIL_MAX_LEN} characters)"));
    }
    if !email.contains('@') || !email.contains('.') {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

impl CreateMemberRequest {
    /// Validate field constraints before the request reaches storage
    pub fn validate(&self) -> Result<(), String> {
        validate_name("First name", &self.first_name)?;
        validate_name("Last name", &self.last_name)?;
        validate_email(&self.email)?;
        Ok(())
    }
}

impl UpdateMemberRequest {
    /// Validate field constraints before the request reaches storage
    pub fn validate(&self) -> Result<(), String> {
        validate_name("First name", &self.first_name)?;
        validate_name("Last name", &self.last_name)?;
        validate_email(&self.email)?;
        Ok(())
    }
}
