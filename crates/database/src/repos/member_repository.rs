//! Repository for member data access operations.

use crate::entities::Member;
use crate::types::{MemberError, MemberResult};
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::info;

/// Repository for member database operations
#[derive(Clone)]
pub struct MemberRepository {
    pool: SqlitePool,
}

fn member_from_row(row: &SqliteRow) -> MemberResult<Member> {
    let balance: String = row
        .try_get("balance")
        .map_err(|e| MemberError::DatabaseError(e.to_string()))?;
    let balance = Decimal::from_str(&balance)
        .map_err(|e| MemberError::DatabaseError(format!("invalid balance value: {e}")))?;

    Ok(Member {
        id: row
            .try_get("id")
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?,
        first_name: row
            .try_get("first_name")
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?,
        last_name: row
            .try_get("last_name")
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?,
        email: row
            .try_get("email")
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?,
        birth_date: row
            .try_get("birth_date")
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?,
        registration_date: row
            .try_get("registration_date")
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?,
        is_active: row
            .try_get("is_active")
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?,
        balance,
    })
}

/// Unique-index rejections on the email column surface as the duplicate-email
/// error so a create racing past the service pre-check still gets a clean
/// client error instead of a 500.
fn map_write_error(e: sqlx::Error) -> MemberError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => MemberError::EmailAlreadyExists,
        _ => MemberError::DatabaseError(e.to_string()),
    }
}

impl MemberRepository {
    /// Create a new member repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all members in storage order
    pub async fn list_all(&self) -> MemberResult<Vec<Member>> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name, email, birth_date, registration_date, is_active, balance
             FROM members ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MemberError::DatabaseError(e.to_string()))?;

        rows.iter().map(member_from_row).collect()
    }

    /// Find a member by ID
    pub async fn find_by_id(&self, id: i64) -> MemberResult<Option<Member>> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, email, birth_date, registration_date, is_active, balance
             FROM members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MemberError::DatabaseError(e.to_string()))?;

        row.as_ref().map(member_from_row).transpose()
    }

    /// Find a member by email, compared case-insensitively
    pub async fn find_by_email(&self, email: &str) -> MemberResult<Option<Member>> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, email, birth_date, registration_date, is_active, balance
             FROM members WHERE lower(email) = lower(?)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MemberError::DatabaseError(e.to_string()))?;

        row.as_ref().map(member_from_row).transpose()
    }

    /// Check if a member with the given ID exists
    pub async fn exists_by_id(&self, id: i64) -> MemberResult<bool> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM members WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    /// Check if any member uses the given email, compared case-insensitively
    pub async fn email_exists(&self, email: &str) -> MemberResult<bool> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM members WHERE lower(email) = lower(?)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    /// Insert a new member and return the stored record with its assigned ID
    pub async fn insert(&self, member: &Member) -> MemberResult<Member> {
        let result = sqlx::query(
            "INSERT INTO members (first_name, last_name, email, birth_date, registration_date, is_active, balance)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(member.birth_date)
        .bind(member.registration_date)
        .bind(member.is_active)
        .bind(member.balance.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        let member_id = result.last_insert_rowid();

        info!(
            member_id = member_id,
            email = %member.email,
            "created new member"
        );

        Ok(Member {
            id: member_id,
            ..member.clone()
        })
    }

    /// Persist the mutable fields of an existing member
    pub async fn update(&self, member: &Member) -> MemberResult<()> {
        let result = sqlx::query(
            "UPDATE members SET first_name = ?, last_name = ?, email = ?, is_active = ? WHERE id = ?",
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(member.is_active)
        .bind(member.id)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(MemberError::MemberNotFound);
        }

        info!(member_id = member.id, "updated member");
        Ok(())
    }

    /// Remove a member row
    pub async fn delete(&self, id: i64) -> MemberResult<()> {
        sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?;

        info!(member_id = id, "deleted member");
        Ok(())
    }
}
