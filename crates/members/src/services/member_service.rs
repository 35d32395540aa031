//! Member service for managing the member lifecycle.

use super::mock_repositories::MockMemberRepository;
use crate::mapping;
use membership_database::{
    CreateMemberRequest, Member, MemberError, MemberRepository, MemberResult, UpdateMemberRequest,
};
use sqlx::SqlitePool;

/// Service for managing member operations
pub struct MemberService<R> {
    member_repository: R,
}

impl MemberService<MemberRepository> {
    /// Create a new member service instance with the real database repository
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            member_repository: MemberRepository::new(pool),
        }
    }
}

impl MemberService<MockMemberRepository> {
    /// Create a new member service instance for testing
    pub fn new_for_testing() -> Self {
        Self {
            member_repository: MockMemberRepository::new(),
        }
    }
}

impl<R> MemberService<R>
where
    R: MemberRepo,
{
    /// List all members
    pub async fn list_members(&self) -> MemberResult<Vec<Member>> {
        self.member_repository.list_all().await
    }

    /// Get a member by ID; absence is a normal outcome
    pub async fn get_member(&self, id: i64) -> MemberResult<Option<Member>> {
        self.member_repository.find_by_id(id).await
    }

    /// Get a member by email, compared case-insensitively
    pub async fn get_member_by_email(&self, email: &str) -> MemberResult<Option<Member>> {
        self.member_repository.find_by_email(email).await
    }

    /// Register a new member
    pub async fn create_member(&self, request: CreateMemberRequest) -> MemberResult<Member> {
        if let Err(e) = request.validate() {
            return Err(MemberError::Validation(e));
        }

        // Check if the email is already taken
        if self.member_repository.email_exists(&request.email).await? {
            return Err(MemberError::EmailAlreadyExists);
        }

        let member = mapping::member_from_create(&request);
        let stored = self.member_repository.insert(&member).await?;

        tracing::info!(member_id = stored.id, email = %stored.email, "registered new member");

        Ok(stored)
    }

    /// Update a member's mutable fields.
    ///
    /// Returns `Ok(None)` when no member with the given ID exists.
    pub async fn update_member(
        &self,
        id: i64,
        request: UpdateMemberRequest,
    ) -> MemberResult<Option<Member>> {
        let Some(mut existing) = self.member_repository.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Err(e) = request.validate() {
            return Err(MemberError::Validation(e));
        }

        // Change detection is an exact string comparison; only the existence
        // lookup is case-insensitive.
        if !request.email.is_empty()
            && request.email != existing.email
            && self.member_repository.email_exists(&request.email).await?
        {
            return Err(MemberError::EmailAlreadyExists);
        }

        mapping::apply_update(&mut existing, &request);
        self.member_repository.update(&existing).await?;

        tracing::info!(member_id = id, "updated member");

        Ok(Some(existing))
    }

    /// Delete a member.
    ///
    /// Returns `Ok(false)` when no member with the given ID exists.
    pub async fn delete_member(&self, id: i64) -> MemberResult<bool> {
        if !self.member_repository.exists_by_id(id).await? {
            return Ok(false);
        }

        self.member_repository.delete(id).await?;

        tracing::info!(member_id = id, "deleted member");

        Ok(true)
    }
}

/// Trait for member repositories to allow generic usage
pub trait MemberRepo {
    async fn list_all(&self) -> MemberResult<Vec<Member>>;
    async fn find_by_id(&self, id: i64) -> MemberResult<Option<Member>>;
    async fn find_by_email(&self, email: &str) -> MemberResult<Option<Member>>;
    async fn exists_by_id(&self, id: i64) -> MemberResult<bool>;
    async fn email_exists(&self, email: &str) -> MemberResult<bool>;
    async fn insert(&self, member: &Member) -> MemberResult<Member>;
    async fn update(&self, member: &Member) -> MemberResult<()>;
    async fn delete(&self, id: i64) -> MemberResult<()>;
}

impl MemberRepo for MemberRepository {
    async fn list_all(&self) -> MemberResult<Vec<Member>> {
        self.list_all().await
    }

    async fn find_by_id(&self, id: i64) -> MemberResult<Option<Member>> {
        self.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> MemberResult<Option<Member>> {
        self.find_by_email(email).await
    }

    async fn exists_by_id(&self, id: i64) -> MemberResult<bool> {
        self.exists_by_id(id).await
    }

    async fn email_exists(&self, email: &str) -> MemberResult<bool> {
        self.email_exists(email).await
    }

    async fn insert(&self, member: &Member) -> MemberResult<Member> {
        self.insert(member).await
    }

    async fn update(&self, member: &Member) -> MemberResult<()> {
        self.update(member).await
    }

    async fn delete(&self, id: i64) -> MemberResult<()> {
        self.delete(id).await
    }
}

impl MemberRepo for MockMemberRepository {
    async fn list_all(&self) -> MemberResult<Vec<Member>> {
        self.list_all().await
    }

    async fn find_by_id(&self, id: i64) -> MemberResult<Option<Member>> {
        self.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> MemberResult<Option<Member>> {
        self.find_by_email(email).await
    }

    async fn exists_by_id(&self, id: i64) -> MemberResult<bool> {
        self.exists_by_id(id).await
    }

    async fn email_exists(&self, email: &str) -> MemberResult<bool> {
        self.email_exists(email).await
    }

    async fn insert(&self, member: &Member) -> MemberResult<Member> {
        self.insert(member).await
    }

    async fn update(&self, member: &Member) -> MemberResult<()> {
        self.update(member).await
    }

    async fn delete(&self, id: i64) -> MemberResult<()> {
        self.delete(id).await
    }
}
