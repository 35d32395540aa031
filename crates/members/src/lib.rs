//! Member lifecycle logic and mapping rules for the membership backend.
//!
//! The service layer orchestrates validation, mapping, and storage access;
//! the mapping module holds the pure field-copy functions between request
//! shapes and the persisted record.

pub mod mapping;
pub mod services;

pub use services::{MemberRepo, MemberService, MockMemberRepository};

// Re-export the storage-facing types the services operate on
pub use membership_database::{
    CreateMemberRequest, Member, MemberError, MemberResult, UpdateMemberRequest,
};
