//! Entity definitions for the membership domain

pub mod member;

pub use member::{CreateMemberRequest, Member, UpdateMemberRequest};
