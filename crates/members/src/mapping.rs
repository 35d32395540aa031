//! Field-copy mapping between request shapes and the persisted member record.

use chrono::Utc;
use membership_database::{CreateMemberRequest, Member, UpdateMemberRequest};

/// Build a new member record from a create request.
///
/// The registration date is stamped at mapping time, the activity flag is
/// forced on, and the balance starts from the caller-supplied initial value.
/// The id is assigned later by storage.
pub fn member_from_create(request: &CreateMemberRequest) -> Member {
    Member {
        id: 0,
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        email: request.email.clone(),
        birth_date: request.birth_date,
        registration_date: Utc::now(),
        is_active: true,
        balance: request.initial_balance,
    }
}

/// Overwrite the mutable fields of an existing member in place.
///
/// Balance, birth date, registration date and id are not carried by the
/// update shape and stay untouched.
pub fn apply_update(member: &mut Member, request: &UpdateMemberRequest) {
    member.first_name = request.first_name.clone();
    member.last_name = request.last_name.clone();
    member.email = request.email.clone();
    member.is_active = request.is_active;
}
