//! Mock repository implementations for testing core service functionality

use membership_database::{Member, MemberError, MemberResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory member repository for testing
pub struct MockMemberRepository {
    members: Arc<RwLock<HashMap<i64, Member>>>,
    next_id: Arc<RwLock<i64>>,
    email_index: Arc<RwLock<HashMap<String, i64>>>,
}

impl MockMemberRepository {
    pub fn new() -> Self {
        Self {
            members: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
            email_index: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn list_all(&self) -> MemberResult<Vec<Member>> {
        let members = self.members.read().await;
        let mut all: Vec<Member> = members.values().cloned().collect();
        all.sort_by_key(|m| m.id);
        Ok(all)
    }

    pub async fn find_by_id(&self, id: i64) -> MemberResult<Option<Member>> {
        let members = self.members.read().await;
        Ok(members.get(&id).cloned())
    }

    pub async fn find_by_email(&self, email: &str) -> MemberResult<Option<Member>> {
        let email_index = self.email_index.read().await;
        if let Some(id) = email_index.get(&email.to_lowercase()) {
            let members = self.members.read().await;
            Ok(members.get(id).cloned())
        } else {
            Ok(None)
        }
    }

    pub async fn exists_by_id(&self, id: i64) -> MemberResult<bool> {
        let members = self.members.read().await;
        Ok(members.contains_key(&id))
    }

    pub async fn email_exists(&self, email: &str) -> MemberResult<bool> {
        let email_index = self.email_index.read().await;
        Ok(email_index.contains_key(&email.to_lowercase()))
    }

    pub async fn insert(&self, member: &Member) -> MemberResult<Member> {
        // The unique email index is the storage-level backstop
        {
            let email_index = self.email_index.read().await;
            if email_index.contains_key(&member.email.to_lowercase()) {
                return Err(MemberError::EmailAlreadyExists);
            }
        }

        let mut next_id = self.next_id.write().await;
        let member_id = *next_id;
        *next_id += 1;

        let stored = Member {
            id: member_id,
            ..member.clone()
        };

        let mut members = self.members.write().await;
        members.insert(member_id, stored.clone());

        let mut email_index = self.email_index.write().await;
        email_index.insert(stored.email.to_lowercase(), member_id);

        Ok(stored)
    }

    pub async fn update(&self, member: &Member) -> MemberResult<()> {
        let mut members = self.members.write().await;
        let Some(existing) = members.get(&member.id) else {
            return Err(MemberError::MemberNotFound);
        };

        let mut email_index = self.email_index.write().await;
        let new_key = member.email.to_lowercase();
        if let Some(owner) = email_index.get(&new_key) {
            if *owner != member.id {
                return Err(MemberError::EmailAlreadyExists);
            }
        }
        email_index.remove(&existing.email.to_lowercase());
        email_index.insert(new_key, member.id);

        members.insert(member.id, member.clone());
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> MemberResult<()> {
        let mut members = self.members.write().await;
        if let Some(member) = members.remove(&id) {
            let mut email_index = self.email_index.write().await;
            email_index.remove(&member.email.to_lowercase());
        }
        Ok(())
    }
}

impl Default for MockMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}
