use crate::domain::user::UserId;

/// Ownership predicate shared by every mutating operation that is restricted
/// to the resource's author (article update/delete, comment delete).
pub struct OwnedByActorSpec {
    owner_id: UserId,
    actor_id: UserId,
}

impl OwnedByActorSpec {
    pub fn new(owner_id: UserId, actor_id: UserId) -> Self {
        Self { owner_id, actor_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.owner_id == self.actor_id
    }
}
