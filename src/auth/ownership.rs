//! Ownership guard for mutation endpoints
//!
//! Only the creator of a movie, rating or comment may mutate it. The check
//! is strict id equality: no roles, no admin override.

use crate::error::AuthError;
use uuid::Uuid;

/// Allow the mutation only when the requester is the resource owner
pub fn require_owner(owner_id: Uuid, requester_id: Uuid) -> Result<(), AuthError> {
    if owner_id == requester_id {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_is_allowed() {
        let id = Uuid::new_v4();
        assert!(require_owner(id, id).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let owner = Uuid::new_v4();
        let requester = Uuid::new_v4();

        assert_eq!(require_owner(owner, requester).unwrap_err(), AuthError::Forbidden);
        // The check is directional only in naming; any mismatch is forbidden
        assert_eq!(require_owner(requester, owner).unwrap_err(), AuthError::Forbidden);
    }

    #[test]
    fn test_nil_uuids_still_compare_by_value() {
        assert!(require_owner(Uuid::nil(), Uuid::nil()).is_ok());
        assert!(require_owner(Uuid::nil(), Uuid::new_v4()).is_err());
    }
}
