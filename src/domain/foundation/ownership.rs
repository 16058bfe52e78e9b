//! Ownership check for user-owned aggregates.
//!
//! Ownership is an orchestration concern: handlers call
//! [`OwnedByUser::check_ownership`] after loading an aggregate and before
//! invoking any mutation on it.

use super::{DomainError, ErrorCode, UserId};

/// Aggregates owned by exactly one user.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this resource.
    fn owner_id(&self) -> &UserId;

    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Returns `Forbidden` if `user_id` is not the owner.
    fn check_ownership(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(
                DomainError::new(ErrorCode::Forbidden, "User does not own this resume")
                    .with_detail("owner_id", self.owner_id().to_string())
                    .with_detail("requested_by", user_id.to_string()),
            )
        }
    }
}
