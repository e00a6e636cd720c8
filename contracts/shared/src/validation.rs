//! Validation helpers for the voting contract
//!
//! Pure checks used by the ballot state machine before it mutates anything.

use crate::errors::VotingError;
use soroban_sdk::{Address, String};

// ===== Proposal Validation =====

/// Validate a proposal description
///
/// # Arguments
/// * `description` - The submitted text
/// * `max_len` - Maximum length in bytes, `0` for unlimited
///
/// # Returns
/// `Err(VotingError::EmptyProposal)` for empty text,
/// `Err(VotingError::DescriptionTooLong)` past `max_len`
pub fn validate_description(description: &String, max_len: u32) -> Result<(), VotingError> {
    let len = description.len();
    if len == 0 {
        return Err(VotingError::EmptyProposal);
    }
    if max_len != 0 && len > max_len {
        return Err(VotingError::DescriptionTooLong);
    }
    Ok(())
}

/// Validate that `proposal_id` indexes a list of `count` proposals
pub fn validate_proposal_id(proposal_id: u32, count: u32) -> Result<(), VotingError> {
    if proposal_id >= count {
        return Err(VotingError::OutOfRangeProposal);
    }
    Ok(())
}

// ===== Limits =====

/// Validate that one more item fits under `limit` (`0` = unlimited)
pub fn validate_within_limit(
    current: u32,
    limit: u32,
    error: VotingError,
) -> Result<(), VotingError> {
    if limit != 0 && current >= limit {
        return Err(error);
    }
    Ok(())
}

// ===== Address Validation =====

/// Validate that an ownership transfer actually changes the owner
pub fn validate_distinct_owner(current: &Address, next: &Address) -> Result<(), VotingError> {
    if current == next {
        return Err(VotingError::InvalidInput);
    }
    Ok(())
}
