#![no_std]
//! # Shared Voting Library
//!
//! Reusable types, errors, constants, and validation helpers for the voting
//! contract and anything that talks to it.
//!
//! ## Modules
//!
//! - `errors` - The voting error taxonomy and its reason strings
//! - `types` - Workflow status, voter and proposal records, configuration
//! - `constants` - Defaults and storage TTL values
//! - `validation` - Input and limit checks shared by the state machine
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! shared = { path = "../shared" }
//! ```
//!
//! ```rust,ignore
//! use shared::errors::VotingError;
//! use shared::types::{Proposal, Voter, WorkflowStatus};
//! use shared::validation::validate_description;
//! ```

pub mod errors;
pub mod types;
pub mod constants;
pub mod validation;

// Re-export commonly used types
pub use errors::VotingError;
pub use types::{BallotState, Proposal, Voter, VotingConfig, VotingEvent, WorkflowStatus};
pub use validation::{
    validate_description, validate_distinct_owner, validate_proposal_id, validate_within_limit,
};
