//! Error types for the voting contract
//!
//! Every rejection the contract can produce is listed here with a stable
//! numeric code, so clients can match on failures without parsing strings.

use soroban_sdk::contracterror;

/// Error type for the voting contract
///
/// Error ranges are organized by category:
/// - 1-19: General/Authorization errors
/// - 20-39: Voter registry errors
/// - 40-59: Proposal errors
/// - 60-79: Workflow and voting errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum VotingError {
    // ===== General/Authorization Errors (1-19) =====
    /// Caller is not the owner of the ballot
    Unauthorized = 1,

    /// Contract not initialized
    NotInitialized = 2,

    /// Contract already initialized
    AlreadyInitialized = 3,

    /// Invalid input provided
    InvalidInput = 4,

    // ===== Voter Registry Errors (20-39) =====
    /// Address is already a registered voter
    AlreadyRegistered = 20,

    /// Address is not a registered voter
    NotRegistered = 21,

    /// The configured voter limit was reached
    VoterLimitReached = 22,

    // ===== Proposal Errors (40-59) =====
    /// Proposal description is empty
    EmptyProposal = 40,

    /// Proposal description exceeds the configured length
    DescriptionTooLong = 41,

    /// The configured proposal limit was reached
    ProposalLimitReached = 42,

    /// Proposal id does not refer to a registered proposal
    OutOfRangeProposal = 43,

    // ===== Workflow/Voting Errors (60-79) =====
    /// Operation is not allowed in the current workflow status
    PhaseNotAllowed = 60,

    /// Voter has already cast a vote
    AlreadyVoted = 61,
}

impl VotingError {
    /// Get a human-readable reason for the rejection
    pub fn message(&self) -> &'static str {
        match self {
            VotingError::Unauthorized => "Caller is not the owner",
            VotingError::NotInitialized => "Contract not initialized",
            VotingError::AlreadyInitialized => "Contract already initialized",
            VotingError::InvalidInput => "Invalid input provided",

            VotingError::AlreadyRegistered => "Already registered",
            VotingError::NotRegistered => "You're not a voter",
            VotingError::VoterLimitReached => "Voter limit reached",

            VotingError::EmptyProposal => "You cannot submit an empty proposal",
            VotingError::DescriptionTooLong => "Proposal description is too long",
            VotingError::ProposalLimitReached => "Proposal limit reached",
            VotingError::OutOfRangeProposal => "Proposal not found",

            VotingError::PhaseNotAllowed => "Operation not allowed in the current workflow status",
            VotingError::AlreadyVoted => "You have already voted",
        }
    }
}
