//! Common types and data structures for the voting contract
//!
//! Defines the workflow phases, the voter and proposal records, the ballot
//! configuration, and the domain events the state machine emits.

use soroban_sdk::{contracttype, Address, String};

use crate::constants::{DEFAULT_MAX_PROPOSALS, DEFAULT_MAX_VOTERS, MAX_DESCRIPTION_LEN};

// ===== Workflow =====

/// Phase of the voting process
///
/// Encoded as its `u32` discriminant, so event consumers see `0..=5`.
///
/// # Transitions
/// - `RegisteringVoters` → `ProposalsRegistrationStarted`
/// - `ProposalsRegistrationStarted` → `ProposalsRegistrationEnded`
/// - `ProposalsRegistrationEnded` → `VotingSessionStarted`
/// - `VotingSessionStarted` → `VotingSessionEnded`
/// - `VotingSessionEnded` → `VotesTallied`
/// - `VotesTallied` → Terminal (no further transitions)
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum WorkflowStatus {
    /// Owner registers the voters
    RegisteringVoters = 0,

    /// Proposals may be submitted
    ProposalsRegistrationStarted = 1,

    /// Proposal list is frozen
    ProposalsRegistrationEnded = 2,

    /// Registered voters may cast their vote
    VotingSessionStarted = 3,

    /// Votes are closed, awaiting tally
    VotingSessionEnded = 4,

    /// Winner computed
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// The phase that directly follows this one, if any.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }

    /// Validates whether moving from this phase to `next` is allowed.
    ///
    /// Only the single forward step is valid; skipping, regressing and
    /// self-transitions are rejected.
    pub fn can_transition_to(self, next: WorkflowStatus) -> bool {
        self.next() == Some(next)
    }

    /// Whether voters may still be added in this phase when registration is
    /// not restricted to `RegisteringVoters`.
    pub fn accepts_late_registration(self) -> bool {
        self < WorkflowStatus::VotingSessionEnded
    }
}

// ===== Records =====

/// Registry entry for an address
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set
    pub voted_proposal_id: u32,
}

/// A candidate option and its running vote count
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

// ===== Configuration =====

/// Ballot policy chosen at initialization
///
/// Limits use `0` for "unlimited".
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingConfig {
    /// Voters may only be added while `RegisteringVoters`
    pub restrict_voter_registration: bool,
    /// Registered voters may submit proposals alongside the owner
    pub voters_submit_proposals: bool,
    pub max_voters: u32,
    pub max_proposals: u32,
    pub max_description_len: u32,
}

impl Default for VotingConfig {
    fn default() -> Self {
        VotingConfig {
            restrict_voter_registration: true,
            voters_submit_proposals: false,
            max_voters: DEFAULT_MAX_VOTERS,
            max_proposals: DEFAULT_MAX_PROPOSALS,
            max_description_len: MAX_DESCRIPTION_LEN,
        }
    }
}

// ===== Ballot =====

/// Ballot header: everything except the voter and proposal records, which
/// live in their own entries
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BallotState {
    pub owner: Address,
    pub status: WorkflowStatus,
    pub voter_count: u32,
    pub proposal_count: u32,
    /// Lowest-index proposal holding the highest vote count so far
    pub leading_proposal_id: u32,
    pub leading_vote_count: u32,
    /// Zero until votes are tallied
    pub winning_proposal_id: u32,
    pub config: VotingConfig,
}

// ===== Events =====

/// Domain events produced by ballot operations
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VotingEvent {
    /// (previous_status, new_status)
    WorkflowStatusChange(WorkflowStatus, WorkflowStatus),
    /// (voter_address)
    VoterRegistered(Address),
    /// (proposal_id)
    ProposalRegistered(u32),
    /// (voter, proposal_id)
    Voted(Address, u32),
    /// (previous_owner, new_owner)
    OwnershipTransferred(Address, Address),
}
