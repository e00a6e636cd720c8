use soroban_sdk::{vec, Address, Env, String, Vec};

use shared::errors::VotingError;
use shared::types::{BallotState, Proposal, Voter, VotingConfig, VotingEvent, WorkflowStatus};
use shared::validation::{
    validate_description, validate_distinct_owner, validate_proposal_id, validate_within_limit,
};

/// Result of a mutating ballot operation: the events it produced.
pub type Outcome = Result<Vec<VotingEvent>, VotingError>;

/// Keyed access to the per-address voter records and per-id proposals.
///
/// The contract backs this with one ledger entry per record; tests use an
/// in-memory map.
pub trait BallotStore {
    fn voter(&self, address: &Address) -> Option<Voter>;
    fn put_voter(&mut self, address: &Address, voter: &Voter);
    fn proposal(&self, proposal_id: u32) -> Option<Proposal>;
    fn put_proposal(&mut self, proposal_id: u32, proposal: &Proposal);
}

/// Voting state machine.
///
/// Every operation checks all of its preconditions before the first write,
/// so a rejected call leaves the ballot and its store exactly as they were.
/// Nothing here publishes events; callers persist the header and publish
/// the returned events.
pub struct Ballot<S: BallotStore> {
    env: Env,
    state: BallotState,
    store: S,
}

impl<S: BallotStore> Ballot<S> {
    /// Opens a fresh ballot in `RegisteringVoters`.
    pub fn open(env: &Env, owner: Address, config: VotingConfig, store: S) -> Self {
        Ballot {
            env: env.clone(),
            state: BallotState {
                owner,
                status: WorkflowStatus::RegisteringVoters,
                voter_count: 0,
                proposal_count: 0,
                leading_proposal_id: 0,
                leading_vote_count: 0,
                winning_proposal_id: 0,
                config,
            },
            store,
        }
    }

    pub fn from_parts(env: &Env, state: BallotState, store: S) -> Self {
        Ballot {
            env: env.clone(),
            state,
            store,
        }
    }

    pub fn state(&self) -> &BallotState {
        &self.state
    }

    // -------------------------------
    // Voter Registration
    // -------------------------------

    pub fn add_voter(&mut self, caller: &Address, voter: Address) -> Outcome {
        self.require_owner(caller)?;

        let status = self.state.status;
        let open = if self.state.config.restrict_voter_registration {
            status == WorkflowStatus::RegisteringVoters
        } else {
            status.accepts_late_registration()
        };
        if !open {
            return Err(VotingError::PhaseNotAllowed);
        }

        if self.voter(&voter).is_registered {
            return Err(VotingError::AlreadyRegistered);
        }
        validate_within_limit(
            self.state.voter_count,
            self.state.config.max_voters,
            VotingError::VoterLimitReached,
        )?;

        self.store.put_voter(
            &voter,
            &Voter {
                is_registered: true,
                has_voted: false,
                voted_proposal_id: 0,
            },
        );
        self.state.voter_count += 1;

        Ok(vec![&self.env, VotingEvent::VoterRegistered(voter)])
    }

    // -------------------------------
    // Proposals
    // -------------------------------

    pub fn start_proposals_registering(&mut self, caller: &Address) -> Outcome {
        self.advance(caller, WorkflowStatus::RegisteringVoters)
    }

    pub fn add_proposal(&mut self, caller: &Address, description: String) -> Outcome {
        let is_owner = *caller == self.state.owner;
        if !is_owner {
            if !self.state.config.voters_submit_proposals {
                return Err(VotingError::Unauthorized);
            }
            if !self.voter(caller).is_registered {
                return Err(VotingError::NotRegistered);
            }
        }

        self.require_status(WorkflowStatus::ProposalsRegistrationStarted)?;
        validate_description(&description, self.state.config.max_description_len)?;

        let proposal_id = self.state.proposal_count;
        validate_within_limit(
            proposal_id,
            self.state.config.max_proposals,
            VotingError::ProposalLimitReached,
        )?;

        self.store.put_proposal(
            proposal_id,
            &Proposal {
                description,
                vote_count: 0,
            },
        );
        self.state.proposal_count += 1;

        Ok(vec![&self.env, VotingEvent::ProposalRegistered(proposal_id)])
    }

    pub fn end_proposals_registering(&mut self, caller: &Address) -> Outcome {
        self.advance(caller, WorkflowStatus::ProposalsRegistrationStarted)
    }

    // -------------------------------
    // Voting
    // -------------------------------

    pub fn start_voting_session(&mut self, caller: &Address) -> Outcome {
        self.advance(caller, WorkflowStatus::ProposalsRegistrationEnded)
    }

    /// Records the vote and keeps the running leader current: a proposal
    /// takes the lead with strictly more votes, or with equal votes and a
    /// lower index.
    pub fn set_vote(&mut self, voter: &Address, proposal_id: u32) -> Outcome {
        let mut record = self.voter(voter);
        if !record.is_registered {
            return Err(VotingError::NotRegistered);
        }
        self.require_status(WorkflowStatus::VotingSessionStarted)?;
        if record.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        let mut proposal = self.proposal(proposal_id)?;
        proposal.vote_count += 1;

        record.has_voted = true;
        record.voted_proposal_id = proposal_id;

        let count = proposal.vote_count;
        if count > self.state.leading_vote_count
            || (count == self.state.leading_vote_count
                && proposal_id < self.state.leading_proposal_id)
        {
            self.state.leading_proposal_id = proposal_id;
            self.state.leading_vote_count = count;
        }

        self.store.put_proposal(proposal_id, &proposal);
        self.store.put_voter(voter, &record);

        Ok(vec![&self.env, VotingEvent::Voted(voter.clone(), proposal_id)])
    }

    pub fn end_voting_session(&mut self, caller: &Address) -> Outcome {
        self.advance(caller, WorkflowStatus::VotingSessionStarted)
    }

    // -------------------------------
    // Tally
    // -------------------------------

    /// Fixes the winner: the proposal with the strictly greatest vote count,
    /// the lowest index on a tie. The leader is maintained vote by vote, so
    /// tallying reads no proposal entries.
    pub fn tally_votes(&mut self, caller: &Address) -> Outcome {
        let events = self.advance(caller, WorkflowStatus::VotingSessionEnded)?;
        self.state.winning_proposal_id = self.state.leading_proposal_id;
        Ok(events)
    }

    // -------------------------------
    // Ownership
    // -------------------------------

    pub fn transfer_ownership(&mut self, caller: &Address, new_owner: Address) -> Outcome {
        self.require_owner(caller)?;
        validate_distinct_owner(&self.state.owner, &new_owner)?;

        let previous = core::mem::replace(&mut self.state.owner, new_owner.clone());

        Ok(vec![&self.env, VotingEvent::OwnershipTransferred(previous, new_owner)])
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------

    pub fn status(&self) -> WorkflowStatus {
        self.state.status
    }

    pub fn owner(&self) -> Address {
        self.state.owner.clone()
    }

    pub fn config(&self) -> VotingConfig {
        self.state.config.clone()
    }

    pub fn winning_proposal_id(&self) -> u32 {
        self.state.winning_proposal_id
    }

    /// Unknown addresses read as an unregistered, default record.
    pub fn voter(&self, address: &Address) -> Voter {
        self.store.voter(address).unwrap_or_default()
    }

    pub fn voter_count(&self) -> u32 {
        self.state.voter_count
    }

    pub fn proposal(&self, proposal_id: u32) -> Result<Proposal, VotingError> {
        validate_proposal_id(proposal_id, self.state.proposal_count)?;
        self.store
            .proposal(proposal_id)
            .ok_or(VotingError::OutOfRangeProposal)
    }

    pub fn proposal_count(&self) -> u32 {
        self.state.proposal_count
    }

    pub fn winner(&self) -> Result<Proposal, VotingError> {
        self.require_status(WorkflowStatus::VotesTallied)?;
        self.proposal(self.state.winning_proposal_id)
    }

    // -------------------------------
    // Internal Helpers
    // -------------------------------

    fn require_owner(&self, caller: &Address) -> Result<(), VotingError> {
        if *caller != self.state.owner {
            return Err(VotingError::Unauthorized);
        }
        Ok(())
    }

    fn require_status(&self, expected: WorkflowStatus) -> Result<(), VotingError> {
        if self.state.status != expected {
            return Err(VotingError::PhaseNotAllowed);
        }
        Ok(())
    }

    /// Moves from `from` to the phase after it.
    fn advance(&mut self, caller: &Address, from: WorkflowStatus) -> Outcome {
        self.require_owner(caller)?;
        self.require_status(from)?;

        let next = from.next().ok_or(VotingError::PhaseNotAllowed)?;
        if !from.can_transition_to(next) {
            return Err(VotingError::PhaseNotAllowed);
        }
        self.state.status = next;

        Ok(vec![
            &self.env,
            VotingEvent::WorkflowStatusChange(from, next),
        ])
    }
}
