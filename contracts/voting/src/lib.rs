#![no_std]
//! Owner-driven voting contract.
//!
//! The owner registers voters, opens and closes proposal registration and
//! the voting session, then tallies. Each registered voter votes once; the
//! proposal with the most votes wins, the earliest one on a tie.

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

mod events;
mod storage;
mod workflow;

pub use shared::errors::VotingError;
pub use shared::types::{BallotState, Proposal, Voter, VotingConfig, VotingEvent, WorkflowStatus};
pub use workflow::{Ballot, BallotStore};

use storage::LedgerStore;
use workflow::Outcome;

#[contract]
pub struct VotingContract;

/// Loads the ballot, runs one operation, then persists the header and
/// publishes. Returns the header as saved. A rejected operation writes nothing.
fn apply<F>(env: &Env, op: F) -> Result<BallotState, VotingError>
where
    F: FnOnce(&mut Ballot<LedgerStore>) -> Outcome,
{
    let mut ballot = storage::load_ballot(env)?;
    let produced = op(&mut ballot)?;
    let state = ballot.state().clone();
    storage::save_state(env, &state);
    events::publish(env, &produced);
    Ok(state)
}

fn read<T>(
    env: &Env,
    query: impl FnOnce(&Ballot<LedgerStore>) -> T,
) -> Result<T, VotingError> {
    let ballot = storage::load_ballot(env)?;
    Ok(query(&ballot))
}

#[contractimpl]
impl VotingContract {
    // -------------------------------
    // Setup
    // -------------------------------

    /// Opens the ballot with `owner` in charge. `None` uses the default policy.
    pub fn initialize(
        env: Env,
        owner: Address,
        config: Option<VotingConfig>,
    ) -> Result<(), VotingError> {
        if storage::has_ballot(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        owner.require_auth();

        let ballot = Ballot::open(
            &env,
            owner.clone(),
            config.unwrap_or_default(),
            LedgerStore::new(&env),
        );
        storage::save_state(&env, ballot.state());

        log!(&env, "ballot initialized", owner);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), VotingError> {
        caller.require_auth();
        apply(&env, |ballot| ballot.transfer_ownership(&caller, new_owner))?;
        Ok(())
    }

    // -------------------------------
    // Registration
    // -------------------------------

    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        caller.require_auth();
        apply(&env, |ballot| ballot.add_voter(&caller, voter))?;
        Ok(())
    }

    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        caller.require_auth();
        apply(&env, |ballot| ballot.start_proposals_registering(&caller))?;
        log!(&env, "proposal registration started");
        Ok(())
    }

    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<(), VotingError> {
        caller.require_auth();
        apply(&env, |ballot| ballot.add_proposal(&caller, description))?;
        Ok(())
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        caller.require_auth();
        apply(&env, |ballot| ballot.end_proposals_registering(&caller))?;
        log!(&env, "proposal registration ended");
        Ok(())
    }

    // -------------------------------
    // Voting
    // -------------------------------

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        caller.require_auth();
        apply(&env, |ballot| ballot.start_voting_session(&caller))?;
        log!(&env, "voting session started");
        Ok(())
    }

    /// Casts `voter`'s single vote for `proposal_id`.
    pub fn set_vote(env: Env, voter: Address, proposal_id: u32) -> Result<(), VotingError> {
        voter.require_auth();
        apply(&env, |ballot| ballot.set_vote(&voter, proposal_id))?;
        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        caller.require_auth();
        apply(&env, |ballot| ballot.end_voting_session(&caller))?;
        log!(&env, "voting session ended");
        Ok(())
    }

    pub fn tally_votes(env: Env, caller: Address) -> Result<(), VotingError> {
        caller.require_auth();
        let state = apply(&env, |ballot| ballot.tally_votes(&caller))?;
        log!(&env, "votes tallied", state.winning_proposal_id);
        Ok(())
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------

    pub fn workflow_status(env: Env) -> Result<WorkflowStatus, VotingError> {
        read(&env, |ballot| ballot.status())
    }

    pub fn winning_proposal_id(env: Env) -> Result<u32, VotingError> {
        read(&env, |ballot| ballot.winning_proposal_id())
    }

    pub fn get_voter(env: Env, voter: Address) -> Result<Voter, VotingError> {
        read(&env, |ballot| ballot.voter(&voter))
    }

    pub fn get_one_proposal(env: Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        read(&env, |ballot| ballot.proposal(proposal_id))?
    }

    pub fn get_winner(env: Env) -> Result<Proposal, VotingError> {
        read(&env, |ballot| ballot.winner())?
    }

    pub fn proposal_count(env: Env) -> Result<u32, VotingError> {
        read(&env, |ballot| ballot.proposal_count())
    }

    pub fn voter_count(env: Env) -> Result<u32, VotingError> {
        read(&env, |ballot| ballot.voter_count())
    }

    pub fn owner(env: Env) -> Result<Address, VotingError> {
        read(&env, |ballot| ballot.owner())
    }

    pub fn get_config(env: Env) -> Result<VotingConfig, VotingError> {
        read(&env, |ballot| ballot.config())
    }
}
