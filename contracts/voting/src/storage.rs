use soroban_sdk::{contracttype, Address, Env, IntoVal, Val};

use shared::constants::{BUMP_AMOUNT, LIFETIME_THRESHOLD};
use shared::errors::VotingError;
use shared::types::{BallotState, Proposal, Voter};

use crate::workflow::{Ballot, BallotStore};

/// Storage keys. The ballot header lives in instance storage; every voter
/// and proposal record gets its own persistent entry so no single entry
/// grows with the electorate.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Ballot,
    Voter(Address),
    Proposal(u32),
}

// ── Ballot Header ────────────────────────────────────────────────────────────

pub fn has_ballot(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Ballot)
}

fn get_state(env: &Env) -> Result<BallotState, VotingError> {
    env.storage()
        .instance()
        .get(&DataKey::Ballot)
        .ok_or(VotingError::NotInitialized)
}

pub fn save_state(env: &Env, state: &BallotState) {
    env.storage().instance().set(&DataKey::Ballot, state);
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

// ── Voter & Proposal Records ─────────────────────────────────────────────────

/// Persistent, one-entry-per-record backing for [`Ballot`].
pub struct LedgerStore {
    env: Env,
}

impl LedgerStore {
    pub fn new(env: &Env) -> Self {
        LedgerStore { env: env.clone() }
    }

    fn write<V: IntoVal<Env, Val>>(&self, key: &DataKey, value: &V) {
        let storage = self.env.storage().persistent();
        storage.set(key, value);
        storage.extend_ttl(key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
    }
}

impl BallotStore for LedgerStore {
    fn voter(&self, address: &Address) -> Option<Voter> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Voter(address.clone()))
    }

    fn put_voter(&mut self, address: &Address, voter: &Voter) {
        self.write(&DataKey::Voter(address.clone()), voter);
    }

    fn proposal(&self, proposal_id: u32) -> Option<Proposal> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
    }

    fn put_proposal(&mut self, proposal_id: u32, proposal: &Proposal) {
        self.write(&DataKey::Proposal(proposal_id), proposal);
    }
}

// ── Ballot ───────────────────────────────────────────────────────────────────

pub fn load_ballot(env: &Env) -> Result<Ballot<LedgerStore>, VotingError> {
    let state = get_state(env)?;
    Ok(Ballot::from_parts(env, state, LedgerStore::new(env)))
}
