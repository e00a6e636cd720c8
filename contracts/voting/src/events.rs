use soroban_sdk::{contractevent, Address, Env, Vec};

use shared::types::{VotingEvent, WorkflowStatus};

// Each event carries its name as the only topic. Statuses encode as their
// `u32` discriminant.

#[contractevent(topics = ["WorkflowStatusChange"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkflowStatusChange {
    pub previous_status: WorkflowStatus,
    pub new_status: WorkflowStatus,
}

#[contractevent(topics = ["VoterRegistered"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRegistered {
    pub voter_address: Address,
}

#[contractevent(topics = ["ProposalRegistered"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRegistered {
    pub proposal_id: u32,
}

#[contractevent(topics = ["Voted"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voted {
    pub voter: Address,
    pub proposal_id: u32,
}

#[contractevent(topics = ["OwnershipTransferred"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

/// Publishes ballot events in the order they were produced.
pub fn publish(env: &Env, events: &Vec<VotingEvent>) {
    for event in events.iter() {
        match event {
            VotingEvent::WorkflowStatusChange(previous_status, new_status) => {
                WorkflowStatusChange {
                    previous_status,
                    new_status,
                }
                .publish(env)
            }
            VotingEvent::VoterRegistered(voter_address) => {
                VoterRegistered { voter_address }.publish(env)
            }
            VotingEvent::ProposalRegistered(proposal_id) => {
                ProposalRegistered { proposal_id }.publish(env)
            }
            VotingEvent::Voted(voter, proposal_id) => Voted { voter, proposal_id }.publish(env),
            VotingEvent::OwnershipTransferred(previous_owner, new_owner) => {
                OwnershipTransferred {
                    previous_owner,
                    new_owner,
                }
                .publish(env)
            }
        }
    }
}
