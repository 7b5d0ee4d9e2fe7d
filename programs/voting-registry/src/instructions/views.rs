use anchor_lang::prelude::*;
use crate::{
    constants::*,
    instructions::load::{load_voter_record, load_voting},
    state::{Candidate, Registry, VoterRecord, VoterStatus, VotingInfo, VotingResults},
};

// Read-only accessors. Values are handed back through return data; no
// account is writable here.

#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,
}

impl<'info> ReadRegistry<'info> {
    pub fn voting_count(&self) -> Result<u64> {
        Ok(self.registry.voting_count)
    }
}

#[derive(Accounts)]
#[instruction(voting_id: u64)]
pub struct ReadVoting<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    /// CHECK: address fixed by seeds; contents loaded after the registry
    /// confirms voting_id exists
    #[account(
        seeds = [VOTING_SEED, voting_id.to_le_bytes().as_ref()],
        bump
    )]
    pub voting: UncheckedAccount<'info>,
}

impl<'info> ReadVoting<'info> {
    pub fn voting_history(&self, voting_id: u64) -> Result<VotingInfo> {
        let voting = load_voting(&self.registry, voting_id, &self.voting)?;
        let now = Clock::get()?.unix_timestamp;
        Ok(voting.info(now))
    }

    pub fn candidates_info(&self, voting_id: u64, candidate_id: u32) -> Result<Candidate> {
        let voting = load_voting(&self.registry, voting_id, &self.voting)?;
        voting.candidate(candidate_id).cloned()
    }

    pub fn voting_results(&self, voting_id: u64) -> Result<VotingResults> {
        let voting = load_voting(&self.registry, voting_id, &self.voting)?;
        let now = Clock::get()?.unix_timestamp;
        Ok(voting.results(now))
    }
}

#[derive(Accounts)]
#[instruction(identity: Pubkey, voting_id: u64)]
pub struct ReadVoter<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    /// CHECK: address fixed by seeds; contents loaded after the registry
    /// confirms voting_id exists
    #[account(
        seeds = [VOTING_SEED, voting_id.to_le_bytes().as_ref()],
        bump
    )]
    pub voting: UncheckedAccount<'info>,

    /// CHECK: address fixed by seeds; still empty when `identity` never
    /// registered for this voting
    #[account(
        seeds = [VOTER_SEED, voting.key().as_ref(), identity.as_ref()],
        bump
    )]
    pub voter_record: UncheckedAccount<'info>,
}

impl<'info> ReadVoter<'info> {
    pub fn voters(&self, identity: Pubkey, voting_id: u64) -> Result<VoterStatus> {
        self.registry.ensure_voting_exists(voting_id)?;
        let record = load_voter_record(&self.voter_record)?
            .filter(|record| record.voter == identity);
        Ok(VoterRecord::status_of(record.as_ref()))
    }
}
