use anchor_lang::prelude::*;
use crate::{
    constants::*,
    error::VotingError,
    instructions::load::{load_voting, store_voting},
    state::Registry,
};

// Accounts needed for adding a candidate to a voting's roster (admin only)
#[derive(Accounts)]
#[instruction(voting_id: u64)]
pub struct PostCandidate<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        constraint = registry.is_admin(&admin.key()) @ VotingError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: address fixed by seeds; contents loaded after the registry
    /// confirms voting_id exists
    #[account(
        mut,
        seeds = [VOTING_SEED, voting_id.to_le_bytes().as_ref()],
        bump
    )]
    pub voting: UncheckedAccount<'info>,
}

impl<'info> PostCandidate<'info> {
    pub fn post_candidate(&mut self, voting_id: u64, name: String, address: Pubkey) -> Result<u32> {
        let now = Clock::get()?.unix_timestamp;

        let mut voting = load_voting(&self.registry, voting_id, &self.voting)?;
        let candidate_id = voting.add_candidate(name, address, now)?;
        store_voting(&voting, &self.voting)?;

        msg!("Candidate posted");
        msg!("Voting ID: {}", voting_id);
        msg!("Candidate ID: {}", candidate_id);
        msg!("Candidate address: {}", address);
        msg!(
            "Roster: {}/{}",
            voting.candidate_count(),
            voting.max_candidates
        );

        Ok(candidate_id)
    }
}
