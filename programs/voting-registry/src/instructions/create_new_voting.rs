use anchor_lang::prelude::*;
use crate::{
    constants::*,
    error::VotingError,
    state::{Registry, Voting},
};

// Accounts needed for opening a new voting (admin only)
#[derive(Accounts)]
#[instruction(title: String, description: String, max_candidates: u32)]
pub struct CreateNewVoting<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        constraint = registry.is_admin(&admin.key()) @ VotingError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,

    // The new voting lives at the registry's next index
    #[account(
        init,
        payer = admin,
        space = Voting::space(max_candidates),
        seeds = [VOTING_SEED, registry.voting_count.to_le_bytes().as_ref()],
        bump
    )]
    pub voting: Account<'info, Voting>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateNewVoting<'info> {
    pub fn create_new_voting(
        &mut self,
        title: String,
        description: String,
        max_candidates: u32,
        duration_seconds: u64,
        bumps: &CreateNewVotingBumps,
    ) -> Result<u64> {
        let now = Clock::get()?.unix_timestamp;

        let voting = Voting::new(
            self.registry.voting_count,
            title,
            description,
            max_candidates,
            duration_seconds,
            now,
            bumps.voting,
        )?;
        let voting_id = self.registry.allocate_voting_id()?;
        let closes_at = voting.closes_at();
        self.voting.set_inner(voting);

        msg!("Voting created");
        msg!("Voting ID: {}", voting_id);
        msg!("Max candidates: {}", max_candidates);
        msg!("Closes at: {}", closes_at);

        Ok(voting_id)
    }
}
