use anchor_lang::prelude::*;
use crate::{
    constants::*,
    instructions::load::load_voting,
    state::{Registry, VoterRecord},
};

// Accounts needed for registering the signer as a voter in one voting
#[derive(Accounts)]
#[instruction(voting_id: u64)]
pub struct RegisterVoter<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    /// CHECK: address fixed by seeds; contents loaded after the registry
    /// confirms voting_id exists
    #[account(
        seeds = [VOTING_SEED, voting_id.to_le_bytes().as_ref()],
        bump
    )]
    pub voting: UncheckedAccount<'info>,

    // Created on first registration; an existing record is rejected by the
    // status check rather than by account creation
    #[account(
        init_if_needed,
        payer = voter,
        space = DISCRIMINATOR_SIZE + VoterRecord::INIT_SPACE,
        seeds = [VOTER_SEED, voting.key().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub voter_record: Account<'info, VoterRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterVoter<'info> {
    pub fn register_voter(&mut self, voting_id: u64, bumps: &RegisterVoterBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let voting = load_voting(&self.registry, voting_id, &self.voting)?;

        let voting_key = self.voting.key();
        let voter = self.voter.key();
        self.voter_record
            .register(&voting, voting_key, voter, now, bumps.voter_record)?;

        msg!("Voter registered");
        msg!("Voting ID: {}", voting_id);
        msg!("Voter: {}", voter);

        Ok(())
    }
}
