use anchor_lang::prelude::*;
use crate::{constants::*, error::VotingError, state::Registry};

// Accounts needed for handing the registry to a new administrator
#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        constraint = registry.is_admin(&admin.key()) @ VotingError::Unauthorized
    )]
    pub registry: Account<'info, Registry>,
}

impl<'info> TransferAdmin<'info> {
    pub fn transfer_admin(&mut self, new_admin: Pubkey) -> Result<()> {
        let previous = self.admin.key();
        self.registry.transfer_admin(&previous, new_admin)?;

        msg!("Admin transferred");
        msg!("Previous admin: {}", previous);
        msg!("New admin: {}", new_admin);

        Ok(())
    }
}
