use anchor_lang::prelude::*;
use crate::{constants::*, state::Registry};

// Accounts needed to set up the registry
// The registry PDA can only be created once, so this cannot be re-run
#[derive(Accounts)]
pub struct Initialize<'info> {
    // Becomes the registry administrator and pays for the account
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR_SIZE + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        self.registry
            .set_inner(Registry::new(self.admin.key(), bumps.registry));

        msg!("Registry initialized");
        msg!("Admin: {}", self.admin.key());

        Ok(())
    }
}
