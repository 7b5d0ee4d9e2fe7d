use anchor_lang::prelude::*;

use crate::error::VotingError;

/// Program-wide singleton holding the administrator and the voting counter
/// PDA: ["registry"]
#[account]
#[derive(InitSpace, Debug)]
pub struct Registry {
    /// The only identity allowed to create votings and post candidates.
    /// Set by `initialize`; afterwards only `transfer_admin` can change it.
    pub admin: Pubkey,

    /// Number of votings created so far; also the index the next one receives
    pub voting_count: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Registry {
    pub fn new(admin: Pubkey, bump: u8) -> Self {
        Self {
            admin,
            voting_count: 0,
            bump,
        }
    }

    pub fn is_admin(&self, caller: &Pubkey) -> bool {
        self.admin == *caller
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_admin(caller), VotingError::Unauthorized);
        Ok(())
    }

    /// Voting indices are assigned densely from 0 and never removed
    pub fn ensure_voting_exists(&self, voting_id: u64) -> Result<()> {
        require!(voting_id < self.voting_count, VotingError::NotFound);
        Ok(())
    }

    /// Hand out the next voting index and advance the counter
    pub fn allocate_voting_id(&mut self) -> Result<u64> {
        let voting_id = self.voting_count;
        self.voting_count = voting_id
            .checked_add(1)
            .ok_or(VotingError::MathOverflow)?;
        Ok(voting_id)
    }

    pub fn transfer_admin(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<()> {
        self.ensure_admin(caller)?;
        self.admin = new_admin;
        Ok(())
    }
}
