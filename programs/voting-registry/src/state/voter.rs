use anchor_lang::prelude::*;

use crate::{error::VotingError, state::Voting};

/// Progress of one identity within one voting. Only ever moves forward:
/// NotRegistered -> Registered -> HasVoted
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoterStatus {
    #[default]
    NotRegistered,
    Registered,
    HasVoted,
}

impl Space for VoterStatus {
    const INIT_SPACE: usize = 1;
}

/// Per (voting, voter) registration record
/// PDA: ["voter", voting.key(), voter.key()]
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct VoterRecord {
    /// The Voting account this record belongs to
    pub voting: Pubkey,

    pub voter: Pubkey,

    pub status: VoterStatus,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl VoterRecord {
    /// Register `voter` for an open voting. A record that has already left
    /// NotRegistered can never be registered again.
    pub fn register(
        &mut self,
        voting: &Voting,
        voting_key: Pubkey,
        voter: Pubkey,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        voting.ensure_open(now)?;
        require!(
            self.status == VoterStatus::NotRegistered,
            VotingError::AlreadyRegistered
        );

        self.voting = voting_key;
        self.voter = voter;
        self.status = VoterStatus::Registered;
        self.bump = bump;

        Ok(())
    }

    pub fn can_vote(&self, voter: &Pubkey) -> bool {
        self.voter == *voter && self.status == VoterStatus::Registered
    }

    /// A missing record reads as NotRegistered
    pub fn status_of(record: Option<&VoterRecord>) -> VoterStatus {
        record.map_or(VoterStatus::NotRegistered, |r| r.status)
    }
}
