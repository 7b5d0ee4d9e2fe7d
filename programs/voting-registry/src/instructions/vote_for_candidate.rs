use anchor_lang::prelude::*;
use crate::{
    constants::*,
    error::VotingError,
    instructions::load::{load_voter_record, load_voting, store_voter_record, store_voting},
    state::{Ballot, Registry},
};

// Accounts needed for casting a vote
#[derive(Accounts)]
#[instruction(voting_id: u64)]
pub struct VoteForCandidate<'info> {
    pub voter: Signer<'info>,

    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    /// CHECK: address fixed by seeds; contents loaded after the registry
    /// confirms voting_id exists. Modified to increment the chosen tally.
    #[account(
        mut,
        seeds = [VOTING_SEED, voting_id.to_le_bytes().as_ref()],
        bump
    )]
    pub voting: UncheckedAccount<'info>,

    /// CHECK: address fixed by seeds; still empty when the signer never
    /// registered for this voting
    #[account(
        mut,
        seeds = [VOTER_SEED, voting.key().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub voter_record: UncheckedAccount<'info>,
}

impl<'info> VoteForCandidate<'info> {
    pub fn vote_for_candidate(&mut self, voting_id: u64, candidate_id: u32) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let mut voting = load_voting(&self.registry, voting_id, &self.voting)?;
        let mut record = load_voter_record(&self.voter_record)?;

        let voter = self.voter.key();
        let ballot = Ballot::prepare(&voting, record.as_ref(), &voter, candidate_id, now)?;

        let record = record.as_mut().ok_or(VotingError::NotRegistered)?;
        let tally = ballot.commit(&mut voting, record);
        store_voting(&voting, &self.voting)?;
        store_voter_record(record, &self.voter_record)?;

        msg!("Vote cast successfully!");
        msg!("Voting ID: {}", voting_id);
        msg!("Voter: {}", voter);
        msg!("Candidate ID: {}", ballot.candidate_id());
        msg!("New vote count for this candidate: {}", tally);

        Ok(())
    }
}
