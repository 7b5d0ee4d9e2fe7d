use anchor_lang::prelude::*;

use crate::{
    error::VotingError,
    state::{VoterRecord, VoterStatus, Voting},
};

/// A vote that has passed every check and is ready to be written.
///
/// `prepare` only reads; `commit` only writes. The tally increment and the
/// status change therefore land together or not at all. A ballot must be
/// committed against the same accounts it was prepared from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ballot {
    candidate_index: usize,
    new_tally: u64,
}

impl Ballot {
    pub fn prepare(
        voting: &Voting,
        record: Option<&VoterRecord>,
        voter: &Pubkey,
        candidate_id: u32,
        now: i64,
    ) -> Result<Self> {
        voting.ensure_open(now)?;

        let registered = record.is_some_and(|r| r.can_vote(voter));
        require!(registered, VotingError::NotRegistered);

        let candidate_index = candidate_id as usize;
        let candidate = voting
            .candidates
            .get(candidate_index)
            .ok_or(VotingError::InvalidCandidate)?;
        require_keys_neq!(candidate.address, *voter, VotingError::SelfVote);

        let new_tally = candidate
            .votes
            .checked_add(1)
            .ok_or(VotingError::MathOverflow)?;

        Ok(Self {
            candidate_index,
            new_tally,
        })
    }

    pub fn candidate_id(&self) -> u32 {
        self.candidate_index as u32
    }

    /// Apply the ballot and return the candidate's new tally
    pub fn commit(self, voting: &mut Voting, record: &mut VoterRecord) -> u64 {
        voting.candidates[self.candidate_index].votes = self.new_tally;
        record.status = VoterStatus::HasVoted;
        self.new_tally
    }
}
