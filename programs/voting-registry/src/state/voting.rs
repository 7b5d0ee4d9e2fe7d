use anchor_lang::prelude::*;

use crate::{constants::*, error::VotingError};

/// An entrant in a voting. Its position in the roster is its candidate id.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Candidate {
    #[max_len(32)]
    pub name: String,

    /// Account credited with the candidacy; it may not vote for itself
    pub address: Pubkey,

    pub votes: u64,
}

/// One election. Closure is derived from the clock, never stored.
/// PDA: ["voting", id]
#[account]
#[derive(Debug)]
pub struct Voting {
    pub id: u64,

    pub title: String,

    pub description: String,

    /// Unix timestamp of the creating transaction
    pub created_at: i64,

    /// Seconds from created_at until the voting stops accepting changes
    pub duration_seconds: u64,

    pub max_candidates: u32,

    /// Append-only roster, never longer than max_candidates
    pub candidates: Vec<Candidate>,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

/// Snapshot returned by the voting_history view
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VotingInfo {
    pub title: String,
    pub description: String,
    pub created_at: i64,
    pub duration_seconds: u64,
    pub max_candidates: u32,
    pub current_candidates: u32,
    pub closes_at: i64,
    pub is_open: bool,
}

/// Tally snapshot returned by the voting_results view
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VotingResults {
    /// Votes per candidate, in roster order
    pub tallies: Vec<u64>,
    pub total_votes: u64,
    /// Lowest candidate id holding the highest tally, if any vote was cast
    pub leader: Option<u32>,
    pub is_closed: bool,
}

impl Voting {
    /// Account size for a roster of `max_candidates`; clamped so an invalid
    /// request still allocates a bounded account before validation rejects it
    pub fn space(max_candidates: u32) -> usize {
        let roster = max_candidates.min(MAX_CANDIDATES_LIMIT) as usize;

        DISCRIMINATOR_SIZE
            + 8 // id
            + 4 + MAX_TITLE_LENGTH
            + 4 + MAX_DESCRIPTION_LENGTH
            + 8 // created_at
            + 8 // duration_seconds
            + 4 // max_candidates
            + 4 + roster * Candidate::INIT_SPACE
            + 1 // bump
    }

    pub fn new(
        id: u64,
        title: String,
        description: String,
        max_candidates: u32,
        duration_seconds: u64,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(is_valid_title(&title), VotingError::TitleTooLong);
        require!(is_valid_description(&description), VotingError::DescriptionTooLong);
        require!(
            is_valid_max_candidates(max_candidates),
            VotingError::InvalidMaxCandidates
        );

        Ok(Self {
            id,
            title,
            description,
            created_at: now,
            duration_seconds,
            max_candidates,
            candidates: Vec::new(),
            bump,
        })
    }

    /// Deadline as a unix timestamp, saturating for absurd durations
    pub fn closes_at(&self) -> i64 {
        let duration = i64::try_from(self.duration_seconds).unwrap_or(i64::MAX);
        self.created_at.saturating_add(duration)
    }

    pub fn is_open(&self, now: i64) -> bool {
        now < self.closes_at()
    }

    pub fn ensure_open(&self, now: i64) -> Result<()> {
        require!(self.is_open(now), VotingError::VotingClosed);
        Ok(())
    }

    pub fn candidate_count(&self) -> u32 {
        self.candidates.len() as u32
    }

    pub fn is_roster_full(&self) -> bool {
        self.candidate_count() >= self.max_candidates
    }

    pub fn has_candidate_address(&self, address: &Pubkey) -> bool {
        // Bounded by MAX_CANDIDATES_LIMIT
        self.candidates.iter().any(|c| c.address == *address)
    }

    /// Append a candidate and return its id
    pub fn add_candidate(&mut self, name: String, address: Pubkey, now: i64) -> Result<u32> {
        self.ensure_open(now)?;
        require!(is_valid_candidate_name(&name), VotingError::NameTooLong);
        require!(!self.is_roster_full(), VotingError::RosterFull);
        require!(
            !self.has_candidate_address(&address),
            VotingError::DuplicateCandidate
        );

        let candidate_id = self.candidate_count();
        self.candidates.push(Candidate {
            name,
            address,
            votes: 0,
        });

        Ok(candidate_id)
    }

    pub fn candidate(&self, candidate_id: u32) -> Result<&Candidate> {
        self.candidates
            .get(candidate_id as usize)
            .ok_or_else(|| error!(VotingError::NotFound))
    }

    pub fn total_votes(&self) -> u64 {
        self.candidates
            .iter()
            .fold(0u64, |total, c| total.saturating_add(c.votes))
    }

    /// Ties go to the candidate posted first
    pub fn leader(&self) -> Option<u32> {
        let mut leader: Option<(u32, u64)> = None;

        for (index, candidate) in self.candidates.iter().enumerate() {
            if candidate.votes == 0 {
                continue;
            }
            match leader {
                Some((_, best)) if best >= candidate.votes => {}
                _ => leader = Some((index as u32, candidate.votes)),
            }
        }

        leader.map(|(index, _)| index)
    }

    pub fn info(&self, now: i64) -> VotingInfo {
        VotingInfo {
            title: self.title.clone(),
            description: self.description.clone(),
            created_at: self.created_at,
            duration_seconds: self.duration_seconds,
            max_candidates: self.max_candidates,
            current_candidates: self.candidate_count(),
            closes_at: self.closes_at(),
            is_open: self.is_open(now),
        }
    }

    pub fn results(&self, now: i64) -> VotingResults {
        VotingResults {
            tallies: self.candidates.iter().map(|c| c.votes).collect(),
            total_votes: self.total_votes(),
            leader: self.leader(),
            is_closed: !self.is_open(now),
        }
    }
}
