#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

// Import our modules
pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;


// Import instruction handlers
use instructions::*;
use state::{Candidate, VoterStatus, VotingInfo, VotingResults};

declare_id!("2DR9cCisySrjig6iXw89WAgfDGHGszxXp9pxPX6LDcMo");

#[program]
pub mod voting_registry {
    use super::*;

    /// Create the registry and make the signer its administrator.
    /// Can only succeed once per deployment.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    /// Open a new voting and return its index (admin only)
    pub fn create_new_voting(
        ctx: Context<CreateNewVoting>,
        title: String,
        description: String,
        max_candidates: u32,
        duration_seconds: u64,
    ) -> Result<u64> {
        ctx.accounts.create_new_voting(
            title,
            description,
            max_candidates,
            duration_seconds,
            &ctx.bumps,
        )
    }

    /// Register the signer as a voter in one voting
    pub fn register_voter(ctx: Context<RegisterVoter>, voting_id: u64) -> Result<()> {
        ctx.accounts.register_voter(voting_id, &ctx.bumps)
    }

    /// Append a candidate to a voting's roster and return its id (admin only)
    pub fn post_candidate(
        ctx: Context<PostCandidate>,
        voting_id: u64,
        name: String,
        address: Pubkey,
    ) -> Result<u32> {
        ctx.accounts.post_candidate(voting_id, name, address)
    }

    /// Cast the signer's single vote in a voting. A voter record PDA that
    /// was never created is rejected with NotRegistered.
    pub fn vote_for_candidate(
        ctx: Context<VoteForCandidate>,
        voting_id: u64,
        candidate_id: u32,
    ) -> Result<()> {
        ctx.accounts.vote_for_candidate(voting_id, candidate_id)
    }

    /// Hand administration to another identity (admin only). This is the
    /// only path that changes the administrator after `initialize`.
    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        ctx.accounts.transfer_admin(new_admin)
    }

    /// Number of votings created so far
    pub fn voting_count(ctx: Context<ReadRegistry>) -> Result<u64> {
        ctx.accounts.voting_count()
    }

    /// Metadata, roster size and open/closed state of one voting
    pub fn voting_history(ctx: Context<ReadVoting>, voting_id: u64) -> Result<VotingInfo> {
        ctx.accounts.voting_history(voting_id)
    }

    /// Name, address and tally of one candidate
    pub fn candidates_info(
        ctx: Context<ReadVoting>,
        voting_id: u64,
        candidate_id: u32,
    ) -> Result<Candidate> {
        ctx.accounts.candidates_info(voting_id, candidate_id)
    }

    /// Per-candidate tallies, total and current leader
    pub fn voting_results(ctx: Context<ReadVoting>, voting_id: u64) -> Result<VotingResults> {
        ctx.accounts.voting_results(voting_id)
    }

    /// Status of `identity` in one voting; NotRegistered when its record
    /// PDA was never created
    pub fn voters(ctx: Context<ReadVoter>, identity: Pubkey, voting_id: u64) -> Result<VoterStatus> {
        ctx.accounts.voters(identity, voting_id)
    }
}
