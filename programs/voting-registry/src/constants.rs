// PDA Seeds for deterministic address generation

// Seed for the Registry PDA: ["registry"]
// There is exactly one registry per program deployment
pub const REGISTRY_SEED: &[u8] = b"registry";

// Seed for Voting PDAs: ["voting", voting_id]
// voting_id is the registry's voting_count at creation time (little endian)
pub const VOTING_SEED: &[u8] = b"voting";

// Seed for VoterRecord PDAs: ["voter", voting.key(), voter.key()]
// One record per voter per voting
pub const VOTER_SEED: &[u8] = b"voter";

// Maximum values for validation

pub const MAX_TITLE_LENGTH: usize = 64;
pub const MAX_DESCRIPTION_LENGTH: usize = 256;
pub const MAX_CANDIDATE_NAME_LENGTH: usize = 32;

// Upper bound on a voting's roster; keeps the Voting account under the
// 10 KiB limit for accounts created through CPI
pub const MAX_CANDIDATES_LIMIT: u32 = 64;

// Anchor discriminator size (8 bytes)
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Check if a title fits in the Voting account
pub fn is_valid_title(title: &str) -> bool {
    title.len() <= MAX_TITLE_LENGTH
}

pub fn is_valid_description(description: &str) -> bool {
    description.len() <= MAX_DESCRIPTION_LENGTH
}

pub fn is_valid_candidate_name(name: &str) -> bool {
    name.len() <= MAX_CANDIDATE_NAME_LENGTH
}

/// A roster must hold at least one candidate and fit the account size limit
pub fn is_valid_max_candidates(max_candidates: u32) -> bool {
    max_candidates > 0 && max_candidates <= MAX_CANDIDATES_LIMIT
}
