use anchor_lang::prelude::*;

// Rejections raised by the voting registry. Every one aborts the whole
// transaction, so no account is left partially written.
#[error_code]
pub enum VotingError {
    #[msg("Only the registry administrator can perform this action")]
    Unauthorized,

    #[msg("Referenced voting or candidate does not exist")]
    NotFound,

    #[msg("Voting has reached its deadline and no longer accepts changes")]
    VotingClosed,

    #[msg("Voter is already registered for this voting")]
    AlreadyRegistered,

    #[msg("Voter is not registered for this voting or has already voted")]
    NotRegistered,

    #[msg("Candidate roster is full")]
    RosterFull,

    #[msg("Candidate address is already on the roster")]
    DuplicateCandidate,

    #[msg("Invalid candidate index provided")]
    InvalidCandidate,

    #[msg("Candidates cannot vote for themselves")]
    SelfVote,

    #[msg("Title is too long (maximum 64 bytes)")]
    TitleTooLong,

    #[msg("Description is too long (maximum 256 bytes)")]
    DescriptionTooLong,

    #[msg("Candidate name is too long (maximum 32 bytes)")]
    NameTooLong,

    #[msg("Maximum candidates must be between 1 and 64")]
    InvalidMaxCandidates,

    #[msg("Mathematical overflow")]
    MathOverflow,
}
