// Export all instruction modules

pub mod create_new_voting;
pub mod initialize;
pub mod load;
pub mod post_candidate;
pub mod register_voter;
pub mod transfer_admin;
pub mod views;
pub mod vote_for_candidate;

// Re-export the instruction structs for easy access
pub use create_new_voting::*;
pub use initialize::*;
pub use post_candidate::*;
pub use register_voter::*;
pub use transfer_admin::*;
pub use views::*;
pub use vote_for_candidate::*;
