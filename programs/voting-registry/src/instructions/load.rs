use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

use crate::state::{Registry, VoterRecord, Voting};

// Deferred account loading. Voting and voter record accounts are only
// address-checked by seeds during account validation; their contents are read
// here so an unknown voting surfaces as NotFound and a never-created voter
// record reads as NotRegistered.

/// Load a Voting after confirming its index was handed out by the registry
pub fn load_voting(registry: &Registry, voting_id: u64, info: &AccountInfo) -> Result<Voting> {
    registry.ensure_voting_exists(voting_id)?;
    require_keys_eq!(*info.owner, crate::ID, ErrorCode::AccountOwnedByWrongProgram);

    let data = info.try_borrow_data()?;
    Voting::try_deserialize(&mut &data[..])
}

pub fn store_voting(voting: &Voting, info: &AccountInfo) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    voting.try_serialize(&mut writer)
}

/// None when the record PDA was never created
pub fn load_voter_record(info: &AccountInfo) -> Result<Option<VoterRecord>> {
    if *info.owner != crate::ID || info.data_is_empty() {
        return Ok(None);
    }

    let data = info.try_borrow_data()?;
    VoterRecord::try_deserialize(&mut &data[..]).map(Some)
}

pub fn store_voter_record(record: &VoterRecord, info: &AccountInfo) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    record.try_serialize(&mut writer)
}
