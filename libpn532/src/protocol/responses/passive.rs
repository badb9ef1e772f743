// libpn532/src/protocol/responses/passive.rs

use crate::constants::PN532_ACK_IN_LIST_PASSIVE_TARGET;
use crate::protocol::parser;
use crate::types::{Nfcid, PassiveTarget};
use crate::{Error, Result};

/// Decode an InListPassiveTarget reply (20 bytes read).
/// Layout: 00 00 FF LEN LCS D5 | 4B NbTg Tg SENS_RES(2) SEL_RES NFCIDLen NFCID(n)
pub fn decode_in_list_passive_target(data: &[u8]) -> Result<PassiveTarget> {
    parser::expect_code_at(data, 6, PN532_ACK_IN_LIST_PASSIVE_TARGET)?;

    let targets_found = parser::byte_at(data, 7)?;
    match targets_found {
        0 => return Err(Error::NoTarget),
        1 | 2 => {}
        n => return Err(Error::InvalidTargetCount(n)),
    }

    let target = parser::byte_at(data, 8)?;
    let sens_res = parser::be_u16_at(data, 9)?;
    let sel_res = parser::byte_at(data, 11)?;
    let id_len = parser::byte_at(data, 12)? as usize;
    if id_len > Nfcid::MAX_LEN {
        return Err(Error::InvalidLength {
            expected: Nfcid::MAX_LEN,
            actual: id_len,
        });
    }
    let nfcid = Nfcid::try_from(parser::slice_at(data, 13, id_len)?)?;

    Ok(PassiveTarget {
        targets_found,
        target,
        sens_res,
        sel_res,
        nfcid,
    })
}
