// libpn532/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into a full wire frame (with preamble/LCS/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode(&cmd.encode())
}

/// Parse the raw reply read after `cmd` was acknowledged.
pub fn decode_response(cmd: &Command, raw: &[u8]) -> Result<Response> {
    Response::decode(cmd, raw)
}
