// libpn532/src/protocol/frame.rs

use crate::constants::{
    PN532_ACK_FRAME, PN532_HOST_TO_PN532, PN532_MIN_FRAME_LEN, PN532_POSTAMBLE, PN532_PREAMBLE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 normal information frame helper.
/// Format: [Preamble(3)] [Len(1)] [LCS(1)] [TFI(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Len counts TFI + payload. DCS covers TFI + payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub tfi: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    /// Largest payload (command code + parameters) whose length still
    /// fits the single LEN byte.
    pub const MAX_PAYLOAD_LEN: usize = 254;

    /// Encode a host->PN532 command payload into a full frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode_with_tfi(PN532_HOST_TO_PN532, payload)
    }

    /// Encode a payload with an explicit direction byte
    pub fn encode_with_tfi(tfi: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > Self::MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: Self::MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = (payload.len() + 1) as u8;
        let mut out = Vec::with_capacity(PN532_MIN_FRAME_LEN + payload.len());
        out.extend_from_slice(&PN532_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.push(tfi);
        out.extend_from_slice(payload);
        out.push(dcs(tfi, payload));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Decode a full normal information frame
    pub fn decode(frame: &[u8]) -> Result<Frame> {
        if frame.len() < PN532_MIN_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MIN_FRAME_LEN,
                actual: frame.len(),
            });
        }

        if frame[..3] != PN532_PREAMBLE {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let len = frame[3];
        let lcs_expected = lcs(len);
        if frame[4] != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: frame[4],
            });
        }
        if len == 0 {
            return Err(Error::FrameFormat("zero length frame".into()));
        }

        // preamble(3) + len + lcs + data(len) + dcs + postamble
        let required_len = 3 + 1 + 1 + (len as usize) + 1 + 1;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let tfi = frame[5];
        let payload_end = 5 + len as usize;
        let payload = &frame[6..payload_end];

        let dcs_expected = dcs(tfi, payload);
        if frame[payload_end] != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: frame[payload_end],
            });
        }

        if frame[payload_end + 1] != PN532_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        Ok(Frame {
            tfi,
            payload: payload.to_vec(),
        })
    }

    /// True iff `bytes` is exactly the 6-byte ACK frame.
    pub fn is_ack(bytes: &[u8]) -> bool {
        bytes == PN532_ACK_FRAME
    }
}
