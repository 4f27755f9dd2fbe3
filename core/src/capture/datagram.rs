use crate::prelude::{CaptureError, CaptureResult};

/// DCA1000 raw-data header: 4-byte sequence number, 6-byte byte count.
pub const HEADER_LEN: usize = 10;

/// One UDP datagram streamed by the DCA1000 capture board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    pub sequence_number: u32,
    /// Running count of payload bytes sent before this datagram.
    pub byte_count: u64,
    pub payload: Vec<u8>,
}

impl Datagram {
    /// Decodes a raw packet. Both header fields are little-endian.
    pub fn decode(packet: &[u8]) -> CaptureResult<Self> {
        if packet.len() < HEADER_LEN {
            return Err(CaptureError::TruncatedHeader(packet.len()));
        }

        let mut sequence = [0u8; 4];
        sequence.copy_from_slice(&packet[..4]);
        let mut count = [0u8; 8];
        count[..6].copy_from_slice(&packet[4..HEADER_LEN]);

        Ok(Self {
            sequence_number: u32::from_le_bytes(sequence),
            byte_count: u64::from_le_bytes(count),
            payload: packet[HEADER_LEN..].to_vec(),
        })
    }
}
