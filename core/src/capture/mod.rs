//! Boundary with the capture pipeline.
//!
//! The UDP listener and the frame reassembly buffer live outside this crate;
//! they plug in through [`FrameSource`] and [`FrameAssembler`]. What the crate
//! does own is the DCA1000 datagram header and the buffer sizing derived from
//! a [`ParameterRecord`].

pub mod datagram;
pub mod sizing;

pub use datagram::Datagram;
pub use sizing::{CaptureSizing, DEFAULT_BUFFERED_FRAMES};

use crate::params::ParameterRecord;
use crate::prelude::CaptureResult;

/// Yields datagrams from the capture board, one per call.
pub trait FrameSource {
    fn recv_datagram(&mut self) -> CaptureResult<Datagram>;
}

/// Stitches sequenced payloads into whole frames.
pub trait FrameAssembler {
    fn with_sizing(sizing: &CaptureSizing) -> Self
    where
        Self: Sized;

    /// Returns the current frame bytes and whether that frame just completed.
    fn add_payload(&mut self, sequence_number: u32, payload: &[u8]) -> (Vec<u8>, bool);
}

/// Pairs a source with an assembler sized from the derived parameters.
pub struct CaptureSession<S, A> {
    source: S,
    assembler: A,
    sizing: CaptureSizing,
}

impl<S: FrameSource, A: FrameAssembler> CaptureSession<S, A> {
    pub fn new(source: S, params: &ParameterRecord, frames: usize) -> CaptureResult<Self> {
        let sizing = CaptureSizing::from_params(params, frames)?;
        Ok(Self {
            source,
            assembler: A::with_sizing(&sizing),
            sizing,
        })
    }

    pub fn sizing(&self) -> &CaptureSizing {
        &self.sizing
    }

    /// Receives one datagram and feeds it to the assembler.
    pub fn update(&mut self) -> CaptureResult<(Vec<u8>, bool)> {
        let datagram = self.source.recv_datagram()?;
        Ok(self
            .assembler
            .add_payload(datagram.sequence_number, &datagram.payload))
    }
}
