//! Internal finite-state machine for framing and field decoding.
//!
//! This module is intended for applications that need fine control over how
//! bytes are framed. See [`crate::avec`] for a decoder covering the common
//! case.
//!
//! # Architecture
//!
//! Each framing state is represented by a zero-size, non-copy token. Feed a
//! byte to the token's `advance` method to receive a successor state token.
//! States that collect data also take the [`FrameBuffer`](framer::FrameBuffer)
//! to write into.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed. The [`Framer`](framer::Framer) type drives the tokens over a
//! stream of bytes and is what most callers of this module want.
//!
//! Some areas of the protocol are not represented in the state machine:
//!
//! - Interpreting the completed frame. Payload fields are read through the
//! [`field`] module, and frames are dispatched into reports by
//! [`crate::avec::Reports`].
//!
//! - Producing frames. A helper for byte-stuffing a payload onto the wire is
//! provided in the [`stuff`] module.

pub mod field;
pub mod framer;
pub mod stuff;

/// Entrypoint to the finite-state machine.
pub type Decoder = framer::Idle;

/// Data link escape, opening and closing every frame.
pub const DLE: u8 = 0x10;

/// End of text, following the closing [`DLE`] of a frame.
pub const ETX: u8 = 0x03;

/// Capacity of a frame buffer. Bytes of longer frames are dropped.
pub const MAX_DATA: usize = 128;
