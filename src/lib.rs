#![no_std]

//! An allocation-free decoder for the Trimble Standard Interface Protocol
//! (TSIP), as spoken by GPS timing receivers such as the Thunderbolt GPSDO.
//!
//! Bytes are fed one at a time (from a polling loop, an interrupt handler, or a
//! reader) into a framing state machine. Each completed frame is dispatched on
//! its report code into a typed record, and the latest record of every kind is
//! kept for the application to read.
//!
//! Most users should begin with the [`avec::Receiver`]. Applications needing
//! finer control over framing, or decoding reports this crate does not know
//! about, should look to the [`sans`] module and the
//! [`FromPayload`](macro@report::FromPayload) derive macro.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoding (default).

pub mod avec;
pub mod report;
pub mod sans;
