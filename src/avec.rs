//! Convenience interfaces for common decoding patterns.
//!
//! A [`Receiver`] owns a [`Framer`] and a [`Reports`] store. Feed it bytes as
//! they arrive from the device, and read the latest reports back whenever
//! [`Feed::Report`] is returned (or poll [`Reports::updated`]).
//!
//! ```
//! let mut receiver = Receiver::new();
//!
//! for b in serial {
//!     if let Feed::Report(ReportKind::PrimaryTime) = receiver.feed(b) {
//!         let time = receiver.reports().primary_time().unwrap();
//!         println!("{}:{}:{}", time.hours, time.minutes, time.seconds);
//!     }
//! }
//! ```
//!
//! The functions in this module are suited to decoding from data slices and
//! readers, reporting each completed report to a callback.
//!
//! A receiver is not synchronised. Where bytes arrive on more than one thread
//! or interrupt, funnel them to a single owner rather than sharing it.

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;
pub mod store;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;
pub use store::{Reports, Updated};

use crate::{
    report::{ReportId, ReportKind},
    sans::framer::{Advance, Framer},
};

/// Diagnostic settings. These never affect decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Log an informational message for every completed or mis-framed frame.
    pub verbose: bool,
    /// Log a hex dump of every completed frame.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: true,
            debug: false,
        }
    }
}

impl Config {
    pub fn with_verbose(self, verbose: bool) -> Self {
        Self { verbose, ..self }
    }

    pub fn with_debug(self, debug: bool) -> Self {
        Self { debug, ..self }
    }
}

/// Outcome of feeding a byte to a [`Receiver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// No frame was completed by this byte.
    Pending,
    /// A frame was completed, replacing the report of this kind.
    Report(ReportKind),
    /// The frame in progress was discarded. Decoding resumes at the next
    /// frame.
    Misframed,
}

/// Byte-at-a-time decoder retaining the latest report of every kind.
#[derive(Debug, Default)]
pub struct Receiver {
    framer: Framer,
    reports: Reports,
    config: Config,
}

impl Receiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.config.verbose = verbose;
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
    }

    /// Feed a single byte from the device.
    pub fn feed(&mut self, b: u8) -> Feed {
        match self.framer.advance(b) {
            Advance::Pending => Feed::Pending,
            Advance::Complete => {
                let frame = self.framer.frame();

                if self.config.verbose {
                    match ReportId::of(frame) {
                        Some(ReportId {
                            code,
                            subcode: Some(subcode),
                        }) => log::info!("Found report {code:#04x}-{subcode:#04x}."),
                        Some(ReportId { code, .. }) => log::info!("Found report {code:#04x}."),
                        None => log::info!("Found empty report."),
                    }
                }

                if self.config.debug {
                    log::debug!("Report buffer ({} bytes): {:02x?}", frame.len(), frame);
                }

                Feed::Report(self.reports.update(frame))
            }
            Advance::Misframed => {
                if self.config.verbose {
                    log::info!("Mis-framed report, waiting for packet.");
                }

                Feed::Misframed
            }
        }
    }

    pub fn reports(&self) -> &Reports {
        &self.reports
    }

    /// Mutable access to the store, for clearing updated flags.
    pub fn reports_mut(&mut self) -> &mut Reports {
        &mut self.reports
    }

    /// Discard any frame in progress and forget every report.
    pub fn reset(&mut self) {
        self.framer.reset();
        self.reports.reset();
    }
}
