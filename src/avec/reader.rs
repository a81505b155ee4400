//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use thiserror::Error;

use crate::report::ReportKind;

use super::{Receiver, Reports, slice};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Feed every byte of a reader to a receiver until the end of the stream,
/// calling a handler for every report completed.
///
/// This method is also re-exported as `tsip::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
///
/// Returns the number of reports completed.
pub fn decode(
    r: &mut impl Read,
    o: &mut Receiver,
    mut f: impl FnMut(ReportKind, &Reports),
) -> Result<usize, Error> {
    let mut buf = [0; 64];
    let mut n = 0;

    loop {
        let len = match r.read(&mut buf) {
            Ok(0) => return Ok(n),
            Ok(len) => len,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        n += slice::decode(&buf[..len], o, &mut f);
    }
}
