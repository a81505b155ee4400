//! Helper for placing a payload on the wire.

use core::iter::once;

use either::Either::{Left, Right};

use super::{DLE, ETX};

/// Wrap a frame's bytes in delimiters, doubling every literal `DLE`.
///
/// The frame begins with its report code. No bytes are added for integrity,
/// as the protocol defines none.
pub fn stuff(frame: &[u8]) -> impl Iterator<Item = u8> + '_ {
    let body = frame.iter().flat_map(|&b| {
        if b == DLE {
            Left([DLE, DLE].into_iter())
        } else {
            Right(once(b))
        }
    });

    once(DLE).chain(body).chain([DLE, ETX])
}
