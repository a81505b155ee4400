//! Slice-based decoder implementation.

use crate::report::ReportKind;

use super::{Feed, Receiver, Reports};

/// Feed a slice of bytes to a receiver, calling a handler for every report
/// completed.
///
/// This method is also re-exported as `tsip::avec::decode_slice`.
///
/// Returns the number of reports completed.
pub fn decode(r: &[u8], o: &mut Receiver, mut f: impl FnMut(ReportKind, &Reports)) -> usize {
    let mut n = 0;

    for &b in r {
        if let Feed::Report(kind) = o.feed(b) {
            f(kind, o.reports());
            n += 1;
        }
    }

    n
}
