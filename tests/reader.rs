#![cfg(feature = "std")]

mod common;

use std::io::{self, Cursor, Read};

use common::{WireSecondaryTime, wire};
use tsip::{
    avec::{Config, Receiver, Updated, decode_reader, decode_slice, reader::Error},
    report::ReportKind,
    sans::DLE,
};
use zerocopy::{IntoBytes, byteorder::big_endian::U32};

/// Stream of a secondary timing report, a mis-framed report and a primary
/// timing report.
fn stream() -> Vec<u8> {
    let secondary = WireSecondaryTime {
        dac_value: U32::new(0x1010_1010),
        ..Default::default()
    };

    let mut bytes = wire(secondary.as_bytes());
    bytes.extend([DLE, 0x8F, 0xAB, DLE, 0x00]);
    bytes.extend(wire(&[0x8F, 0xAB, 0, 0, 0, 9]));
    bytes
}

#[test]
fn decode_reader_to_end() {
    let mut receiver = Receiver::with_config(Config::default().with_verbose(false));
    let mut kinds = vec![];

    let n = decode_reader(&mut Cursor::new(stream()), &mut receiver, |kind, _| {
        kinds.push(kind)
    })
    .unwrap();

    assert_eq!(n, 2);
    assert_eq!(kinds, [ReportKind::SecondaryTime, ReportKind::PrimaryTime]);

    let reports = receiver.reports();
    assert_eq!(reports.secondary_time().unwrap().dac_value, 0x1010_1010);
    assert_eq!(reports.primary_time().unwrap().seconds_of_week, 9);
    assert_eq!(
        reports.updated(),
        Updated::SECONDARY_TIME | Updated::PRIMARY_TIME
    );
}

#[test]
fn decode_reader_matches_slice() {
    let bytes = stream();

    let mut from_reader = Receiver::new();
    decode_reader(&mut bytes.as_slice(), &mut from_reader, |_, _| {}).unwrap();

    let mut from_slice = Receiver::new();
    decode_slice(&bytes, &mut from_slice, |_, _| {});

    assert_eq!(
        from_reader.reports().secondary_time(),
        from_slice.reports().secondary_time()
    );
    assert_eq!(
        from_reader.reports().primary_time(),
        from_slice.reports().primary_time()
    );
}

#[test]
fn handler_sees_stored_report() {
    let mut receiver = Receiver::new();

    decode_slice(&stream(), &mut receiver, |kind, reports| {
        assert!(reports.is_valid(kind));
        assert!(reports.updated().contains(kind.into()));
    });
}

/// Reader returning one byte per call, interrupted before every other byte.
struct Interrupting<R> {
    inner: R,
    interrupt: bool,
}

impl<R: Read> Read for Interrupting<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;

        if self.interrupt {
            Err(io::ErrorKind::Interrupted.into())
        } else {
            let len = buf.len().min(1);
            self.inner.read(&mut buf[..len])
        }
    }
}

#[test]
fn decode_reader_retries_interrupted() {
    let mut reader = Interrupting {
        inner: Cursor::new(stream()),
        interrupt: false,
    };
    let mut receiver = Receiver::new();

    let n = decode_reader(&mut reader, &mut receiver, |_, _| {}).unwrap();
    assert_eq!(n, 2);
}

struct Failing;

impl Read for Failing {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "unplugged"))
    }
}

#[test]
fn decode_reader_reports_io_errors() {
    let mut receiver = Receiver::new();

    let err = decode_reader(&mut Failing, &mut receiver, |_, _| {}).unwrap_err();
    let Error::Io(err) = err;
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
