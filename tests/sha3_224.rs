// These tests take too long for miri
#![cfg(not(miri))]
use std::path::Path;

use crate::rsp::KatSet;

mod rsp;

#[test]
fn test_small_vectors() {
    let kat_set = KatSet::load(Path::new(
        "tests/test-vectors/byte-oriented/SHA3_224ShortMsg.rsp",
    ));
    assert_eq!(Some(224), kat_set.length);
    for test in kat_set.tests {
        assert_eq!(224, test.output_len);
        let hash = keccak_ref::sha3_224(&test.msg);
        assert_eq!(test.digest, hex::encode(hash), "length {} failed", test.len);
    }
}

#[test]
fn published_vectors() {
    assert_eq!(
        "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
        hex::encode(keccak_ref::sha3_224(b""))
    );
    assert_eq!(
        "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
        hex::encode(keccak_ref::sha3_224(b"abc"))
    );
}
