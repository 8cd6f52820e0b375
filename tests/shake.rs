// These tests take too long for miri
#![cfg(not(miri))]
use std::path::Path;

use keccak_ref::{Error, shake128, shake256};

use crate::rsp::KatSet;

mod rsp;

type Shake = fn(&[u8], usize) -> keccak_ref::Result<Vec<u8>>;

fn check(path: &str, shake: Shake) {
    let kat_set = KatSet::load(Path::new(path));
    assert!(!kat_set.tests.is_empty());
    for test in kat_set.tests {
        let output = shake(&test.msg, test.output_len / 8).unwrap();
        assert_eq!(
            test.digest,
            hex::encode(output),
            "length {} output {} failed",
            test.len,
            test.output_len
        );
    }
}

#[test]
fn shake128_small_vectors() {
    check(
        "tests/test-vectors/byte-oriented/SHAKE128ShortMsg.rsp",
        shake128,
    );
}

#[test]
fn shake256_small_vectors() {
    check(
        "tests/test-vectors/byte-oriented/SHAKE256ShortMsg.rsp",
        shake256,
    );
}

#[test]
fn shake128_variable_output() {
    // Includes outputs longer than the rate, which need further permutations
    // while squeezing.
    check(
        "tests/test-vectors/byte-oriented/SHAKE128VariableOut.rsp",
        shake128,
    );
}

#[test]
fn shake256_variable_output() {
    check(
        "tests/test-vectors/byte-oriented/SHAKE256VariableOut.rsp",
        shake256,
    );
}

#[test]
fn published_vectors() {
    assert_eq!(
        "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26",
        hex::encode(shake128(b"", 32).unwrap())
    );
    assert_eq!(
        "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f\
         d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be",
        hex::encode(shake256(b"", 64).unwrap())
    );
}

#[test]
fn longer_output_extends_shorter() {
    let short = shake128(b"abc", 16).unwrap();
    let long = shake128(b"abc", 400).unwrap();
    assert_eq!(short[..], long[..16]);
}

#[test]
fn empty_output_is_rejected() {
    assert_eq!(Err(Error::ZeroOutputLength), shake256(b"abc", 0));
}
