//! Basic parser and datastructures for known answer tests.
//!
//! Understands the `.rsp` layout of the NIST CAVP SHA-3 files: an optional
//! `[L = ..]` or `[Outputlen = ..]` header followed by records of `Len`,
//! `Msg` and `MD` (or `Output`) lines. Records may carry their own
//! `Outputlen` line, as in the variable output files.

use std::{fs, path::Path};

pub struct KatSet {
    /// Digest length from the header, if any
    pub length: Option<usize>,
    pub tests: Vec<Test>,
}

pub struct Test {
    /// Message length in bits
    pub len: usize,
    pub msg: Vec<u8>,
    /// Output length in bits
    pub output_len: usize,
    pub digest: String,
}

impl KatSet {
    pub fn load(path: &Path) -> Self {
        let content = fs::read_to_string(path).expect("unable to read test file");
        Self::parse(&content)
    }

    fn parse(inp: &str) -> Self {
        let mut length = None;
        let mut tests = vec![];
        let mut output_len = None;
        let mut len = None;
        let mut msg = None;

        let lines = inp
            .lines()
            .map(str::trim)
            .filter(|line| !(line.starts_with('#') || line.is_empty()));

        for line in lines {
            if let Some(header) = line.strip_prefix('[') {
                let header = header.strip_suffix(']').expect("missing ']'");
                let (_, value) = header.split_once(" = ").expect("malformed header");
                length = Some(value.parse().expect("header length can't be parsed"));
                continue;
            }
            let (key, value) = line.split_once(" = ").expect("malformed line");
            match key {
                "Outputlen" => output_len = Some(value.parse().expect("unable to parse Outputlen")),
                "Len" => len = Some(value.parse().expect("unable to parse Len")),
                "Msg" => msg = Some(hex::decode(value).expect("unable to decode msg")),
                "MD" | "Output" => {
                    let len: usize = len.take().expect("missing Len");
                    assert_eq!(0, len % 8, "only byte-oriented messages are supported");
                    let mut msg: Vec<u8> = msg.take().expect("missing Msg");
                    msg.truncate(len / 8);
                    let output_len = output_len
                        .take()
                        .or(length)
                        .expect("missing output length");
                    tests.push(Test {
                        len,
                        msg,
                        output_len,
                        digest: value.to_owned(),
                    });
                }
                other => panic!("unknown key {other}"),
            }
        }
        KatSet { length, tests }
    }
}
