//! Shared fixtures for connection-level tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

pub const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];

/// A throwaway site: `/index.html`, `/img/a.png`, and a secret outside the root.
pub struct Site {
    pub dir: tempfile::TempDir,
}

impl Site {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().join("webroot");
        fs::create_dir_all(root.join("img")).expect("create webroot");
        fs::write(root.join("index.html"), "<h1>hi</h1>").expect("write index");
        fs::write(root.join("img").join("a.png"), PNG).expect("write png");
        fs::write(dir.path().join("secret.txt"), "top secret").expect("write secret");
        Self { dir }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("webroot")
    }
}

/// Splits a raw response into its head (without the blank line) and body.
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has a header terminator");
    let head = String::from_utf8(raw[..end].to_vec()).expect("utf-8 head");
    (head, raw[end + 4..].to_vec())
}

/// Header value from a response head, matching names case-insensitively.
pub fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.split("\r\n").skip(1).find_map(|line| {
        let (k, v) = line.split_once(':')?;
        k.trim().eq_ignore_ascii_case(name).then(|| v.trim())
    })
}
