// src/core/decode.rs
//
// Byte → text decoding for fetched pages. The source is an old static page
// whose declared charset is not trustworthy, so we try candidates in order.

use std::borrow::Cow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Iso8859_1,
    Latin1,
    Cp1252,
}

/// Candidate order used by the fetcher.
pub const DEFAULT_CANDIDATES: &[Encoding] = &[
    Encoding::Utf8,
    Encoding::Iso8859_1,
    Encoding::Latin1,
    Encoding::Cp1252,
];

impl Encoding {
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Iso8859_1 => "iso-8859-1",
            Encoding::Latin1 => "latin-1",
            Encoding::Cp1252 => "cp1252",
        }
    }

    /// Strict decode; `None` if any byte is invalid for this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            // ISO-8859-1 maps every byte to the code point of the same value.
            Encoding::Iso8859_1 | Encoding::Latin1 => {
                Some(bytes.iter().map(|&b| b as char).collect())
            }
            Encoding::Cp1252 => bytes.iter().map(|&b| cp1252_char(b)).collect(),
        }
    }
}

/// Result of decoding: the text plus which candidate produced it
/// (`None` = lossy fallback).
pub struct Decoded {
    pub text: String,
    pub encoding: Option<Encoding>,
}

/// Try each candidate in order; if all fail, decode as UTF-8 replacing
/// invalid sequences with U+FFFD. Never fails.
pub fn decode_bytes(bytes: &[u8], candidates: &[Encoding]) -> Decoded {
    for enc in candidates {
        if let Some(text) = enc.decode(bytes) {
            return Decoded { text, encoding: Some(*enc) };
        }
        logd!("Decode: {} rejected input", enc.label());
    }
    let text = match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(s) => s!(s),
        Cow::Owned(s) => s,
    };
    Decoded { text, encoding: None }
}

// Windows-1252: 0x80..=0x9F differ from Latin-1; five slots are undefined.
const CP1252_HIGH: [Option<char>; 32] = [
    Some('\u{20ac}'), None,             Some('\u{201a}'), Some('\u{0192}'),
    Some('\u{201e}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02c6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None,             Some('\u{017d}'), None,
    None,             Some('\u{2018}'), Some('\u{2019}'), Some('\u{201c}'),
    Some('\u{201d}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02dc}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203a}'),
    Some('\u{0153}'), None,             Some('\u{017e}'), Some('\u{0178}'),
];

fn cp1252_char(b: u8) -> Option<char> {
    match b {
        0x80..=0x9F => CP1252_HIGH[(b - 0x80) as usize],
        _ => Some(b as char),
    }
}
