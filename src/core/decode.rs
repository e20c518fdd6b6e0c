//! Purpose: Decode compact JWS tokens into their three structural parts.
//! Exports: `decode`, `DecodedToken`.
//! Role: Pure core of the crate; everything above it is presentation.
//! Invariants: Input is decoded exactly as supplied; no trimming or normalization.
//! Invariants: The signature segment is passed through verbatim, never decoded.
//! Invariants: Base64 decoding accepts both padded and unpadded segments.
//! Notes: No verification happens here. Signatures are untouched strings and
//! claims are arbitrary JSON; whether any of it is trustworthy is the
//! caller's problem.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Serialize;
use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::core::segment::Segment;

// Segments are translated from the URL-safe alphabet to the standard one
// before decoding, so the engine uses the standard alphabet. Tokens in the
// wild both pad and omit padding; the engine accepts either.
const SEGMENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A token decoded down to its structure: JSON header and payload, raw
/// signature. Construction goes through [`decode`]; every call produces a
/// fresh value with no state shared between calls.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
    pub signature: String,
}

/// Decode a compact `header.payload.signature` token without verifying it.
///
/// The input must split on `.` into exactly three segments. Header and
/// payload are base64url-decoded and parsed as JSON; the header and payload
/// may be any JSON value, not just objects. The signature segment is
/// returned exactly as it appeared in the input.
pub fn decode(raw: &str) -> Result<DecodedToken, Error> {
    if !raw.contains('.') {
        return Err(Error::new(ErrorKind::Malformed).with_message("missing '.' separators"));
    }

    let segments: Vec<&str> = raw.split('.').collect();
    if segments.len() != 3 {
        return Err(Error::new(ErrorKind::Malformed)
            .with_message(format!(
                "token has {} segments, expected 3",
                segments.len()
            ))
            .with_segment_count(segments.len()));
    }

    let header = decode_segment(segments[0], Segment::Header)?;
    let payload = decode_segment(segments[1], Segment::Payload)?;

    Ok(DecodedToken {
        header,
        payload,
        signature: segments[2].to_string(),
    })
}

fn decode_segment(encoded: &str, segment: Segment) -> Result<Value, Error> {
    let translated = translate_alphabet(encoded);

    let bytes = SEGMENT_BASE64.decode(translated.as_bytes()).map_err(|err| {
        Error::new(ErrorKind::Base64)
            .with_message(format!("{segment} segment is not valid base64"))
            .with_segment(segment)
            .with_source(err)
    })?;

    serde_json::from_slice(&bytes).map_err(|err| {
        Error::new(ErrorKind::Json)
            .with_message(format!("{segment} segment did not decode to JSON"))
            .with_segment(segment)
            .with_source(err)
    })
}

// `-` and `_` become `+` and `/`; everything else, including any `=`
// padding already present, is kept as-is for the decoder to judge.
fn translate_alphabet(encoded: &str) -> String {
    encoded
        .chars()
        .map(|ch| match ch {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect()
}
