// src/specs/umls.rs
//
// Coded cell text → display name.
//
// Cells carry UMLS concepts in a few shapes, sometimes chained with '^':
//   "UMLS:C0004238_Angina pectoris"
//   "C0004238_Angina"
//   "UMLS:C0015967"
//   "UMLS:C0008031_pain chest^UMLS:C0018681_Headache"

use crate::config::consts::UMLS_MARKER;
use crate::core::sanitize::normalize_ws;

/// Readable name for a coded token.
///
/// Falls back to returning `code` unchanged when nothing is left after
/// stripping; callers validate non-emptiness on the result.
pub fn normalize(code: &str) -> String {
    let collapsed = normalize_ws(code);

    // Last segment of a '^' chain
    let tail = match collapsed.rfind('^') {
        Some(i) => collapsed[i + 1..].trim(),
        None => collapsed.as_str(),
    };

    let name = match tail.split_once('_') {
        Some((_, rest)) if !rest.trim().is_empty() => rest.to_string(),
        Some((head, _)) => head.replace(UMLS_MARKER, ""),
        None => tail.replace(UMLS_MARKER, ""),
    };

    let name = normalize_ws(&name.replace('_', " "));
    if name.is_empty() {
        return s!(code);
    }
    name
}
