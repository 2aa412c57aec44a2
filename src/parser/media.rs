//! Media placeholder substitution for header bodies.

/// Literal text that replaces a body referencing an attachment.
pub const MEDIA_PLACEHOLDER: &str = "[Media omitted]";

/// Attachment file-name prefixes used by exports (image, video, voice note).
const MEDIA_PREFIXES: [&str; 3] = ["IMG-", "VID-", "PTT-"];

/// Marker exports write around attached file names.
const ATTACHED_MARKER: &str = "<attached";

/// Whether a header body refers to an attachment.
///
/// Heuristic: a case-insensitive `IMG-`/`VID-`/`PTT-` prefix, or `<attached`
/// anywhere (case-sensitive). User text that happens to match is treated as
/// media too.
pub fn is_media_body(body: &str) -> bool {
    let prefixed = MEDIA_PREFIXES.iter().any(|prefix| {
        body.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    });

    prefixed || body.contains(ATTACHED_MARKER)
}

/// Apply media substitution to a freshly matched header body.
pub fn normalize_body(body: String) -> String {
    if is_media_body(&body) {
        MEDIA_PLACEHOLDER.to_string()
    } else {
        body
    }
}
