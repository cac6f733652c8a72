use crate::scanner::scan;

/// Remove line (`--`) and block (`/* */`) comments from `script`.
///
/// String literals and optimizer hints (`/*+ ... */`) are kept verbatim, as
/// is the newline ending a line comment, so the line structure of the script
/// survives. Nothing is inserted in place of a removed comment.
pub fn remove_comments(script: &str) -> String {
    let mut stripped = String::with_capacity(script.len());
    for span in scan(script).filter(|span| !span.kind.is_removable_comment()) {
        stripped.push_str(span.text(script));
    }
    stripped
}

/// Like [`remove_comments`], passing an absent script through unchanged
pub fn remove_comments_optional(script: Option<&str>) -> Option<String> {
    script.map(remove_comments)
}

/// Check if `script` contains any comment that [`remove_comments`] would delete
pub fn has_removable_comments(script: &str) -> bool {
    scan(script).any(|span| span.kind.is_removable_comment())
}
