use bead_quant::ParseColorError;
use thiserror::Error;

/// Errors from loading palette catalog definitions.
///
/// This is the only hard-failure surface in the crate: everything past
/// the loading boundary degrades gracefully (sentinel entries, silently
/// skipped out-of-bounds cells) because a visible-but-wrong bead beats an
/// aborted interactive edit.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid color {hex:?}: {source}")]
    Color {
        hex: String,
        #[source]
        source: ParseColorError,
    },
}
