use super::data::FormData;

/// True when at least one field's working value differs from the baseline.
///
/// Comparison is structural: nested objects and arrays compare by content,
/// with no special-casing per field type. This is the sole gate for enabling
/// submission.
pub fn has_changes(initial: &FormData, current: &FormData) -> bool {
    initial != current
}
