use uuid::Uuid;

/// Fresh document identifier. UUIDv7 keeps ids roughly ordered by creation time.
pub fn new_document_id() -> String {
    Uuid::now_v7().to_string()
}

/// Appends `value` unless it is already present, preserving order.
pub fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    if list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

/// Removes every occurrence of `value`. Returns whether anything was removed.
pub fn pull(list: &mut Vec<String>, value: &str) -> bool {
    let before = list.len();
    list.retain(|v| v != value);
    list.len() != before
}
