use uuid::Uuid;

/// Returns an opaque session-unique token. Only ever compared for equality.
pub fn opaque_id() -> String {
    Uuid::new_v4().simple().to_string()
}
