//! # Log Messages
//!
//! Templates for operator-facing log lines.

pub const STARTING: &str = "☕ Starting Coffee Bot...";
pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn missing_credentials(names: &[&str]) -> String {
    format!(
        "Required settings are not set: {}. Provide them in config.yaml or the environment.",
        names.join(", ")
    )
}

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub fn spreadsheet_opened(name: &str, id: &str) -> String {
    format!("Opened spreadsheet '{name}' ({id})")
}

pub fn credentials_found(path: &str) -> String {
    format!("Using service account key {path}")
}

pub fn health_listening(addr: &str) -> String {
    format!("Health endpoint listening on {addr}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id}")
}

pub fn invite_join_fail(room_id: &str, err: &str) -> String {
    format!("Failed to join room {room_id}: {err}")
}

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}
