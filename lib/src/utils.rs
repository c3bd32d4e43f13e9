use chrono::{DateTime, SecondsFormat, Utc};
use std::path::PathBuf;

pub fn get_default_datadir() -> PathBuf {
    if let Ok(path) = std::env::var("LINKCOLLECTION_DATA_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(path).join("linkcollection").join("data");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local/share/linkcollection/data");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("linkcollection").join("data");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("linkcollection");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/linkcollection");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("linkcollection");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Fresh opaque id for a bookmark, folder or tag
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time as an ISO-8601 string with millisecond precision
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Unix seconds for an ISO timestamp; unparseable input maps to 0
pub fn iso_to_unix(timestamp: &str) -> i64 {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.timestamp())
        .unwrap_or(0)
}

/// ISO timestamp for Unix seconds, as found in Netscape `ADD_DATE` attributes
pub fn unix_to_iso(secs: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
