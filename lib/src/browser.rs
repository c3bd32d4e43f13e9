use crate::error::{LinkError, Result};

/// Open `url` with the given browser executable, or the system default
pub fn open_url(url: &str, browser_path: Option<&str>) -> Result<()> {
    let result = match browser_path {
        Some(path) if !path.is_empty() => open::with_detached(url, path),
        _ => open::that_detached(url),
    };
    result.map_err(|e| LinkError::Browser(format!("Failed to open {}: {}", url, e)))
}
