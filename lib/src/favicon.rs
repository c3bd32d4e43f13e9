const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";

/// Favicon service URL for the host of `url`; a missing scheme means https
pub fn favicon_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(&with_scheme(url)).ok()?;
    let host = parsed.host_str()?;
    Some(format!("{}?domain={}&sz=64", FAVICON_SERVICE, host))
}

pub fn should_fetch_favicon(url: &str) -> bool {
    url::Url::parse(&with_scheme(url)).is_ok()
}

fn with_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
