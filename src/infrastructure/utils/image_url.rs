use url::Url;

/// Returns the image URL if it is safe to hand to the front end.
///
/// Absolute `http`/`https` URLs with a host and root-relative asset paths
/// (`/images/cover.png`) pass; anything else yields `None` so the caller
/// falls back to its placeholder image.
pub fn validate_image_url(raw: &str) -> Option<String> {
    let candidate = raw.trim();

    // browsers read `\` as `/`, so "/\host" is as protocol-relative as "//host"
    if candidate.is_empty() || candidate.contains('\\') {
        return None;
    }

    if candidate.starts_with('/') {
        if candidate.starts_with("//") || candidate.chars().any(char::is_whitespace) {
            return None;
        }
        return Some(candidate.to_string());
    }

    match Url::parse(candidate) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some() => {
            Some(candidate.to_string())
        }
        Ok(parsed) => {
            tracing::debug!("Rejected image URL with scheme '{}'", parsed.scheme());
            None
        }
        Err(e) => {
            tracing::debug!("Rejected malformed image URL '{}': {}", candidate, e);
            None
        }
    }
}

/// Optional-field convenience used by entity conversions.
pub fn sanitize_optional_image_url(raw: Option<&str>) -> Option<String> {
    raw.and_then(validate_image_url)
}
