/// Returns `true` for 2xx status codes.
///
/// ```
/// use bookfreq_fetch::is_success;
///
/// assert!(is_success(200));
/// assert!(!is_success(304));
/// ```
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Returns `true` if a response with this status is worth retrying.
///
/// # Retryable Codes
///
/// - 408: Request Timeout
/// - 429: Too Many Requests
/// - 5xx: any server error
///
/// ```
/// use bookfreq_fetch::is_retryable_status;
///
/// assert!(is_retryable_status(503));
/// assert!(!is_retryable_status(404));
/// ```
pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500..=599)
}

/// Returns `true` if `url` names an `http` or `https` resource.
///
/// ```
/// use bookfreq_fetch::is_http_url;
///
/// assert!(is_http_url("http://www.gutenberg.org/files/2600/2600-0.txt"));
/// assert!(!is_http_url("ftp://example.org/book.txt"));
/// ```
pub fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
}
