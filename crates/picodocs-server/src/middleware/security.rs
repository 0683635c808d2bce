//! Security headers set on every response.

use std::collections::BTreeSet;

use axum::http::HeaderValue;
use axum::http::header::{CONTENT_SECURITY_POLICY, HeaderName, InvalidHeaderValue};
use picodocs_content::{ContentOptions, script_urls, stylesheet_urls};
use tower_http::set_header::SetResponseHeaderLayer;

/// Static header name and value pairs, applied in order.
pub(crate) const SECURITY_HEADERS: [(&str, &str); 2] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
];

/// Layer that sets `name` to `value`, replacing any value a handler set.
pub(crate) fn header_layer(
    name: &'static str,
    value: &'static str,
) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    )
}

/// Layer that sets the Content-Security-Policy header.
pub(crate) fn csp_layer(policy: HeaderValue) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(CONTENT_SECURITY_POLICY, policy)
}

/// Build the Content-Security-Policy for a page.
///
/// Scripts and stylesheets are allowed from `'self'`, inline (the htmx init
/// and theme scripts) and from the origin of every absolute URL the page head
/// loads.
pub(crate) fn content_security_policy(
    options: &ContentOptions,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let script_src = sources(&script_urls(options));
    let style_src = sources(&stylesheet_urls(options));
    HeaderValue::from_str(&format!(
        "default-src 'self'; \
         script-src {script_src}; \
         style-src {style_src}; \
         font-src 'self' data:; \
         img-src 'self' data:; \
         connect-src 'self'; \
         frame-ancestors 'none'"
    ))
}

/// `'self' 'unsafe-inline'` followed by the sorted, deduplicated origins of `urls`.
fn sources(urls: &[&str]) -> String {
    let origins: BTreeSet<&str> = urls.iter().filter_map(|url| origin(url)).collect();
    let mut out = String::from("'self' 'unsafe-inline'");
    for origin in origins {
        out.push(' ');
        out.push_str(origin);
    }
    out
}

/// Scheme and authority of an absolute http(s) URL, `None` for relative URLs.
fn origin(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let authority = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    (authority > 0).then(|| &url[..url.len() - rest.len() + authority])
}
