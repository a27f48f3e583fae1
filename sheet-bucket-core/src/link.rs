//! Viewer URL composition.

use url::Url;

use crate::error::LinkError;

/// Build the shareable viewer URL: `<base>?date=<token>&type=<prefix>`.
///
/// Pure string composition over a parsed base URL; no reachability check.
/// Query parameter order is fixed (date first, then type).
pub fn compose_view_url(base: &str, date_token: &str, prefix: &str) -> Result<Url, LinkError> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut()
        .append_pair("date", date_token)
        .append_pair("type", prefix);
    Ok(url)
}
