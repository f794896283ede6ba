//! Assembles an `HttpRequest` from method, endpoint, base location,
//! parameters and headers.

use url::Url;

use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpMethod, HttpRequest, RequestHeader};
use crate::params::QueryItems;

/// Build the request descriptor for one API call.
///
/// The base location is validated before anything else is looked at: it must
/// be an absolute `http`/`https` URL able to carry a path. The endpoint's
/// segments are appended to the base URL's own path, each percent-encoded on
/// its own, so `/`, `?` and `#` inside an identifier stay inside it. Headers are deduplicated by name
/// (ASCII case-insensitive); a later header replaces the value of an earlier
/// one and keeps its position.
pub fn build_request(
    method: HttpMethod,
    endpoint: &Endpoint,
    base_url: &str,
    parameters: Option<&dyn QueryItems>,
    headers: &[RequestHeader],
) -> ApiResult<HttpRequest> {
    let mut url = parse_base(base_url)?;

    append_segments(&mut url, endpoint)?;
    url.set_query(None);
    url.set_fragment(None);

    let items = parameters.map(|p| p.query_items()).unwrap_or_default();
    if !items.is_empty() {
        let mut query = url.query_pairs_mut();
        for item in &items {
            query.append_pair(item.name, &item.value);
        }
    }

    let mut merged: Vec<(String, String)> = Vec::with_capacity(headers.len());
    for header in headers {
        match merged.iter_mut().find(|(name, _)| name.eq_ignore_ascii_case(&header.name)) {
            Some(existing) => existing.1 = header.value.clone(),
            None => merged.push((header.name.clone(), header.value.clone())),
        }
    }

    tracing::debug!(%method, url = %url, query_items = items.len(), "built request");

    Ok(HttpRequest {
        method,
        url: url.into(),
        headers: merged,
    })
}

fn append_segments(url: &mut Url, endpoint: &Endpoint) -> ApiResult<()> {
    let mut path = url
        .path_segments_mut()
        .map_err(|()| ApiError::invalid_url(endpoint.path(), "base location cannot carry a path"))?;
    path.pop_if_empty();
    for segment in endpoint.segments() {
        // Empty and dot segments would collapse into a different resource.
        if matches!(segment, "" | "." | "..") {
            return Err(ApiError::invalid_url(
                endpoint.path(),
                format!("`{segment}` is not a usable path argument"),
            ));
        }
        path.push(segment);
    }
    Ok(())
}

fn parse_base(base_url: &str) -> ApiResult<Url> {
    let url = Url::parse(base_url).map_err(|e| ApiError::invalid_url(base_url, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::invalid_url(
            base_url,
            format!("unsupported scheme `{}`", url.scheme()),
        ));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(ApiError::invalid_url(base_url, "base location has no host"));
    }
    Ok(url)
}
