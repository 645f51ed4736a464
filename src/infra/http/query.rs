use url::Url;

use crate::domain::entities::grid::FetchOptions;
use crate::domain::entities::user::UserId;

/// `<base>?page=..&size=..[&<filter>=<value>]*[&sort=..&direction=..]`
///
/// Any query already present on `base` is replaced.
pub fn build_fetch_url(base: &Url, page: u64, size: u64, options: &FetchOptions) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("page", &page.to_string())
            .append_pair("size", &size.to_string());
        if let Some(filter) = &options.filter {
            for (column, value) in filter {
                query.append_pair(column.as_str(), value);
            }
        }
        if let Some(sort) = options.sort {
            query
                .append_pair("sort", sort.column.as_str())
                .append_pair("direction", sort.direction.as_str());
        }
    }
    url
}

/// `<base>/<id>`; the id is percent-encoded as a single path segment.
pub fn build_update_url(base: &Url, id: &UserId) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(&id.to_string());
    }
    url
}
