//! Paginated repository listing
//!
//! GitHub pages listings and advertises the next page in the `Link`
//! response header:
//!
//! ```text
//! <https://api.github.com/user/repos?page=2>; rel="next", <https://api.github.com/user/repos?page=5>; rel="last"
//! ```
//!
//! [`RepoPages`] follows those links lazily, one request per page.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use repodeck_core::dto::repository::RawRepository;
use reqwest::Method;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::{GithubClient, decode};

/// Extract the URL tagged `rel="next"` from a `Link` header value
///
/// Relation names and parameter names are matched case-insensitively and
/// quotes around the relation are optional. Returns `None` when there is no
/// next page.
pub fn next_page_url(link: &str) -> Option<String> {
    link_entries(link).find_map(|entry| {
        let mut parts = entry.split(';');
        let url = parts
            .next()?
            .trim()
            .strip_prefix('<')?
            .strip_suffix('>')?;

        let is_next = parts.any(|param| {
            let Some((key, value)) = param.split_once('=') else {
                return false;
            };
            key.trim().eq_ignore_ascii_case("rel")
                && value
                    .trim()
                    .trim_matches('"')
                    .split_whitespace()
                    .any(|rel| rel.eq_ignore_ascii_case("next"))
        });

        is_next.then(|| url.to_string())
    })
}

/// Split a `Link` header on the commas that separate entries
///
/// Commas inside `<...>` belong to the target URL and do not split.
fn link_entries(link: &str) -> impl Iterator<Item = &str> {
    let mut inside_target = false;
    link.split(move |c| match c {
        '<' => {
            inside_target = true;
            false
        }
        '>' => {
            inside_target = false;
            false
        }
        ',' => !inside_target,
        _ => false,
    })
}

/// Lazy iterator over every repository of a listing
///
/// Each call to `next` either pops a buffered record or, once the current
/// page is drained, fetches the next page. A failed page yields a single
/// error and ends the iteration; nothing is requested after that. The
/// iterator cannot be restarted.
#[derive(Debug)]
pub struct RepoPages {
    client: GithubClient,
    next_url: Option<String>,
    buffer: VecDeque<RawRepository>,
    pages_fetched: usize,
}

impl RepoPages {
    pub(crate) fn new(client: GithubClient, first_url: String) -> Self {
        Self {
            client,
            next_url: Some(first_url),
            buffer: VecDeque::new(),
            pages_fetched: 0,
        }
    }

    /// Number of pages requested so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    fn fetch(&mut self, url: String) -> Result<()> {
        let response = self.client.send::<()>(Method::GET, url.clone(), None)?;
        self.pages_fetched += 1;

        if response.status != 200 {
            warn!(url = %url, status = response.status, "listing page failed");
            return Err(ClientError::Pagination {
                url,
                status: response.status,
                body: response.body,
            });
        }

        let page: Vec<RawRepository> = decode(&response)?;
        self.next_url = response.header("link").and_then(next_page_url);
        debug!(
            page = self.pages_fetched,
            records = page.len(),
            has_next = self.next_url.is_some(),
            "fetched listing page"
        );

        self.buffer.extend(page);
        Ok(())
    }
}

impl Iterator for RepoPages {
    type Item = Result<RawRepository>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(repo) = self.buffer.pop_front() {
                return Some(Ok(repo));
            }

            // `take` leaves no continuation behind, so an error below ends the listing
            let url = self.next_url.take()?;
            if let Err(err) = self.fetch(url) {
                return Some(Err(err));
            }
        }
    }
}

impl FusedIterator for RepoPages {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_url_among_several_relations() {
        let link = "<https://api.github.com/user/repos?page=1>; rel=\"prev\", \
                    <https://api.github.com/user/repos?page=3>; rel=\"next\", \
                    <https://api.github.com/user/repos?page=5>; rel=\"last\"";
        assert_eq!(
            next_page_url(link).as_deref(),
            Some("https://api.github.com/user/repos?page=3")
        );
    }

    #[test]
    fn test_next_url_is_case_insensitive() {
        let link = "<https://api.github.com/orgs/acme/repos?page=2>; REL=\"Next\"";
        assert_eq!(
            next_page_url(link).as_deref(),
            Some("https://api.github.com/orgs/acme/repos?page=2")
        );
    }

    #[test]
    fn test_next_url_unquoted_and_multi_valued() {
        assert_eq!(
            next_page_url("<https://x/2>; rel=next").as_deref(),
            Some("https://x/2")
        );
        assert_eq!(
            next_page_url("<https://x/2>; rel=\"next last\"").as_deref(),
            Some("https://x/2")
        );
    }

    #[test]
    fn test_last_page_has_no_next() {
        let link = "<https://api.github.com/user/repos?page=1>; rel=\"prev\", \
                    <https://api.github.com/user/repos?page=1>; rel=\"first\"";
        assert_eq!(next_page_url(link), None);
        assert_eq!(next_page_url(""), None);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let link = "https://x/1; rel=\"next\", <https://x/2>; rel=\"next\"";
        assert_eq!(next_page_url(link).as_deref(), Some("https://x/2"));
        assert_eq!(next_page_url("<https://x/3>; nofollow"), None);
    }

    #[test]
    fn test_comma_inside_target_url() {
        let link = "<https://x/repos?page=1&sort=a,b>; rel=\"prev\", \
                    <https://x/repos?page=3&sort=a,b>; rel=\"next\"";
        assert_eq!(
            next_page_url(link).as_deref(),
            Some("https://x/repos?page=3&sort=a,b")
        );
    }

    #[test]
    fn test_nextish_relations_do_not_match() {
        assert_eq!(next_page_url("<https://x/2>; rel=\"nextpage\""), None);
    }
}
