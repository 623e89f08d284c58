//! Endpoint construction for the judge's API and submission pages
//!
//! All URLs the crawler requests are derived from a single base origin so the
//! whole pipeline can be pointed at a mock server in tests.

use crate::UrlResult;
use url::Url;

/// Builds the URLs requested during a crawl
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Creates endpoints rooted at `base_url` (e.g. `https://codeforces.com`)
    pub fn new(base_url: &str) -> UrlResult<Self> {
        let mut base = Url::parse(base_url)?;
        // Url::join replaces the last segment unless the path ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// The full submission history of `handle`, most recent first
    ///
    /// ```
    /// use cf_crawler::url::Endpoints;
    ///
    /// let endpoints = Endpoints::new("https://codeforces.com").unwrap();
    /// assert_eq!(
    ///     endpoints.submission_list_url("tourist").unwrap().as_str(),
    ///     "https://codeforces.com/api/user.status?handle=tourist&from=1"
    /// );
    /// ```
    pub fn submission_list_url(&self, handle: &str) -> UrlResult<Url> {
        let mut url = self.base.join("api/user.status")?;
        url.query_pairs_mut()
            .append_pair("handle", handle)
            .append_pair("from", "1");
        Ok(url)
    }

    /// The rendered page of a single submission
    pub fn submission_page_url(&self, contest_id: u64, submission_id: u64) -> UrlResult<Url> {
        self.base
            .join(&format!("contest/{}/submission/{}", contest_id, submission_id))
    }
}
