//! LeetCode submission source (feature `leetcode`)
//!
//! Pages through `/api/submissions/` with the user's session cookie and
//! resolves difficulties through a single `/api/problems/all/` lookup.
//! The source owns a current-thread runtime and blocks on each request, so
//! the sync engine stays synchronous.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue, REFERER, USER_AGENT};
use serde::Deserialize;

use crate::config::{ConfigError, SourceConfig};
use crate::core::models::{RawSubmission, SourceOrder};
use crate::core::ports::SubmissionSource;

/// Environment variable holding the `LEETCODE_SESSION` cookie
pub const SESSION_ENV: &str = "LEETCODE_SESSION";

/// Environment variable holding the `csrftoken` cookie
pub const CSRF_ENV: &str = "LEETCODE_CSRF_TOKEN";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Session credentials for the LeetCode API
#[derive(Clone)]
pub struct Credentials {
    session: String,
    csrf_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").finish_non_exhaustive()
    }
}

impl Credentials {
    /// Create credentials from cookie values
    #[must_use]
    pub fn new(session: &str, csrf_token: &str) -> Self {
        Self {
            session: session.to_string(),
            csrf_token: csrf_token.to_string(),
        }
    }

    /// Read credentials from [`SESSION_ENV`] and [`CSRF_ENV`]
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if either is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let read = |name: &'static str| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingCredential(name))
        };
        Ok(Self::new(&read(SESSION_ENV)?, &read(CSRF_ENV)?))
    }
}

#[derive(Deserialize)]
struct SubmissionPage {
    #[serde(default)]
    submissions_dump: Vec<RawSubmission>,
    #[serde(default)]
    has_next: bool,
    #[serde(default)]
    last_key: String,
}

#[derive(Deserialize)]
struct ProblemList {
    #[serde(default)]
    stat_status_pairs: Vec<ProblemEntry>,
}

#[derive(Deserialize)]
struct ProblemEntry {
    stat: ProblemStat,
    difficulty: ProblemDifficulty,
}

#[derive(Deserialize)]
struct ProblemStat {
    #[serde(rename = "question__title_slug")]
    title_slug: String,
}

#[derive(Deserialize)]
struct ProblemDifficulty {
    level: u8,
}

/// Map LeetCode's numeric difficulty level to its label
#[must_use]
pub const fn difficulty_label(level: u8) -> Option<&'static str> {
    match level {
        1 => Some("Easy"),
        2 => Some("Medium"),
        3 => Some("Hard"),
        _ => None,
    }
}

/// Submission source backed by the LeetCode web API
#[derive(Debug)]
pub struct LeetCodeSource {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    base_url: String,
    page_size: usize,
    page_delay: Duration,
    offset: usize,
    last_key: String,
    has_next: bool,
    difficulties: Option<HashMap<String, String>>,
}

impl LeetCodeSource {
    /// Build a source from the `[source]` config section
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or runtime cannot be built, or if
    /// a credential contains characters not allowed in a header.
    pub fn new(config: &SourceConfig, credentials: &Credentials) -> anyhow::Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!(
                "LEETCODE_SESSION={}; csrftoken={}",
                credentials.session, credentials.csrf_token
            ))
            .context("session cookie is not a valid header value")?,
        );
        headers.insert(
            HeaderName::from_static("x-csrftoken"),
            HeaderValue::from_str(&credentials.csrf_token)
                .context("CSRF token is not a valid header value")?,
        );
        headers.insert(REFERER, HeaderValue::from_str(&base_url).context("invalid base_url")?);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("leetsync/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("building HTTP client")?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("building async runtime")?;

        Ok(Self {
            client,
            runtime,
            base_url,
            page_size: config.page_size,
            page_delay: Duration::from_millis(config.page_delay_ms),
            offset: 0,
            last_key: String::new(),
            has_next: true,
            difficulties: None,
        })
    }

    fn fetch_difficulties(&self) -> anyhow::Result<HashMap<String, String>> {
        let url = format!("{}/api/problems/all/", self.base_url);
        let list: ProblemList = self.runtime.block_on(async {
            self.client.get(&url).send().await?.error_for_status()?.json().await
        })
        .with_context(|| format!("fetching {url}"))?;

        Ok(list
            .stat_status_pairs
            .into_iter()
            .filter_map(|p| {
                difficulty_label(p.difficulty.level)
                    .map(|label| (p.stat.title_slug, label.to_string()))
            })
            .collect())
    }

    fn fetch_page(&self) -> anyhow::Result<SubmissionPage> {
        let mut url = reqwest::Url::parse(&format!("{}/api/submissions/", self.base_url))
            .context("invalid base_url")?;
        url.query_pairs_mut()
            .append_pair("offset", &self.offset.to_string())
            .append_pair("limit", &self.page_size.to_string())
            .append_pair("lastkey", &self.last_key);

        self.runtime
            .block_on(async {
                self.client.get(url.clone()).send().await?.error_for_status()?.json().await
            })
            .with_context(|| format!("fetching submissions at offset {}", self.offset))
    }
}

impl SubmissionSource for LeetCodeSource {
    fn next_page(&mut self) -> anyhow::Result<Option<Vec<RawSubmission>>> {
        if !self.has_next {
            return Ok(None);
        }

        if self.difficulties.is_none() {
            let map = self.fetch_difficulties()?;
            log::debug!("Loaded difficulty for {} problem(s)", map.len());
            self.difficulties = Some(map);
        }

        if self.offset > 0 && !self.page_delay.is_zero() {
            self.runtime.block_on(tokio::time::sleep(self.page_delay));
        }

        let page = self.fetch_page()?;
        self.offset += self.page_size;
        self.has_next = page.has_next;
        self.last_key = page.last_key;

        let difficulties = self.difficulties.as_ref();
        let submissions = page
            .submissions_dump
            .into_iter()
            .map(|mut s| {
                if s.difficulty.is_none() {
                    s.difficulty = difficulties.and_then(|d| d.get(&s.slug)).cloned();
                }
                s
            })
            .collect();

        Ok(Some(submissions))
    }

    fn order(&self) -> SourceOrder {
        SourceOrder::NewestFirst
    }

    fn has_more(&self) -> bool {
        self.has_next
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
