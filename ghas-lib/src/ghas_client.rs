use crate::config::ClientConfig;
use crate::error::GhasError;
use crate::filter::RepositoryFilter;
use crate::headers::github_headers;
use crate::logging_middleware::LoggingMiddleware;
use crate::object_model::{Repository, RepositoryPatch, SecurityAndAnalysis};
use crate::query::{ListReposQuery, RepositoryType};
use crate::rate_limit::is_rate_limited;
use crate::result::GhasResult;
use anyhow::anyhow;
use log::{debug, warn};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, IntoUrl, StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingStop {
    Exhausted,
    RateLimited,
    Status(u16),
    RequestFailed,
}

#[derive(Debug)]
pub struct RepositoryListing {
    pub repositories: Vec<Repository>,
    pub pages_fetched: u32,
    pub stop: ListingStop,
}

pub struct GhasClient {
    url: Url,
    token: String,
    headers: HeaderMap,
    config: ClientConfig,
    client: ClientWithMiddleware,
}

impl GhasClient {
    pub fn new<U>(url: U, token: &str) -> GhasResult<Self>
    where
        U: IntoUrl,
    {
        Self::with_config(url, token, ClientConfig::default())
    }

    pub fn with_config<U>(url: U, token: &str, config: ClientConfig) -> GhasResult<Self>
    where
        U: IntoUrl,
    {
        let url = url
            .into_url()
            .map_err(|e| GhasError::Other(anyhow!(e)))?;

        let headers = github_headers(token, &config.user_agent)?;
        let client = ClientBuilder::new(Client::new())
            .with(LoggingMiddleware::new(config.log_level))
            .build();

        Ok(Self {
            url,
            token: String::from(token),
            headers,
            config,
            client,
        })
    }

    /// Lists the repositories of `organization` matching `filter`.
    ///
    /// Pagination ends silently on an empty page, a rate limit, a non-200
    /// status or a transport failure; use
    /// [`list_org_repositories_detailed`](Self::list_org_repositories_detailed)
    /// to find out which.
    pub async fn list_org_repositories(
        &self,
        repo_type: RepositoryType,
        organization: &str,
        filter: &RepositoryFilter,
    ) -> GhasResult<Vec<Repository>> {
        Ok(self
            .list_org_repositories_detailed(repo_type, organization, filter)
            .await?
            .repositories)
    }

    pub async fn list_org_repositories_detailed(
        &self,
        repo_type: RepositoryType,
        organization: &str,
        filter: &RepositoryFilter,
    ) -> GhasResult<RepositoryListing> {
        let url = self.endpoint(&["orgs", organization, "repos"])?;
        let mut repositories = Vec::new();
        let mut page = 1;

        let stop = loop {
            let result = self
                .client
                .get(url.clone())
                .headers(self.headers.clone())
                .query(&ListReposQuery::new(repo_type, page))
                .send()
                .await;

            let response = match result {
                Ok(response) => response,
                Err(e) => {
                    warn!("listing {organization} repositories failed on page {page}: {e}");
                    break ListingStop::RequestFailed;
                }
            };

            if is_rate_limited(response.status(), response.headers()) {
                warn!("rate limited while listing {organization} repositories on page {page}");
                break ListingStop::RateLimited;
            }

            if response.status() != StatusCode::OK {
                debug!(
                    "listing {organization} repositories stopped on page {page}: {}",
                    response.status()
                );
                break ListingStop::Status(response.status().as_u16());
            }

            let items = response
                .json::<Vec<Value>>()
                .await
                .map_err(|e| GhasError::Other(anyhow!(e)))?;
            if items.is_empty() {
                break ListingStop::Exhausted;
            }

            for item in &items {
                let repository = self.load_repository(item).await?;
                if filter.matches(&repository) {
                    repositories.push(repository);
                }
            }

            page += 1;
        };

        Ok(RepositoryListing {
            repositories,
            pages_fetched: page,
            stop,
        })
    }

    pub async fn get_repository(
        &self,
        organization: &str,
        repository: &str,
    ) -> GhasResult<Option<Repository>> {
        let url = self.endpoint(&["repos", organization, repository])?;
        let response = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|e| GhasError::Other(anyhow!(e)))?;

        if response.status() != StatusCode::OK {
            debug!(
                "repository {organization}/{repository} unavailable: {}",
                response.status()
            );
            return Ok(None);
        }

        let raw = response
            .json::<Value>()
            .await
            .map_err(|e| GhasError::Other(anyhow!(e)))?;
        Ok(Some(self.load_repository(&raw).await?))
    }

    /// Maps a raw repository object and, when this client carries a token,
    /// probes whether Dependabot alerts are enabled for it.
    pub async fn load_repository(&self, raw: &Value) -> GhasResult<Repository> {
        let mut repository = Repository::from_json(raw)?;
        if self.config.probe_dependabot_alerts && !self.token.is_empty() {
            let enabled = self
                .check_dependabot_alerts_enabled(repository.path_owner(), &repository.name)
                .await;
            repository.dependabot_alerts = enabled;
        }
        Ok(repository)
    }

    pub async fn check_dependabot_alerts_enabled(
        &self,
        organization: &str,
        repository: &str,
    ) -> bool {
        let Ok(url) = self.endpoint(&["repos", organization, repository, "vulnerability-alerts"])
        else {
            return false;
        };
        self.send_expecting(self.client.get(url), StatusCode::NO_CONTENT)
            .await
    }

    pub async fn enable_secret_scanner(&self, organization: &str, repository: &str) -> bool {
        self.patch_security_and_analysis(
            organization,
            repository,
            &SecurityAndAnalysis::secret_scanning(),
        )
        .await
    }

    pub async fn enable_secret_scanner_push_protection(
        &self,
        organization: &str,
        repository: &str,
    ) -> bool {
        self.patch_security_and_analysis(
            organization,
            repository,
            &SecurityAndAnalysis::secret_scanning_push_protection(),
        )
        .await
    }

    pub async fn enable_dependabot(&self, organization: &str, repository: &str) -> bool {
        let Ok(url) = self.endpoint(&["repos", organization, repository, "vulnerability-alerts"])
        else {
            return false;
        };
        self.send_expecting(self.client.put(url), StatusCode::NO_CONTENT)
            .await
    }

    async fn patch_security_and_analysis(
        &self,
        organization: &str,
        repository: &str,
        settings: &SecurityAndAnalysis,
    ) -> bool {
        let Ok(url) = self.endpoint(&["repos", organization, repository]) else {
            return false;
        };
        let body = match serde_json::to_vec(&RepositoryPatch {
            security_and_analysis: settings,
        }) {
            Ok(body) => body,
            Err(e) => {
                warn!("cannot encode settings for {organization}/{repository}: {e}");
                return false;
            }
        };
        self.send_expecting(
            self.client
                .patch(url)
                .header(CONTENT_TYPE, "application/json")
                .body(body),
            StatusCode::OK,
        )
        .await
    }

    async fn send_expecting(&self, request: RequestBuilder, expected: StatusCode) -> bool {
        match request.headers(self.headers.clone()).send().await {
            Ok(response) if response.status() == expected => true,
            Ok(response) => {
                debug!(
                    "{} returned {}, expected {}",
                    response.url().path(),
                    response.status(),
                    expected
                );
                false
            }
            Err(e) => {
                warn!("request failed: {e}");
                false
            }
        }
    }

    /// Appends each name as a single percent-encoded path segment.
    fn endpoint(&self, segments: &[&str]) -> GhasResult<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(GhasError::InvalidName(String::from(*bad)));
        }

        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| GhasError::Other(anyhow!("{} cannot be a base URL", self.url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
