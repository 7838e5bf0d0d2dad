//! GitHub adapter

use async_trait::async_trait;
use prflow_config::Config;
use prflow_ghapi_interface::{
    review::GhReviewApi,
    types::{GhPullRequest, GhPullRequestState},
    ApiError, ApiService, Result,
};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

const PAGE_SIZE: usize = 100;

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client> {
        get_authenticated_client_builder(&self.config)?
            .build()
            .map_err(|e| GitHubError::from(e).into())
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    /// Follow `page` parameters until a short page is returned.
    async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: String,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, GitHubError> {
        let client = get_authenticated_client_builder(&self.config)?.build()?;
        let url = self.build_url(path);
        let per_page = PAGE_SIZE.to_string();
        let mut output = Vec::new();
        let mut page = 1u32;

        loop {
            let page_str = page.to_string();
            let items: Vec<T> = client
                .get(&url)
                .query(query)
                .query(&[("per_page", per_page.as_str()), ("page", page_str.as_str())])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            let count = items.len();
            output.extend(items);
            if count < PAGE_SIZE {
                break;
            }

            page += 1;
        }

        Ok(output)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn pulls_list(
        &self,
        owner: &str,
        name: &str,
        state: GhPullRequestState,
    ) -> Result<Vec<GhPullRequest>> {
        self.get_all_pages(
            format!("/repos/{owner}/{name}/pulls"),
            &[("state", state.as_str())],
        )
        .await
        .map_err(ApiError::from)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_reviews_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhReviewApi>> {
        self.get_all_pages(
            format!("/repos/{owner}/{name}/pulls/{issue_number}/reviews"),
            &[],
        )
        .await
        .map_err(ApiError::from)
    }

    #[tracing::instrument(skip(self))]
    async fn pull_reviewer_requests_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        reviewers: &[String],
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            reviewers: &'a [String],
        }

        self.get_client()?
            .post(&self.build_url(format!(
                "/repos/{owner}/{name}/pulls/{issue_number}/requested_reviewers"
            )))
            .json(&Request { reviewers })
            .send()
            .await
            .map_err(GitHubError::from)?
            .error_for_status()
            .map_err(GitHubError::from)?;

        Ok(())
    }

    #[tracing::instrument(skip(self), ret)]
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64> {
        #[derive(Serialize)]
        struct Request<'a> {
            body: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            id: u64,
        }

        let response: Response = self
            .get_client()?
            .post(&self.build_url(format!(
                "/repos/{owner}/{name}/issues/{issue_number}/comments"
            )))
            .json(&Request { body })
            .send()
            .await
            .map_err(GitHubError::from)?
            .error_for_status()
            .map_err(GitHubError::from)?
            .json()
            .await
            .map_err(GitHubError::from)?;

        Ok(response.id)
    }
}
