use crate::record::{CreatePostRecord, PostRecord};
use postboard_common::model::post::{CreatePost, Post};
use reqwest::{Client, Response, StatusCode, Url};
use std::future::Future;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request to the posts API failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Posts API replied with unexpected status {0}")]
    Status(StatusCode),
    #[error("Posts API response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The two round trips the page makes against the posts collection.
pub trait PostsApi: Send + Sync {
    fn list_posts(&self) -> impl Future<Output = Result<Vec<Post>>> + Send;

    /// The returned post is what the API echoed back, including its assigned id.
    fn create_post(&self, post: &CreatePost) -> impl Future<Output = Result<Post>> + Send;
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    posts_url: Url,
}

impl ApiClient {
    #[must_use]
    pub fn new(posts_url: Url) -> Self {
        Self::with_client(Client::new(), posts_url)
    }

    #[must_use]
    pub fn with_client(http: Client, posts_url: Url) -> Self {
        Self { http, posts_url }
    }
}

impl PostsApi for ApiClient {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        debug!(url = %self.posts_url, "Fetching posts");

        let response = self.http.get(self.posts_url.clone()).send().await?;
        let response = accept_status(response, &[StatusCode::OK])?;
        let bytes = response.bytes().await?;
        let records: Vec<PostRecord> = serde_json::from_slice(&bytes)?;

        debug!(count = records.len(), "Fetched posts");
        Ok(records.into_iter().map(Post::from).collect())
    }

    async fn create_post(&self, post: &CreatePost) -> Result<Post> {
        debug!(url = %self.posts_url, author = %post.author(), "Creating post");

        let response = self
            .http
            .post(self.posts_url.clone())
            .json(&CreatePostRecord::from(post))
            .send()
            .await?;
        let response = accept_status(response, &[StatusCode::OK, StatusCode::CREATED])?;
        let bytes = response.bytes().await?;
        let record: PostRecord = serde_json::from_slice(&bytes)?;

        debug!(id = record.id, "Created post");
        Ok(record.into())
    }
}

fn accept_status(response: Response, accepted: &[StatusCode]) -> Result<Response> {
    let status = response.status();
    debug!(%status, url = %response.url(), "Posts API responded");

    if accepted.contains(&status) {
        Ok(response)
    } else {
        Err(ApiError::Status(status))
    }
}
