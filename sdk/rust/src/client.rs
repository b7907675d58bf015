use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

/// A project as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProjectBody<'a> {
    title: &'a str,
    owner: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct Greeting {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with its `{"error": ...}` body.
    #[error("API returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

pub struct ProjectsClient {
    client: Client,
    base_url: String,
}

impl ProjectsClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn hello(&self) -> Result<String, ClientError> {
        let resp = self.client.get(format!("{}/", self.base_url)).send().await?;
        let greeting: Greeting = check(resp).await?.json().await?;
        Ok(greeting.message)
    }

    pub async fn list(&self, title: Option<&str>) -> Result<Vec<Project>, ClientError> {
        let mut req = self.client.get(format!("{}/projects", self.base_url));
        if let Some(title) = title {
            req = req.query(&[("title", title)]);
        }
        Ok(check(req.send().await?).await?.json().await?)
    }

    pub async fn create(&self, title: &str, owner: &str) -> Result<Project, ClientError> {
        let resp = self
            .client
            .post(format!("{}/projects", self.base_url))
            .json(&ProjectBody { title, owner })
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn update(&self, id: &str, title: &str, owner: &str) -> Result<Project, ClientError> {
        let resp = self
            .client
            .put(format!("{}/projects/{}", self.base_url, id))
            .json(&ProjectBody { title, owner })
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let resp = self
            .client
            .delete(format!("{}/projects/{}", self.base_url, id))
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }
}

/// Turn non-success responses into `ClientError::Api`.
async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await?;
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    Err(ClientError::Api { status, message })
}
