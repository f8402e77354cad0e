use std::{fmt, io::Read, time::Duration};

use reqwest::{
    blocking::{self, multipart, Client, RequestBuilder},
    header::CONTENT_TYPE,
    StatusCode,
};
use url::Url;

use crate::errors::RequestFailure;

use super::errors::ApiClientError;
use super::models::{ImportRequest, UploadRequest};

/// Production endpoint used by [`ApiClient::new`].
pub const DEFAULT_API_ENDPOINT: &str = "https://api.gifs.com";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "Gifs-API-Key";

/// The two ways of adding content to gifs.
pub trait MediaClient {
    /// # Errors
    ///
    /// Returns `Err` if the request can't be built, on transport failure,
    /// or if the service answers with anything but `200 OK`.
    fn import(&self, request: &ImportRequest) -> Result<(), ApiClientError>;

    /// `content` is read to the end before anything is sent. Closing it
    /// stays with the caller.
    ///
    /// # Errors
    ///
    /// Same as [`MediaClient::import`], plus failures reading `content`.
    fn upload(&self, request: &UploadRequest, content: &mut dyn Read)
        -> Result<(), ApiClientError>;
}

#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    api_key: String,
    client: Client,
}

// Keeps the API key out of logs.
impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client for the production API.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client can't be initialised.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiClientError> {
        Self::builder(api_key).build()
    }

    /// Client for an arbitrary endpoint, e.g. a mock server.
    ///
    /// # Errors
    ///
    /// Fails if `base` doesn't parse or cannot be a base. We rely on that
    /// invariant when building request URLs.
    pub fn with_endpoint(
        base: impl AsRef<str>,
        api_key: impl Into<String>,
    ) -> Result<Self, ApiClientError> {
        Self::builder(api_key).endpoint(base).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder {
            endpoint: DEFAULT_API_ENDPOINT.to_owned(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn import_url(&self) -> Result<Url, ApiClientError> {
        self.endpoint_url(&["media", "import"])
    }

    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn upload_url(&self) -> Result<Url, ApiClientError> {
        self.endpoint_url(&["media", "upload"])
    }

    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ApiClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiClientError::CannotBeBase(self.base.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends the request and reads the whole response.
    ///
    /// Anything but `200 OK` becomes a [`RequestFailure`]; the body only
    /// ends up in the log.
    fn send(&self, url: Url, request: RequestBuilder) -> Result<(), ApiClientError> {
        let response = request
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .map_err(ApiClientError::from)?;

        let status = response.status();
        let body = response.text()?;

        if status == StatusCode::OK {
            log::debug!("{url} accepted the request");
            return Ok(());
        }

        log::warn!("{url} returned {status}, response body: {body}");
        Err(ApiClientError::from(RequestFailure::new(url, status)))
    }
}

impl MediaClient for ApiClient {
    fn import(&self, request: &ImportRequest) -> Result<(), ApiClientError> {
        let body = serde_json::to_vec(request)?;
        let url = self.import_url()?;

        log::debug!("Importing {} via {url}", request.source_url);
        let builder = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        self.send(url, builder)
    }

    fn upload(
        &self,
        request: &UploadRequest,
        content: &mut dyn Read,
    ) -> Result<(), ApiClientError> {
        let mut form = multipart::Form::new().percent_encode_noop();
        for (name, value) in request.form_fields() {
            form = form.text(name, value);
        }

        let mut file = Vec::new();
        content.read_to_end(&mut file)?;
        let size = file.len();

        let part = multipart::Part::bytes(file)
            .file_name(request.filename.clone())
            .mime_str("application/octet-stream")?;
        form = form.part("file", part);

        let url = self.upload_url()?;

        log::debug!("Uploading {} ({size} bytes) via {url}", request.filename);
        let builder = self.client.post(url.clone()).multipart(form);

        self.send(url, builder)
    }
}

pub struct ApiClientBuilder {
    endpoint: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    #[must_use]
    pub fn endpoint(mut self, base: impl AsRef<str>) -> Self {
        self.endpoint = base.as_ref().to_owned();
        self
    }

    /// Upper bound for a whole call, connect to last response byte.
    /// Without it the transport defaults apply.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// # Errors
    ///
    /// Fails if the endpoint is not a valid base URL or the HTTP client
    /// can't be initialised.
    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let base = Url::parse(&self.endpoint)?;
        // Test here so that we are sure path_segments_mut succeeds
        if base.cannot_be_a_base() {
            return Err(ApiClientError::CannotBeBase(base));
        }

        let mut client = blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }

        Ok(ApiClient {
            base,
            api_key: self.api_key,
            client: client.build()?,
        })
    }
}
