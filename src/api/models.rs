use serde::Serialize;

/// Credits for the original source of a piece of media.
///
/// Empty strings mean "not set".
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AttributionDetails {
    pub site: String,
    pub user: String,
    pub url: String,
}

impl AttributionDetails {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.site.is_empty() && self.user.is_empty() && self.url.is_empty()
    }
}

/// Registers media hosted elsewhere, sent as a JSON document.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ImportRequest {
    #[serde(rename = "source")]
    pub source_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub nsfw: bool,
    pub attribution: Option<AttributionDetails>,
}

impl ImportRequest {
    /// The source URL is not checked here, the service rejects bad ones.
    #[must_use]
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    #[must_use]
    pub fn with_attribution(mut self, attribution: AttributionDetails) -> Self {
        self.attribution = Some(attribution);
        self
    }
}

/// Metadata for a file upload. The content itself is handed to
/// [`MediaClient::upload`](super::MediaClient::upload) separately.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UploadRequest {
    pub filename: String,
    pub title: String,
    pub tags: Vec<String>,
    pub nsfw: bool,
    pub attribution: Option<AttributionDetails>,
}

impl UploadRequest {
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    #[must_use]
    pub fn with_attribution(mut self, attribution: AttributionDetails) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// Text fields of the multipart form, in the order they are sent.
    ///
    /// Unset values are left out entirely; in particular `nsfw` is only
    /// present when it is `true`.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();

        if !self.title.is_empty() {
            fields.push(("title", self.title.clone()));
        }
        if self.nsfw {
            fields.push(("nsfw", "true".to_owned()));
        }
        if !self.tags.is_empty() {
            fields.push(("tags", join_tags(&self.tags)));
        }
        if let Some(attribution) = &self.attribution {
            if !attribution.site.is_empty() {
                fields.push(("attribution_site", attribution.site.clone()));
            }
            // The service spells this one differently.
            if !attribution.url.is_empty() {
                fields.push(("attribute_url", attribution.url.clone()));
            }
            if !attribution.user.is_empty() {
                fields.push(("attribution_user", attribution.user.clone()));
            }
        }

        fields
    }
}

/// Joins tags into the single `tags` form value, e.g. `funny, cats`.
pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}
