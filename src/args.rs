use std::path::PathBuf;

use gifs::api::{AttributionDetails, DEFAULT_API_ENDPOINT};
use url::Url;

#[derive(clap::Parser)]
#[command(name = "gifs")]
#[command(version)]
#[command(about = "Add content to gifs.com")]
#[command(long_about = "
A command-line tool for adding media to gifs.com, either by importing
content hosted elsewhere or by uploading a local file.

Examples:
  # Import a GIF by URL
  gifs --api-key KEY import --source https://example.com/cat.gif \\
    --title 'Cat' --tag cats --tag funny

  # Upload a local file
  gifs --api-key KEY upload ./dog.mp4 --nsfw

  # Talk to a different endpoint
  gifs --url http://localhost:8080 --api-key KEY upload ./dog.mp4
")]
pub struct Args {
    /// API endpoint URL
    #[arg(
        long,
        env = "GIFS_API_URL",
        value_hint = clap::ValueHint::Url,
        value_parser = Url::parse,
        default_value = DEFAULT_API_ENDPOINT
    )]
    pub url: Url,

    /// API key sent in the Gifs-API-Key header
    #[arg(long, env = "GIFS_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Give up on a request after this many seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Import media hosted at a URL
    Import(ImportArgs),

    /// Upload a local file
    ///
    /// The file is read fully into memory before it is sent.
    Upload(UploadArgs),
}

#[derive(clap::Args)]
pub struct ImportArgs {
    /// URL of the media to import
    #[arg(long, value_name = "URL", value_parser = non_empty_value_parser)]
    pub source: String,

    #[command(flatten)]
    pub metadata: MetadataArgs,
}

#[derive(clap::Args)]
pub struct UploadArgs {
    /// File to upload
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub path: PathBuf,

    /// File name advertised to the service (default: name of PATH)
    #[arg(long, value_name = "NAME", value_parser = non_empty_value_parser)]
    pub filename: Option<String>,

    #[command(flatten)]
    pub metadata: MetadataArgs,
}

#[derive(clap::Args)]
pub struct MetadataArgs {
    /// Title of the media
    #[arg(long)]
    pub title: Option<String>,

    /// Tag to attach, repeat or separate with commas
    #[arg(long = "tag", value_name = "TAG", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Mark the media as not safe for work
    #[arg(long, default_value_t = false)]
    pub nsfw: bool,

    /// Site the media originally came from
    #[arg(long, value_name = "SITE")]
    pub attribution_site: Option<String>,

    /// User who created the original media
    #[arg(long, value_name = "USER")]
    pub attribution_user: Option<String>,

    /// URL of the original media
    #[arg(long, value_name = "URL")]
    pub attribution_url: Option<String>,
}

impl MetadataArgs {
    pub fn tags(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn attribution(&self) -> Option<AttributionDetails> {
        let attribution = AttributionDetails::new()
            .with_site(self.attribution_site.clone().unwrap_or_default())
            .with_user(self.attribution_user.clone().unwrap_or_default())
            .with_url(self.attribution_url.clone().unwrap_or_default());

        if attribution.is_empty() {
            None
        } else {
            Some(attribution)
        }
    }
}

fn non_empty_value_parser(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("Value cannot be empty".to_string());
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn import_collects_metadata() {
        let args = Args::try_parse_from([
            "gifs",
            "--api-key",
            "key",
            "import",
            "--source",
            "https://example.com/a.gif",
            "--tag",
            "a,b",
            "--tag",
            "c",
            "--nsfw",
            "--attribution-site",
            "example.com",
        ])
        .unwrap();

        assert_eq!(args.url.as_str(), "https://api.gifs.com/");
        match args.command {
            Commands::Import(import) => {
                assert_eq!(import.source, "https://example.com/a.gif");
                assert_eq!(import.metadata.tags(), vec!["a", "b", "c"]);
                assert!(import.metadata.nsfw);
                let attribution = import.metadata.attribution().unwrap();
                assert_eq!(attribution.site, "example.com");
                assert!(attribution.user.is_empty());
            }
            Commands::Upload(_) => panic!("expected import"),
        }
    }

    #[test]
    fn upload_without_attribution() {
        let args = Args::try_parse_from([
            "gifs",
            "--api-key",
            "key",
            "--url",
            "http://localhost:8080",
            "upload",
            "./clip.gif",
        ])
        .unwrap();

        match args.command {
            Commands::Upload(upload) => {
                assert_eq!(upload.path, PathBuf::from("./clip.gif"));
                assert!(upload.filename.is_none());
                assert!(upload.metadata.attribution().is_none());
                assert!(!upload.metadata.nsfw);
            }
            Commands::Import(_) => panic!("expected upload"),
        }
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = Args::try_parse_from([
            "gifs", "--api-key", "key", "--timeout", "0", "upload", "./clip.gif",
        ]);
        assert!(result.is_err());

        let args = Args::try_parse_from([
            "gifs", "--api-key", "key", "--timeout", "30", "upload", "./clip.gif",
        ])
        .unwrap();
        assert_eq!(args.timeout, Some(30));
    }

    #[test]
    fn empty_source_is_rejected() {
        let result =
            Args::try_parse_from(["gifs", "--api-key", "key", "import", "--source", " "]);
        assert!(result.is_err());
    }
}
