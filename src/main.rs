mod args;
use crate::args::{Args, Commands, ImportArgs, UploadArgs};

use clap::Parser;
use gifs::api::{ApiClient, ApiClientError, ImportRequest, MediaClient, UploadRequest};
use std::{fs::File, io::BufReader, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiClientError),

    #[error("Couldn't open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("Couldn't work out a file name for {0}, pass one with --filename")]
    NoFilename(String),
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let mut builder = ApiClient::builder(args.api_key).endpoint(args.url.as_str());
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    match &args.command {
        Commands::Import(import_args) => {
            import(&client, import_args)?;
            println!("Imported {}", import_args.source);
        }
        Commands::Upload(upload_args) => {
            let filename = upload(&client, upload_args)?;
            println!("Uploaded {filename}");
        }
    }
    Ok(())
}

fn import(client: &dyn MediaClient, args: &ImportArgs) -> Result<(), CliError> {
    let mut request = ImportRequest::new(args.source.clone())
        .with_tags(args.metadata.tags())
        .with_nsfw(args.metadata.nsfw);
    if let Some(title) = &args.metadata.title {
        request = request.with_title(title.clone());
    }
    if let Some(attribution) = args.metadata.attribution() {
        request = request.with_attribution(attribution);
    }

    client.import(&request).map_err(CliError::from)
}

fn upload(client: &dyn MediaClient, args: &UploadArgs) -> Result<String, CliError> {
    let path = args.path.display().to_string();
    let filename = match &args.filename {
        Some(name) => name.clone(),
        None => args
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| CliError::NoFilename(path.clone()))?,
    };

    let mut request = UploadRequest::new(filename.clone())
        .with_tags(args.metadata.tags())
        .with_nsfw(args.metadata.nsfw);
    if let Some(title) = &args.metadata.title {
        request = request.with_title(title.clone());
    }
    if let Some(attribution) = args.metadata.attribution() {
        request = request.with_attribution(attribution);
    }

    let file = File::open(&args.path).map_err(|source| CliError::Open {
        path: path.clone(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    client.upload(&request, &mut reader)?;
    Ok(filename)
}
