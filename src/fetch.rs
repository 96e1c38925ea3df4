//! Download the dataset files and unpack them.

use std::path::{Component, Path, PathBuf};

use log::debug;
use reqwest::blocking::Client;

use crate::{
    errors::YomahaErr,
    source::{DatasetSource, RemoteResource},
};

mod decompress;

pub use self::decompress::decompress_file;

/// Downloads a dataset into a local directory.
#[derive(Debug)]
pub struct Fetcher {
    client: Client,
    source: DatasetSource,
}

/// Download and decompress the YoMaHa'07 dataset into `destination`.
pub fn fetch<P: AsRef<Path>>(destination: P) -> Result<(), YomahaErr> {
    Fetcher::new(DatasetSource::yomaha07()?)?.fetch(destination)
}

impl Fetcher {
    /// Create a fetcher for a dataset.
    ///
    /// Requests have no timeout.
    pub fn new(source: DatasetSource) -> Result<Self, YomahaErr> {
        let client = Client::builder().timeout(None).build()?;
        Ok(Fetcher { client, source })
    }

    /// The dataset this fetcher downloads.
    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    /// Download every file of the dataset into `destination`, decompress the data file and print
    /// the dataset's last update time.
    ///
    /// A leading `~` in `destination` is expanded to the home directory. The directory must
    /// already exist. The first error aborts the download, files written before it are left in
    /// place.
    pub fn fetch<P: AsRef<Path>>(&self, destination: P) -> Result<(), YomahaErr> {
        let dir = expand_home(destination.as_ref());

        for resource in self.source.metadata() {
            self.download(resource, &dir)?;
        }

        let data = self.source.data();
        let compressed = self.download(data, &dir)?;

        let decompressed = data
            .decompressed_file_name()
            .map(|name| dir.join(name))
            .ok_or(YomahaErr::LogicError("data resource is not compressed"))?;

        println!("Decompressing: {}", compressed.display());
        decompress_file(&compressed, &decompressed)?;

        if self.source.last_update().is_some() {
            println!("\n Last Update: {}", last_update(&dir, &self.source)?);
        }

        Ok(())
    }

    fn download(&self, resource: &RemoteResource, dir: &Path) -> Result<PathBuf, YomahaErr> {
        println!("Downloading: {}", resource.url());

        let response = self.client.get(resource.url()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(YomahaErr::HttpStatus {
                url: resource.url().to_owned(),
                status,
            });
        }

        let body = response.bytes()?;

        let path = dir.join(resource.file_name());
        println!("Saving: {}", path.display());
        std::fs::write(&path, &body)?;
        debug!("Wrote {} bytes to {}", body.len(), path.display());

        Ok(path)
    }
}

/// Read the last update time of a dataset previously downloaded into `dir`.
///
/// Bytes that aren't valid UTF-8 are replaced, the banner is only for display.
pub fn last_update<P: AsRef<Path>>(dir: P, source: &DatasetSource) -> Result<String, YomahaErr> {
    let resource = source
        .last_update()
        .ok_or(YomahaErr::LogicError("dataset has no metadata files"))?;

    let path = expand_home(dir.as_ref()).join(resource.file_name());
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Replace a leading `~` with the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();

    match components.next() {
        Some(Component::Normal(first)) if first == std::ffi::OsStr::new("~") => {
            match dirs::home_dir() {
                Some(home) => home.join(components.as_path()),
                None => path.to_path_buf(),
            }
        }
        _ => path.to_path_buf(),
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
