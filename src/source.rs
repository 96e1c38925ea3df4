//! Where the dataset lives and how it is laid out.

use reqwest::Url;

use crate::{errors::YomahaErr, schema::Schema};

/// Host and path prefix of the near real time YoMaHa'07 product at APDRC.
pub const YOMAHA07_BASE_URL: &str =
    "http://apdrc.soest.hawaii.edu/projects/Argo/data/trjctry/0-Near-Real_Time/";

const YOMAHA07_METADATA: [&str; 3] = ["0-date_time.txt", "WMO2DAC2type.txt", "end-prog.lst"];
const YOMAHA07_DATA: &str = "yomaha07.dat.gz";

const COMPRESSION_SUFFIX: &str = ".gz";

/// A single file to download.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteResource {
    url: Url,
    file_name: String,
}

impl RemoteResource {
    /// Create a resource. The URL must end in a non-empty path segment, which becomes the local
    /// file name.
    pub fn new(url: &str) -> Result<Self, YomahaErr> {
        let invalid = || YomahaErr::InvalidUrl(url.to_owned());

        let parsed = Url::parse(url).map_err(|_| invalid())?;
        let file_name = parsed
            .path_segments()
            .and_then(|segments| segments.last())
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned)
            .ok_or_else(invalid)?;

        Ok(RemoteResource {
            url: parsed,
            file_name,
        })
    }

    /// The URL as a string.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// The name to save this resource under, the final segment of the URL path.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The name of the decompressed file, or `None` if this isn't a compressed resource.
    pub fn decompressed_file_name(&self) -> Option<&str> {
        self.file_name
            .strip_suffix(COMPRESSION_SUFFIX)
            .filter(|name| !name.is_empty())
    }
}

/// Everything needed to fetch and read one dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetSource {
    metadata: Vec<RemoteResource>,
    data: RemoteResource,
    schema: Schema,
}

impl DatasetSource {
    /// Describe a dataset. The data resource must be a compressed file.
    pub fn new(
        metadata: Vec<RemoteResource>,
        data: RemoteResource,
        schema: Schema,
    ) -> Result<Self, YomahaErr> {
        if data.decompressed_file_name().is_none() {
            return Err(YomahaErr::InvalidUrl(data.url().to_owned()));
        }

        Ok(DatasetSource {
            metadata,
            data,
            schema,
        })
    }

    /// The YoMaHa'07 dataset at APDRC.
    pub fn yomaha07() -> Result<Self, YomahaErr> {
        Self::yomaha07_mirror(YOMAHA07_BASE_URL)
    }

    /// The YoMaHa'07 file set served from some other host or path prefix.
    pub fn yomaha07_mirror(base_url: &str) -> Result<Self, YomahaErr> {
        let base = if base_url.ends_with('/') {
            base_url.to_owned()
        } else {
            format!("{}/", base_url)
        };

        let metadata = YOMAHA07_METADATA
            .iter()
            .map(|name| RemoteResource::new(&format!("{}{}", base, name)))
            .collect::<Result<Vec<_>, _>>()?;
        let data = RemoteResource::new(&format!("{}{}", base, YOMAHA07_DATA))?;

        Self::new(metadata, data, Schema::yomaha07())
    }

    /// The small metadata files, in download order.
    pub fn metadata(&self) -> &[RemoteResource] {
        &self.metadata
    }

    /// The metadata file holding the dataset's last update time.
    pub fn last_update(&self) -> Option<&RemoteResource> {
        self.metadata.first()
    }

    /// The compressed data file.
    pub fn data(&self) -> &RemoteResource {
        &self.data
    }

    /// Column layout of the decompressed data file.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn test_file_name_is_last_segment() {
        let res = RemoteResource::new(
            "http://apdrc.soest.hawaii.edu/projects/Argo/data/trjctry/0-Near-Real_Time/end-prog.lst",
        )
        .unwrap();

        assert_eq!(res.file_name(), "end-prog.lst");
        assert_eq!(res.decompressed_file_name(), None);
    }

    #[test]
    fn test_decompressed_file_name() {
        let res = RemoteResource::new("http://localhost/data/yomaha07.dat.gz").unwrap();

        assert_eq!(res.file_name(), "yomaha07.dat.gz");
        assert_eq!(res.decompressed_file_name(), Some("yomaha07.dat"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(RemoteResource::new("not a url").is_err());
        assert!(RemoteResource::new("http://localhost/data/").is_err());
        assert!(RemoteResource::new("http://localhost").is_err());
    }

    #[test]
    fn test_yomaha07_source() {
        let src = DatasetSource::yomaha07().unwrap();

        let names: Vec<&str> = src.metadata().iter().map(|r| r.file_name()).collect();
        assert_eq!(names, vec!["0-date_time.txt", "WMO2DAC2type.txt", "end-prog.lst"]);
        assert_eq!(src.last_update().unwrap().file_name(), "0-date_time.txt");
        assert_eq!(
            src.data().url(),
            "http://apdrc.soest.hawaii.edu/projects/Argo/data/trjctry/0-Near-Real_Time/yomaha07.dat.gz"
        );
        assert_eq!(src.schema().len(), 28);
    }

    #[test]
    fn test_mirror_without_trailing_slash() {
        let src = DatasetSource::yomaha07_mirror("http://127.0.0.1:8080/argo").unwrap();
        assert_eq!(src.data().url(), "http://127.0.0.1:8080/argo/yomaha07.dat.gz");
    }

    #[test]
    fn test_data_must_be_compressed() {
        let data = RemoteResource::new("http://localhost/yomaha07.dat").unwrap();
        assert!(DatasetSource::new(vec![], data, Schema::yomaha07()).is_err());
    }
}
