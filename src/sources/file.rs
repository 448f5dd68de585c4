use std::fs;
use std::path::PathBuf;

use crate::errors::{TedditError, TedditResult};
use crate::sources::traits::{FeedClient, QueryParams};

/// Serves a previously saved listing from disk. The `url` passed to `fetch`
/// is ignored, as are query parameters.
pub struct FileFeedClient {
    path: PathBuf,
}

impl FileFeedClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeedClient for FileFeedClient {
    fn fetch(&self, _url: &str, _params: &QueryParams) -> TedditResult<String> {
        tracing::debug!(path = %self.path.display(), "reading saved feed");

        fs::read_to_string(&self.path)
            .map_err(|e| TedditError::network(&self.path.display().to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_saved_payload() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"data":{{"children":[]}}}}"#).unwrap();

        let client = FileFeedClient::new(file.path());
        let body = client.fetch("ignored", &QueryParams::new()).unwrap();

        assert_eq!(body, r#"{"data":{"children":[]}}"#);
    }

    #[test]
    fn test_missing_file_is_network_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let client = FileFeedClient::new(&path);
        let err = client.fetch("ignored", &QueryParams::new()).unwrap_err();

        match err {
            TedditError::Network { url, .. } => assert_eq!(url, path.display().to_string()),
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
