use std::fs::File;
use std::path::PathBuf;

use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum FileUrlError {
	/// The URL does not name a local file.
	#[error("not a local file URL: {0}")]
	NotAFile(Url),

	#[error("failed to open {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Opens the local file a `file://` URL points at, read-only.
pub fn open_file_url(url: &Url) -> Result<File, FileUrlError> {
	if url.scheme() != "file" {
		return Err(FileUrlError::NotAFile(url.clone()));
	}
	let path = url
		.to_file_path()
		.map_err(|()| FileUrlError::NotAFile(url.clone()))?;
	File::open(&path).map_err(|source| FileUrlError::Io { path, source })
}

#[cfg(test)]
mod tests {
	use std::io::Read;

	use super::*;

	#[test]
	fn test_opens_local_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("plugin.txt");
		std::fs::write(&path, "payload").unwrap();

		let url = Url::from_file_path(&path).unwrap();
		let mut contents = String::new();
		open_file_url(&url)
			.unwrap()
			.read_to_string(&mut contents)
			.unwrap();
		assert_eq!(contents, "payload");
	}

	#[test]
	fn test_rejects_remote_url() {
		let url = Url::parse("https://example.com/plugin.txt").unwrap();
		assert!(matches!(open_file_url(&url), Err(FileUrlError::NotAFile(_))));
	}

	#[test]
	fn test_missing_file_reports_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.txt");
		let url = Url::from_file_path(&path).unwrap();

		match open_file_url(&url) {
			Err(FileUrlError::Io { path: reported, .. }) => assert_eq!(reported, path),
			other => panic!("expected Io error, got {other:?}"),
		}
	}
}
