//! Data Package Management Module
//!
//! Ensures the NLP data packages required by the tokenizer/tagger library
//! are present in the local data directory before the server accepts
//! connections. Downloads on the first run, loads from the data directory
//! from the second time onwards. A failed fetch aborts startup.

use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tracing::{debug, info};

use crate::errors::{ApiError, Result};

/// nlprule release whose binaries are fetched
pub const NLPRULE_RELEASE: &str = "0.6.4";

/// Binary data package backing the tokenizer and POS tagger
pub const TOKENIZER_PACKAGE: &str = "en_tokenizer.bin";

/// Fixed set of data packages required at startup
pub const REQUIRED_PACKAGES: &[&str] = &[TOKENIZER_PACKAGE];

/// Download URL of a data package
///
/// Packages are distributed as gzipped binaries attached to nlprule GitHub
/// releases.
#[must_use]
pub fn package_url(name: &str) -> String {
  format!("https://github.com/bminixhofer/nlprule/releases/download/{NLPRULE_RELEASE}/{name}.gz")
}

/// Data package manager
///
/// Idempotent: packages already present in the data directory are left
/// untouched, so repeated startups do not hit the network.
#[derive(Debug, Clone)]
pub struct DataPackageManager {
  /// Directory the packages are installed into
  data_dir: PathBuf,
}

impl DataPackageManager {
  /// Creates a manager installing into `data_dir`
  #[must_use]
  pub fn new(data_dir: PathBuf) -> Self {
    Self { data_dir }
  }

  /// Returns the path of the data directory
  #[must_use]
  pub fn data_dir(&self) -> &Path {
    &self.data_dir
  }

  /// Returns the install path of a named package
  #[must_use]
  pub fn package_path(&self, name: &str) -> PathBuf {
    self.data_dir.join(name)
  }

  /// Returns the install path of the tokenizer data package
  #[must_use]
  pub fn tokenizer_path(&self) -> PathBuf {
    self.package_path(TOKENIZER_PACKAGE)
  }

  /// Ensures every required package is present, fetching absent ones
  ///
  /// # Errors
  /// Returns an error if the data directory cannot be created or a package
  /// cannot be downloaded, decompressed or written. The caller is expected
  /// to abort startup on failure.
  pub async fn ensure_all(&self) -> Result<()> {
    std::fs::create_dir_all(&self.data_dir).map_err(|e| {
      ApiError::config(format!(
        "failed to create data directory {}: {e}",
        self.data_dir.display()
      ))
    })?;

    for name in REQUIRED_PACKAGES {
      let path = self.package_path(name);
      if path.is_file() {
        debug!(package = name, "data package already present");
        continue;
      }
      self.fetch_package(name, &path).await?;
    }

    Ok(())
  }

  /// Downloads, decompresses and installs one package
  async fn fetch_package(&self, name: &str, dest: &Path) -> Result<()> {
    let url = package_url(name);
    info!(package = name, url = %url, "downloading data package");

    let response = reqwest::get(&url)
      .await
      .and_then(reqwest::Response::error_for_status)
      .map_err(|e| ApiError::config(format!("failed to download {name}: {e}")))?;

    let compressed = response
      .bytes()
      .await
      .map_err(|e| ApiError::config(format!("failed to read download of {name}: {e}")))?;

    let mut decoder = GzDecoder::new(compressed.as_ref());
    let mut data = Vec::new();
    decoder
      .read_to_end(&mut data)
      .map_err(|e| ApiError::config(format!("failed to decompress {name}: {e}")))?;

    // Write to a temp name first so a crash never leaves a truncated package
    // that a later startup would treat as present.
    let partial = dest.with_extension("part");
    std::fs::write(&partial, &data)
      .map_err(|e| ApiError::config(format!("failed to write {name}: {e}")))?;
    std::fs::rename(&partial, dest)
      .map_err(|e| ApiError::config(format!("failed to install {name}: {e}")))?;

    info!(package = name, bytes = data.len(), "data package installed");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn package_url_points_at_release_asset() {
    let url = package_url("en_tokenizer.bin");
    assert_eq!(
      url,
      format!(
        "https://github.com/bminixhofer/nlprule/releases/download/{NLPRULE_RELEASE}/en_tokenizer.bin.gz"
      )
    );
  }

  #[test]
  fn package_path_joins_data_dir() {
    let manager = DataPackageManager::new(PathBuf::from("/tmp/data"));
    assert_eq!(manager.package_path("en_tokenizer.bin"), PathBuf::from("/tmp/data/en_tokenizer.bin"));
    assert_eq!(manager.tokenizer_path(), PathBuf::from("/tmp/data/en_tokenizer.bin"));
  }

  #[tokio::test]
  async fn ensure_all_is_noop_when_packages_present() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let manager = DataPackageManager::new(dir.path().to_path_buf());

    // Pre-seed every required package so no network access happens
    for name in REQUIRED_PACKAGES {
      std::fs::write(manager.package_path(name), b"stub").expect("seed package");
    }

    manager.ensure_all().await.expect("ensure_all should succeed");

    for name in REQUIRED_PACKAGES {
      let contents = std::fs::read(manager.package_path(name)).expect("read package");
      assert_eq!(contents, b"stub", "present package must not be overwritten");
    }
  }

  // Network-dependent download tests are opt-in with the with_model_tests
  // feature since they pull several megabytes from GitHub releases.
  #[tokio::test]
  #[cfg_attr(not(feature = "with_model_tests"), ignore)]
  async fn ensure_all_downloads_absent_packages() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let manager = DataPackageManager::new(dir.path().join("data"));

    manager.ensure_all().await.expect("download should succeed: check network");

    for name in REQUIRED_PACKAGES {
      assert!(manager.package_path(name).is_file());
    }
  }
}
