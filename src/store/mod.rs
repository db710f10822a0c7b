pub mod disk;
pub mod memory;

use crate::core::config::AppConfig;
use crate::core::contact::SubmissionStore;
use disk::DiskSubmissionStore;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Opens the on-disk submission store under the configured data path.
pub fn open_submission_store(config: &AppConfig) -> Result<Arc<dyn SubmissionStore>> {
    let path = config.data_path()?;
    let store = DiskSubmissionStore::open(&path).with_context(|| {
        format!(
            "Enquiry not saved: cannot use data path {} (set `data_path` in the config)",
            path.display()
        )
    })?;
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::ContactForm;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_uses_configured_data_path() {
        let dir = tempdir().unwrap();
        let config = AppConfig {
            data_path: Some(dir.path().to_string_lossy().into_owned()),
            ..Default::default()
        };

        let store = open_submission_store(&config).unwrap();
        let form = ContactForm {
            name: "Omar".to_string(),
            email: "omar@example.com".to_string(),
            subject: "Essay".to_string(),
            message: "Deadline next week".to_string(),
            ..Default::default()
        };
        store.save(&form).await.unwrap();

        assert!(dir.path().join("submissions").exists());
    }

    #[test]
    fn test_unusable_data_path_is_an_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("not-a-directory");
        std::fs::write(&file, "occupied").unwrap();
        let config = AppConfig {
            data_path: Some(file.to_string_lossy().into_owned()),
            ..Default::default()
        };

        let err = open_submission_store(&config).err().unwrap();
        assert!(err.to_string().contains("Enquiry not saved"));
    }
}
