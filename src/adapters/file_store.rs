use crate::domain::model::Submission;
use crate::domain::ports::SubmissionStore;
use crate::utils::error::{PoemError, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    next_id: u64,
    submissions: Vec<Submission>,
}

/// Submission store backed by a single JSON file. The whole file is loaded at
/// open and rewritten on every mutation; fine for the small record counts
/// this tool handles.
pub struct JsonFileStore {
    path: PathBuf,
    state: Mutex<StoreFile>,
}

impl JsonFileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let data = fs::read(&path)?;
            serde_json::from_slice(&data)?
        } else {
            StoreFile::default()
        };
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    fn persist(&self, state: &StoreFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreFile> {
        // A poisoned lock means a previous writer panicked; the in-memory
        // state is still the last consistent snapshot.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SubmissionStore for JsonFileStore {
    async fn create(&self, text: &str, owner: &str) -> Result<u64> {
        let mut state = self.lock();
        state.next_id += 1;
        let id = state.next_id;
        let now = Utc::now();
        state.submissions.push(Submission {
            id,
            text: text.to_string(),
            owner: owner.to_string(),
            created_at: now,
            updated_at: now,
        });
        self.persist(&state)?;
        tracing::debug!("Persisted new submission {} to {:?}", id, self.path);
        Ok(id)
    }

    async fn update(&self, id: u64, text: &str) -> Result<()> {
        let mut state = self.lock();
        let submission = state
            .submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(PoemError::SubmissionNotFound(id))?;
        submission.text = text.to_string();
        submission.updated_at = Utc::now();
        self.persist(&state)?;
        Ok(())
    }

    async fn get(&self, id: u64) -> Result<Submission> {
        let state = self.lock();
        state
            .submissions
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(PoemError::SubmissionNotFound(id))
    }

    async fn count_by_owner(&self, owner: &str) -> Result<usize> {
        let state = self.lock();
        Ok(state
            .submissions
            .iter()
            .filter(|s| s.owner == owner)
            .count())
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Submission>> {
        let state = self.lock();
        Ok(state
            .submissions
            .iter()
            .filter(|s| s.owner == owner)
            .cloned()
            .collect())
    }
}
