//! Authoritative list of interviews for one session, mirrored to storage.
//!
//! Every accepted mutation rewrites the whole snapshot under
//! [`INTERVIEWS_KEY`] before returning. A rejected mutation (validation,
//! conflict, unknown id, failed write) leaves both the list and the stored
//! snapshot untouched.

use crate::core::conflict::{self, SlotClaim};
use crate::core::validate;
use crate::db::storage::{INTERVIEWS_KEY, SnapshotStorage};
use crate::errors::{AppError, AppResult};
use crate::models::interview::{Interview, NewInterview};
use uuid::Uuid;

pub struct RecordStore<S: SnapshotStorage> {
    storage: S,
    interviews: Vec<Interview>,
}

impl<S: SnapshotStorage> RecordStore<S> {
    /// Rehydrate from storage. An absent key is an empty list.
    pub fn load(storage: S) -> AppResult<Self> {
        let interviews = match storage.read(INTERVIEWS_KEY)? {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)?,
            _ => Vec::new(),
        };

        Ok(Self {
            storage,
            interviews,
        })
    }

    /// Current snapshot, in insertion order.
    pub fn list(&self) -> &[Interview] {
        &self.interviews
    }

    pub fn get(&self, id: &str) -> Option<&Interview> {
        self.interviews.iter().find(|iv| iv.id == id)
    }

    pub fn len(&self) -> usize {
        self.interviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interviews.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Schedule a new interview under a fresh id.
    pub fn add(&mut self, record: NewInterview) -> AppResult<Interview> {
        let record = validate::validate_record(record)?;

        let claim = SlotClaim::from(&record);
        if let Some(other) = conflict::find_conflict(&claim, &self.interviews) {
            return Err(AppError::Conflict(conflict::describe(&claim, other)));
        }

        let created = record.with_id(self.fresh_id());
        self.interviews.push(created.clone());

        if let Err(e) = self.persist() {
            self.interviews.pop();
            return Err(e);
        }

        Ok(created)
    }

    /// Replace the record with the same id, keeping its position.
    pub fn update(&mut self, record: Interview) -> AppResult<()> {
        let record = validate::validate_record(record.to_new())?.with_id(record.id);

        let claim = SlotClaim::from(&record);
        if let Some(other) = conflict::find_conflict(&claim, &self.interviews) {
            return Err(AppError::Conflict(conflict::describe(&claim, other)));
        }

        let idx = self
            .interviews
            .iter()
            .position(|iv| iv.id == record.id)
            .ok_or_else(|| AppError::NotFound(record.id.clone()))?;

        let previous = std::mem::replace(&mut self.interviews[idx], record);

        if let Err(e) = self.persist() {
            self.interviews[idx] = previous;
            return Err(e);
        }

        Ok(())
    }

    /// Delete by id. Unknown ids are not an error; returns whether a record went away.
    pub fn remove(&mut self, id: &str) -> AppResult<bool> {
        let idx = self.interviews.iter().position(|iv| iv.id == id);
        let removed = idx.map(|i| (i, self.interviews.remove(i)));

        if let Err(e) = self.persist() {
            if let Some((i, iv)) = removed {
                self.interviews.insert(i, iv);
            }
            return Err(e);
        }

        Ok(removed.is_some())
    }

    fn persist(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.interviews)?;
        self.storage.write(INTERVIEWS_KEY, &json)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
