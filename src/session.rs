// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::lock::Mutex;
use log::warn;

use crate::{
    error::Result,
    model::{AttendanceRecord, Session, Student},
    storage::Storage,
};

/// Owns the persisted [`Session`]. Expiry is left to the caller; a loaded
/// session may be arbitrarily old.
pub(crate) struct Store<S> {
    storage: Arc<Mutex<S>>,
}

impl<S: Storage<Session>> Store<S> {
    pub(crate) fn new(storage: Arc<Mutex<S>>) -> Self {
        Self { storage }
    }

    /// Starts a new session for `student`, replacing whatever was stored.
    pub(crate) async fn save(&self, student: Student, now: DateTime<Utc>) -> Result<Session> {
        let session = Session::new(student, now);
        self.storage.lock().await.update(&session).await?;
        Ok(session)
    }

    /// Anything that cannot be read back is treated as no session at all.
    pub(crate) async fn load(&self) -> Option<Session> {
        match self.storage.lock().await.get().await {
            Ok(session) => session,
            Err(e) => {
                warn!("Ignoring stored session that could not be read: {}", e);
                None
            }
        }
    }

    pub(crate) async fn clear(&self) -> Result<()> {
        self.storage.lock().await.clear().await
    }

    pub(crate) async fn update_attendances(&self, records: Vec<AttendanceRecord>) -> Result<()> {
        let mut storage = self.storage.lock().await;
        let Some(mut session) = storage.get().await.unwrap_or_default() else {
            return Ok(());
        };
        session.attendances = Some(records);
        storage.update(&session).await
    }
}
