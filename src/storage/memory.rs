// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::Storage;

/// Keeps the value serialized in memory, exactly as it would be written to
/// disk, so a value that no longer parses behaves the same as with [`super::File`].
pub(crate) struct Memory<T> {
    data: Option<String>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Memory<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_raw(raw: &str) -> Self {
        Self {
            data: Some(raw.to_owned()),
            _marker: PhantomData,
        }
    }

    #[cfg(test)]
    pub(crate) fn raw(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

#[async_trait]
impl<T: Send + Serialize + Sync + for<'de> Deserialize<'de>> Storage<T> for Memory<T> {
    async fn get(&mut self) -> Result<Option<T>> {
        Ok(match self.data {
            Some(ref raw) => Some(serde_json::from_str(raw)?),
            None => None,
        })
    }

    async fn update(&mut self, data: &T) -> Result<()> {
        self.data = Some(serde_json::to_string(data)?);
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        self.data = None;
        Ok(())
    }
}

impl<T> Default for Memory<T> {
    fn default() -> Self {
        Self {
            data: None,
            _marker: PhantomData,
        }
    }
}
