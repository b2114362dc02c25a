// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error;

/// The album number identifying a student. Always exactly six ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub(crate) struct IndexNumber(String);

impl IndexNumber {
    pub(crate) const LENGTH: usize = 6;

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Cleans up raw keyboard input the way the album number field does while
    /// typing: anything that is not a digit is dropped and the result is cut
    /// off at [`Self::LENGTH`] characters.
    pub(crate) fn sanitize(raw: &str) -> String {
        raw.chars()
            .filter(char::is_ascii_digit)
            .take(Self::LENGTH)
            .collect()
    }
}

impl FromStr for IndexNumber {
    type Err = error::Conversion;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.len() == Self::LENGTH && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(error::Conversion::IndexNumber(value.to_owned()))
        }
    }
}

impl TryFrom<String> for IndexNumber {
    type Error = error::Conversion;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IndexNumber> for String {
    fn from(value: IndexNumber) -> Self {
        value.0
    }
}

impl fmt::Display for IndexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Student {
    pub(crate) index_number: IndexNumber,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) group_name: Option<String>,
}

impl Student {
    pub(crate) fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
