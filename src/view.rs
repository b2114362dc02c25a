// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    model::Student,
    render::{Details, Summary},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Greeting {
    /// Shown right after the student logs in.
    Welcome,
    /// Shown when a stored session is picked up again.
    Restored,
}

/// Decoration of the album number field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputState {
    Neutral,
    Error,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BannerKind {
    Error,
    Success,
}

/// A transient message. Only one is ever on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Banner {
    pub(crate) kind: BannerKind,
    pub(crate) text: String,
    pub(crate) expires_at: DateTime<Utc>,
}

/// Everything the controller needs from whatever is drawing the screen.
pub(crate) trait View: Send + Sync {
    fn show_login(&self);
    fn show_dashboard(&self, student: &Student, greeting: Greeting);
    fn show_attendances(&self, summary: &Summary);
    fn show_details(&self, details: &Details);
    fn show_banner(&self, banner: &Banner);
    fn hide_banner(&self);
    fn set_busy(&self, busy: bool);
    fn set_input_state(&self, state: InputState);
    fn set_logout_dialog(&self, open: bool);
}

impl<T: View + ?Sized> View for Arc<T> {
    fn show_login(&self) {
        (**self).show_login();
    }

    fn show_dashboard(&self, student: &Student, greeting: Greeting) {
        (**self).show_dashboard(student, greeting);
    }

    fn show_attendances(&self, summary: &Summary) {
        (**self).show_attendances(summary);
    }

    fn show_details(&self, details: &Details) {
        (**self).show_details(details);
    }

    fn show_banner(&self, banner: &Banner) {
        (**self).show_banner(banner);
    }

    fn hide_banner(&self) {
        (**self).hide_banner();
    }

    fn set_busy(&self, busy: bool) {
        (**self).set_busy(busy);
    }

    fn set_input_state(&self, state: InputState) {
        (**self).set_input_state(state);
    }

    fn set_logout_dialog(&self, open: bool) {
        (**self).set_logout_dialog(open);
    }
}

#[cfg(test)]
pub(crate) use recording::{Recording, Shown};
