// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    sync::atomic::{AtomicBool, AtomicU64, Ordering},
    time::Duration,
};

use futures_util::lock::Mutex;
use log::{debug, error, info, warn};

use crate::{
    api::Api,
    clock::Clock,
    model::{AttendanceRecord, IndexNumber, Session, Student},
    render::{Details, Summary},
    session,
    storage::Storage,
    view::{Banner, BannerKind, Greeting, InputState, View},
};

const EMPTY_INPUT: &str = "Please enter your album number";
const MALFORMED_INPUT: &str = "Album number must consist of exactly 6 digits (e.g. 123456)";
const FETCH_FAILED: &str = "Could not fetch student data. Please try again.";
const LOGIN_FAILED: &str = "Error while logging in. Please try again.";
const LOGGED_OUT: &str = "You have been logged out";
const ALREADY_LOGGED_IN: &str = "You are already logged in. Log out first to switch students.";

pub(crate) struct Config {
    /// Pause between greeting the student and switching to their attendance.
    pub(crate) login_delay: Duration,
    pub(crate) error_ttl: chrono::Duration,
    pub(crate) success_ttl: chrono::Duration,
    pub(crate) session_max_age: chrono::Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_secs(1),
            error_ttl: chrono::Duration::seconds(5),
            success_ttl: chrono::Duration::seconds(3),
            session_max_age: chrono::Duration::hours(24),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    LoggedOut,
    LoggedIn,
    /// The logout dialog is open on top of the attendance view.
    LogoutConfirming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CancelReason {
    Explicit,
    Backdrop,
    Escape,
}

impl CancelReason {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicitly",
            Self::Backdrop => "by clicking outside the dialog",
            Self::Escape => "with Escape",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Key {
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClickTarget {
    Backdrop,
    Dialog,
}

struct Inner {
    state: State,
    student: Option<Student>,
    displayed: Vec<AttendanceRecord>,
    banner: Option<Banner>,
}

/// Drives the screens of the client.
///
/// Every login attempt, restore, refresh and logout starts a new generation.
/// Network results that come back for an older generation are dropped, so a
/// slow response can never overwrite the screen or the stored session of a
/// newer one.
pub(crate) struct Controller<A, S, V, C> {
    api: A,
    store: session::Store<S>,
    view: V,
    clock: C,
    config: Config,
    inner: Mutex<Inner>,
    generation: AtomicU64,
    busy: AtomicBool,
}

impl<A, S, V, C> Controller<A, S, V, C>
where
    A: Api,
    S: Storage<Session>,
    V: View,
    C: Clock,
{
    pub(crate) fn new(
        api: A,
        store: session::Store<S>,
        view: V,
        clock: C,
        config: Config,
    ) -> Self {
        Self {
            api,
            store,
            view,
            clock,
            config,
            inner: Mutex::new(Inner {
                state: State::LoggedOut,
                student: None,
                displayed: Vec::new(),
                banner: None,
            }),
            generation: AtomicU64::new(0),
            busy: AtomicBool::new(false),
        }
    }

    pub(crate) async fn state(&self) -> State {
        self.inner.lock().await.state
    }

    #[cfg(test)]
    pub(crate) async fn banner(&self) -> Option<Banner> {
        self.inner.lock().await.banner.clone()
    }

    pub(crate) async fn health(&self) -> bool {
        self.api.health_check().await
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        let current = self.generation.load(Ordering::SeqCst) == generation;
        if !current {
            debug!("Discarding results of superseded request #{}", generation);
        }
        current
    }

    /// Probes the service and picks up a stored session, if there is one.
    pub(crate) async fn page_load(&self) -> bool {
        // The probe only ever warns; the page works the same either way.
        let _ = self.api.health_check().await;
        self.restore(false).await
    }

    /// Returns whether a session was restored. With `refresh`, cached
    /// attendance is ignored and fetched again.
    pub(crate) async fn restore(&self, refresh: bool) -> bool {
        let Some(session) = self.store.load().await else {
            self.view.show_login();
            return false;
        };

        let now = self.clock.now();
        if session.is_expired(now, self.config.session_max_age) {
            info!(
                "Stored session of {} is {} hours old and has expired",
                session.student.index_number,
                session.age(now).num_hours()
            );
            if let Err(e) = self.store.clear().await {
                warn!("We could not remove the expired session: {}", e);
            }
            self.view.show_login();
            return false;
        }

        let generation = self.next_generation();
        self.enter(&session.student, Greeting::Restored).await;
        match session.attendances {
            Some(records) if !refresh => {
                let _ = self.display(records).await;
            }
            Some(_) | None => self.load_attendances(&session.student, generation).await,
        }
        true
    }

    /// Live clean-up of the album number field. Returns what the field should
    /// now contain.
    pub(crate) async fn input(&self, raw: &str) -> String {
        self.view.set_input_state(InputState::Neutral);
        self.hide_banner().await;
        IndexNumber::sanitize(raw)
    }

    /// Handles the login form. Returns whether the student ended up logged in.
    pub(crate) async fn submit(&self, raw: &str) -> bool {
        if self.busy.load(Ordering::SeqCst) {
            debug!("Ignoring submission while another one is being checked");
            return false;
        }
        if self.state().await != State::LoggedOut {
            debug!("Ignoring submission while logged in");
            self.show_banner(BannerKind::Error, ALREADY_LOGGED_IN.to_owned())
                .await;
            return false;
        }

        self.view.set_input_state(InputState::Neutral);
        let value = raw.trim();
        if value.is_empty() {
            self.reject(EMPTY_INPUT.to_owned()).await;
            return false;
        }
        let Ok(index) = value.parse::<IndexNumber>() else {
            self.reject(MALFORMED_INPUT.to_owned()).await;
            return false;
        };

        if self.busy.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.view.set_busy(true);
        let generation = self.next_generation();
        let found = self.check(&index, generation).await;
        self.busy.store(false, Ordering::SeqCst);
        self.view.set_busy(false);

        let Some(student) = found else {
            return false;
        };

        tokio::time::sleep(self.config.login_delay).await;
        if !self.is_current(generation) {
            return false;
        }
        self.login(student, generation).await
    }

    async fn check(&self, index: &IndexNumber, generation: u64) -> Option<Student> {
        let exists = self.api.student_exists(index).await;
        if !self.is_current(generation) {
            return None;
        }
        if !exists {
            self.reject(format!(
                "Invalid album number. Student {index} does not exist in the system."
            ))
            .await;
            return None;
        }

        let student = self.api.fetch_student(index).await;
        if !self.is_current(generation) {
            return None;
        }
        let Some(student) = student else {
            self.show_banner(BannerKind::Error, FETCH_FAILED.to_owned())
                .await;
            return None;
        };

        self.view.set_input_state(InputState::Success);
        self.show_banner(
            BannerKind::Success,
            format!("Welcome {}!", student.full_name()),
        )
        .await;
        Some(student)
    }

    async fn login(&self, student: Student, generation: u64) -> bool {
        if let Err(e) = self.store.save(student.clone(), self.clock.now()).await {
            error!("We could not save the session: {}", e);
            self.show_banner(BannerKind::Error, LOGIN_FAILED.to_owned())
                .await;
            return false;
        }

        info!("Logged in as {}", student.index_number);
        self.enter(&student, Greeting::Welcome).await;
        self.load_attendances(&student, generation).await;
        true
    }

    /// Fetches attendance again for whoever is logged in.
    pub(crate) async fn refresh(&self) -> bool {
        let student = {
            let inner = self.inner.lock().await;
            match inner.state {
                State::LoggedIn | State::LogoutConfirming => inner.student.clone(),
                State::LoggedOut => None,
            }
        };
        let Some(student) = student else {
            return false;
        };

        let generation = self.next_generation();
        self.load_attendances(&student, generation).await;
        true
    }

    /// Shows everything about the `position`-th record on screen, counting
    /// from zero in display order.
    pub(crate) async fn details(&self, position: usize) -> bool {
        let record = self.inner.lock().await.displayed.get(position).cloned();
        if let Some(record) = record {
            self.view.show_details(&Details::from(&record));
            true
        } else {
            self.show_banner(
                BannerKind::Error,
                format!("There is no attendance record number {position}"),
            )
            .await;
            false
        }
    }

    pub(crate) async fn request_logout(&self) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.state != State::LoggedIn {
            return false;
        }
        inner.state = State::LogoutConfirming;
        self.view.set_logout_dialog(true);
        true
    }

    pub(crate) async fn confirm_logout(&self) -> bool {
        {
            let mut inner = self.inner.lock().await;
            if inner.state != State::LogoutConfirming {
                return false;
            }
            inner.state = State::LoggedOut;
            inner.student = None;
            inner.displayed.clear();
        }

        let _ = self.next_generation();
        if let Err(e) = self.store.clear().await {
            warn!("We could not remove the stored session: {}", e);
        }
        self.view.set_logout_dialog(false);
        self.view.show_login();
        self.view.set_input_state(InputState::Neutral);
        self.hide_banner().await;
        self.show_banner(BannerKind::Success, LOGGED_OUT.to_owned())
            .await;
        true
    }

    pub(crate) async fn cancel_logout(&self, reason: CancelReason) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.state != State::LogoutConfirming {
            return false;
        }
        inner.state = State::LoggedIn;
        self.view.set_logout_dialog(false);
        debug!("Logout cancelled {}", reason.as_str());
        true
    }

    pub(crate) async fn key(&self, key: Key) -> bool {
        match key {
            Key::Escape => self.cancel_logout(CancelReason::Escape).await,
        }
    }

    pub(crate) async fn click(&self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop => self.cancel_logout(CancelReason::Backdrop).await,
            ClickTarget::Dialog => false,
        }
    }

    /// Dismisses the current banner once it has been up long enough.
    pub(crate) async fn tick(&self) {
        let now = self.clock.now();
        let mut inner = self.inner.lock().await;
        if inner
            .banner
            .as_ref()
            .is_some_and(|banner| banner.expires_at <= now)
        {
            inner.banner = None;
            self.view.hide_banner();
        }
    }

    async fn enter(&self, student: &Student, greeting: Greeting) {
        {
            let mut inner = self.inner.lock().await;
            inner.state = State::LoggedIn;
            inner.student = Some(student.clone());
        }
        self.view.show_dashboard(student, greeting);
    }

    async fn load_attendances(&self, student: &Student, generation: u64) {
        let records = self.api.fetch_attendances(&student.index_number).await;
        if !self.is_current(generation) {
            return;
        }

        let records = self.display(records).await;
        if let Err(e) = self.store.update_attendances(records).await {
            warn!("We could not cache attendance: {}", e);
        }
    }

    async fn display(&self, records: Vec<AttendanceRecord>) -> Vec<AttendanceRecord> {
        let summary = Summary::new(records);
        self.view.show_attendances(&summary);
        let records = summary.records;
        self.inner.lock().await.displayed.clone_from(&records);
        records
    }

    async fn reject(&self, text: String) {
        self.view.set_input_state(InputState::Error);
        self.show_banner(BannerKind::Error, text).await;
    }

    async fn show_banner(&self, kind: BannerKind, text: String) {
        let ttl = match kind {
            BannerKind::Error => self.config.error_ttl,
            BannerKind::Success => self.config.success_ttl,
        };
        let banner = Banner {
            kind,
            text,
            expires_at: self.clock.now() + ttl,
        };
        self.view.show_banner(&banner);
        self.inner.lock().await.banner = Some(banner);
    }

    async fn hide_banner(&self) {
        if self.inner.lock().await.banner.take().is_some() {
            self.view.hide_banner();
        }
    }
}
