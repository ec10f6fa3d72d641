// SPDX-License-Identifier: MPL-2.0
//! Screen orientation locking.
//!
//! Requests are fire-and-forget: the player never waits for or inspects the
//! outcome. On desktop, landscape maps to a fullscreen window and portrait
//! back to a regular window.

use iced::{window, Task};
use std::fmt;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

pub trait OrientationLock: fmt::Debug {
    fn lock(&self, orientation: Orientation) -> Task<()>;

    fn lock_to_landscape(&self) -> Task<()> {
        self.lock(Orientation::Landscape)
    }

    fn lock_to_portrait(&self) -> Task<()> {
        self.lock(Orientation::Portrait)
    }
}

/// Maps orientation to the main window's fullscreen mode.
///
/// The window id is learned after startup; requests made before that are
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct WindowOrientation {
    window: Arc<OnceLock<window::Id>>,
}

impl WindowOrientation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the main window id. Later calls are ignored.
    pub fn attach(&self, id: window::Id) {
        if self.window.set(id).is_err() {
            tracing::trace!("orientation window already attached");
        }
    }
}

impl OrientationLock for WindowOrientation {
    fn lock(&self, orientation: Orientation) -> Task<()> {
        let Some(id) = self.window.get().copied() else {
            tracing::warn!(?orientation, "no window attached, orientation lock ignored");
            return Task::none();
        };

        let mode = match orientation {
            Orientation::Landscape => window::Mode::Fullscreen,
            Orientation::Portrait => window::Mode::Windowed,
        };
        tracing::debug!(?orientation, ?mode, "locking orientation");
        window::set_mode(id, mode)
    }
}

/// Ignores every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOrientation;

impl OrientationLock for NoOrientation {
    fn lock(&self, _orientation: Orientation) -> Task<()> {
        Task::none()
    }
}
