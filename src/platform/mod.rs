// SPDX-License-Identifier: MPL-2.0
//! Host platform services used by the player.

pub mod orientation;

pub use orientation::{NoOrientation, Orientation, OrientationLock, WindowOrientation};
