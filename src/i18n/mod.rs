// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. `.ftl` files are embedded
//! from `assets/i18n/`; the active locale comes from the CLI, then the config
//! file, then the OS, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
