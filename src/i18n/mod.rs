// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Card text is looked up in Fluent `.ftl` files embedded at build time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Placeables for the recipient name, age and date
//! - Fallback to `en-US` when a locale is not available

pub mod fluent;
