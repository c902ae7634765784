// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Shared helpers, fixtures, and utilities used across test modules.
//! Not every test binary uses every helper.

#![allow(dead_code)]

pub mod fake_registry;
pub mod fixtures;
pub mod strategies;
