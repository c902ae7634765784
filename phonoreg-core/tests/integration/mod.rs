// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration Tests for Phonoreg Core
//!
//! These tests drive complete registry workflows (login, CRUD, stats,
//! logout) through the public client API against the fake registry.
//!
//! Run with: cargo test --test integration

#[path = "../common/mod.rs"]
mod common;

mod deployment_profile_test;
mod phonogram_workflow_test;
