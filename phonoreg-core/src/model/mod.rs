// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry payload types.

mod phonogram;
mod system;

pub(crate) use phonogram::PageWire;
pub use phonogram::{Creator, EcadStatus, Performer, Phonogram, PhonogramPage, PhonogramRef};
pub use system::{DocumentValidation, DurationValidation, HealthStatus, IsrcValidation};
