// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.
//! Import these in property test files to avoid duplication.

use proptest::prelude::*;
use serde_json::{json, Value};

use phonoreg_core::{Creator, Performer, Phonogram, TrackDuration};

// ============================================================
// String Strategies
// ============================================================

/// Strategy for ISRCs: country, registrant, year, designation.
pub fn isrc_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{2}[A-Z0-9]{3}[0-9]{7}"
}

/// Strategy for human names (non-empty after trimming).
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-zÀ-ú][A-Za-zÀ-ú ]{0,29}"
        .prop_map(|s| s.trim().to_string())
        .prop_filter("non-empty", |s| !s.is_empty())
}

/// Strategy for search terms that may or may not match a title.
pub fn search_term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("Rock".to_string()), Just("Samba".to_string()), "[a-z]{1,4}"]
}

// ============================================================
// Record Strategies
// ============================================================

pub fn creator_strategy() -> impl Strategy<Value = Creator> {
    (
        name_strategy(),
        prop::option::of(prop_oneof![Just("AUTOR"), Just("COMPOSITOR"), Just("VERSIONISTA")]),
        prop::option::of(0u32..=100),
    )
        .prop_map(|(name, role, share)| {
            let mut creator = Creator::new(&name);
            if let Some(role) = role {
                creator = creator.with_role(role);
            }
            if let Some(share) = share {
                creator = creator.with_share(share as f64);
            }
            creator
        })
}

pub fn performer_strategy() -> impl Strategy<Value = Performer> {
    (
        name_strategy(),
        prop::option::of(prop_oneof![Just("INTERPRETE"), Just("MUSICO_ACOMPANHANTE")]),
    )
        .prop_map(|(name, category)| {
            let performer = Performer::new(&name);
            match category {
                Some(category) => performer.with_category(category),
                None => performer,
            }
        })
}

/// Strategy for phonograms with up to five creators and performers.
pub fn phonogram_strategy() -> impl Strategy<Value = Phonogram> {
    (
        isrc_strategy(),
        name_strategy(),
        prop::option::of(0u32..5400),
        prop::option::of(1950i32..2030),
        prop::collection::vec(creator_strategy(), 0..5),
        prop::collection::vec(performer_strategy(), 0..5),
    )
        .prop_map(|(isrc, title, duration, year, creators, performers)| Phonogram {
            duration: duration.map(TrackDuration::Seconds),
            release_year: year,
            creators,
            performers,
            ..Phonogram::new(&isrc, &title)
        })
}

// ============================================================
// Envelope Strategies
// ============================================================

fn payload_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z ]{0,12}".prop_map(|s| json!(s)),
        (any::<u32>(), "[a-z]{1,8}").prop_map(|(id, isrc)| json!({"id": id, "isrc": isrc})),
    ]
}

fn error_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        "[A-Za-z ]{1,20}".prop_map(|s| json!(s)),
        ("[A-Z_]{3,12}", "[A-Za-z ]{0,20}")
            .prop_map(|(code, message)| json!({"code": code, "message": message})),
    ]
}

/// Strategy for wire envelopes, consistent or not.
///
/// Each optional field is sometimes absent, sometimes `null`.
pub fn wire_envelope_strategy() -> impl Strategy<Value = Value> {
    (
        any::<bool>(),
        prop::option::of(payload_strategy()),
        prop::option::of(error_strategy()),
        prop::option::of("[A-Za-z ]{0,20}"),
    )
        .prop_map(|(success, data, error, message)| {
            let mut envelope = json!({"success": success});
            if let Some(data) = data {
                envelope["data"] = data;
            }
            if let Some(error) = error {
                envelope["error"] = error;
            }
            if let Some(message) = message {
                envelope["message"] = json!(message);
            }
            envelope
        })
}
