// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Fixtures
//!
//! Canned records and envelopes.

use serde_json::{json, Value};

use phonoreg_core::{ApiProfile, Creator, MockTransport, Performer, Phonogram, RegistryClient};

use super::fake_registry::{FakeRegistry, ADMIN_EMAIL, ADMIN_PASSWORD};

/// A fully populated phonogram with two creators and one performer.
pub fn sample_phonogram(isrc: &str) -> Phonogram {
    Phonogram {
        work_title: Some("Obra de Teste".into()),
        duration: Some(225.into()),
        release_year: Some(2026),
        genre: Some("MPB".into()),
        producer_name: Some("Gravadora Teste".into()),
        producer_document: Some("12.345.678/0001-90".into()),
        producer_share_percent: Some(100.0),
        ..Phonogram::new(isrc, "Música de Teste")
    }
    .with_creator(
        Creator::new("Compositor Um")
            .with_tax_id("123.456.789-00")
            .with_role("AUTOR")
            .with_share(60.0),
    )
    .with_creator(Creator::new("Compositor Dois").with_role("COMPOSITOR").with_share(40.0))
    .with_performer(
        Performer::new("Intérprete Principal")
            .with_category("INTERPRETE")
            .with_share(100.0),
    )
}

/// Wire form of a minimal record, for seeding a fake registry.
pub fn wire_record(isrc: &str, title: &str) -> Value {
    json!({"isrc": isrc, "titulo": title, "autores": [], "interpretes": []})
}

/// A unique-looking ISRC built from a sequence number.
pub fn isrc_for(n: u32) -> String {
    format!("BRTST26{:05}", n % 100_000)
}

/// Client over a mock transport with no scripted responses.
pub fn mock_client(profile: ApiProfile) -> RegistryClient<MockTransport> {
    RegistryClient::new(MockTransport::new(), profile)
}

/// Client over a fake registry, already logged in as the administrator.
pub fn logged_in_client(registry: FakeRegistry) -> RegistryClient<FakeRegistry> {
    let mut client = RegistryClient::new(registry, ApiProfile::legacy());
    let envelope = client.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
    assert!(envelope.is_success(), "fixture login failed: {:?}", envelope);
    client
}

/// Same as [`logged_in_client`], for the v1 deployment.
pub fn logged_in_v1_client(registry: FakeRegistry) -> RegistryClient<FakeRegistry> {
    let mut client = RegistryClient::new(registry, ApiProfile::v1());
    let envelope = client.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
    assert!(envelope.is_success(), "fixture login failed: {:?}", envelope);
    client
}

pub fn not_found_envelope() -> Value {
    json!({
        "success": false,
        "error": {"code": "NOT_FOUND", "message": "Fonograma não encontrado"}
    })
}

pub fn login_envelope() -> Value {
    json!({
        "success": true,
        "message": "Login realizado com sucesso",
        "data": {"user": {"id": 1, "email": ADMIN_EMAIL, "nome": "Administrador", "is_admin": true}}
    })
}
