//! Phonogram Workflow Integration Tests
//!
//! Create, read, update, delete and count against the legacy deployment.

use serde_json::json;

use crate::common::fake_registry::FakeRegistry;
use crate::common::fixtures::{logged_in_client, sample_phonogram, wire_record};
use phonoreg_core::{EcadStatus, ListQuery, Phonogram};

/// Test: full lifecycle of one record
#[test]
fn test_phonogram_lifecycle() {
    let mut client = logged_in_client(FakeRegistry::legacy());
    let record = sample_phonogram("BRTST2600001");

    // Create
    let created = client.create(&record).unwrap();
    assert!(created.is_success());
    assert_eq!(created.status, 201);
    let created = created.into_data().unwrap();
    assert_eq!(created.isrc.as_deref(), Some("BRTST2600001"));

    // Read back by id and by ISRC
    let by_id = client.get_by_id(created.id).unwrap().into_data().unwrap();
    let by_isrc = client.get_by_isrc("BRTST2600001").unwrap().into_data().unwrap();
    assert_eq!(by_id, by_isrc);
    assert_eq!(by_id.creators.len(), 2);
    assert_eq!(by_id.creators[0].name, "Compositor Um");
    assert_eq!(by_id.performers.len(), 1);
    assert_eq!(by_id.status.as_deref(), Some("PENDENTE"));

    // Update replaces the whole record
    let replacement = Phonogram::new("BRTST2600001", "Título Novo");
    let updated = client.update(created.id, &replacement).unwrap();
    assert!(updated.is_success());

    let after = client.get_by_id(created.id).unwrap().into_data().unwrap();
    assert_eq!(after.title, "Título Novo");
    assert!(after.creators.is_empty());
    assert_eq!(after.genre, None);

    // Delete, then it is gone
    let deleted = client.delete(created.id).unwrap();
    assert!(deleted.is_success());
    assert_eq!(deleted.status, 204);

    let gone = client.get_by_id(created.id).unwrap();
    assert!(gone.is_not_found());
    assert_eq!(client.transport().record_count(), 0);
}

/// Test: domain errors come back as envelopes
#[test]
fn test_domain_errors_are_envelopes() {
    let mut registry = FakeRegistry::legacy();
    registry.seed(wire_record("BRTST2600002", "Existente"));
    let mut client = logged_in_client(registry);

    let duplicate = client.create(&Phonogram::new("BRTST2600002", "Outra")).unwrap();
    assert!(!duplicate.is_success());
    assert_eq!(duplicate.status, 409);
    assert_eq!(duplicate.error_code(), Some("DUPLICATE_ISRC"));

    let invalid = client.create(&Phonogram::new("BRTST2600003", " ")).unwrap();
    assert_eq!(invalid.error_code(), Some("VALIDATION_ERROR"));
    assert_eq!(
        invalid.error().unwrap().details(),
        Some(&json!(["titulo é obrigatório"]))
    );

    let missing = client.get_by_isrc("BRTST2699999").unwrap();
    assert!(missing.is_not_found());
}

/// Test: list filters and stats
#[test]
fn test_list_filters_and_stats() {
    let mut registry = FakeRegistry::legacy();
    registry.seed(wire_record("BRTST2600010", "Rock Nacional"));
    registry.seed(wire_record("BRTST2600011", "Samba"));
    let mut accepted = wire_record("BRTST2600012", "Rock Pesado");
    accepted["status_ecad"] = json!("ACEITO");
    registry.seed(accepted);
    let mut client = logged_in_client(registry);

    let rock = client
        .list(&ListQuery::default().with_search("rock"))
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(rock.items.len(), 2);

    let accepted_rock = client
        .list(
            &ListQuery::default()
                .with_search("rock")
                .with_status(EcadStatus::Aceito),
        )
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(accepted_rock.items.len(), 1);
    assert_eq!(accepted_rock.items[0].isrc, "BRTST2600012");

    let all = client.list(&ListQuery::new(1, 2)).unwrap();
    let pagination = all.pagination().unwrap();
    assert_eq!(pagination.total, 3);
    assert_eq!(pagination.pages, 2);
    assert!(pagination.has_next);

    let stats = client.stats().unwrap().into_data().unwrap();
    assert_eq!(stats["total_fonogramas"], 3);
    assert_eq!(stats["por_status"]["ACEITO"], 1);
}

/// Test: unknown fields survive a round trip through the client
#[test]
fn test_unknown_fields_pass_through() {
    let mut client = logged_in_client(FakeRegistry::legacy());

    let mut record = Phonogram::new("BRTST2600020", "Com Álbum");
    record.extra.insert("album".into(), json!("Disco Teste"));
    record.extra.insert("observacoes".into(), json!("lado B"));
    client.create(&record).unwrap();

    let stored = client.get_by_isrc("BRTST2600020").unwrap().into_data().unwrap();
    assert_eq!(stored.extra.get("album"), Some(&json!("Disco Teste")));
    assert_eq!(stored.extra.get("observacoes"), Some(&json!("lado B")));
}
