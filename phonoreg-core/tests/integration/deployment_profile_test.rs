//! Deployment Profile Integration Tests
//!
//! The same workflow against both registry deployments.

use crate::common::fake_registry::{FakeRegistry, ADMIN_EMAIL, ADMIN_PASSWORD};
use crate::common::fixtures::sample_phonogram;
use phonoreg_core::{ApiProfile, ListQuery, RegistryClient};

fn run_workflow(registry: FakeRegistry, profile: ApiProfile) {
    let mut client = RegistryClient::new(registry, profile);

    assert!(client.health_check().unwrap().is_success());
    assert!(client.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap().is_success());

    for n in 0..3 {
        let isrc = format!("BRTST260010{}", n);
        assert!(client.create(&sample_phonogram(&isrc)).unwrap().is_success());
    }

    let page = client
        .list(&ListQuery::new(1, 2))
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(page.items.len(), 2);
    let pagination = page.pagination.unwrap();
    assert_eq!(pagination.total, 3);
    assert_eq!(pagination.per_page, 2);

    let stats = client.stats().unwrap();
    assert!(stats.is_success());

    assert!(client.logout().unwrap().is_success());
    assert!(!client.session().is_authenticated());
}

/// Test: legacy deployment (bare array + meta)
#[test]
fn test_legacy_deployment_workflow() {
    run_workflow(FakeRegistry::legacy(), ApiProfile::legacy());
}

/// Test: v1 deployment (items + pagination object)
#[test]
fn test_v1_deployment_workflow() {
    run_workflow(FakeRegistry::v1(), ApiProfile::v1());
}

/// Test: a client pointed at the wrong deployment gets envelopes, not errors
#[test]
fn test_profile_mismatch_surfaces_as_not_found() {
    let mut client = RegistryClient::new(FakeRegistry::v1(), ApiProfile::legacy());
    client.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();

    let envelope = client.list(&ListQuery::default()).unwrap();
    assert!(envelope.is_not_found());
}
