// ABOUTME: Integration tests for the health data service
// ABOUTME: Connection, consent gating, refresh semantics, and persistence reload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalPath Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{healthy_vitals, CountingProvider};
use std::collections::HashMap;
use std::sync::Arc;
use vitalpath::constants::storage_keys;
use vitalpath::errors::ErrorCode;
use vitalpath::models::HealthPlatform;
use vitalpath::providers::HealthProvider;
use vitalpath::storage::{MemoryStateStore, StateStore};
use vitalpath::HealthDataService;

fn service_with_fake(
    store: Arc<dyn StateStore>,
) -> (HealthDataService, Arc<CountingProvider>) {
    let provider = Arc::new(CountingProvider::new(
        HealthPlatform::AppleHealth,
        healthy_vitals(),
    ));
    let mut providers: HashMap<HealthPlatform, Arc<dyn HealthProvider>> = HashMap::new();
    providers.insert(HealthPlatform::AppleHealth, provider.clone());
    let service = HealthDataService::new(store, providers).unwrap();
    (service, provider)
}

#[tokio::test]
async fn connect_without_consent_skips_refresh() {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new());
    let (service, provider) = service_with_fake(store.clone());

    service.connect(HealthPlatform::AppleHealth).await.unwrap();

    assert_eq!(
        service.connected_platform().unwrap(),
        Some(HealthPlatform::AppleHealth)
    );
    assert_eq!(provider.fetch_count(), 0);
    assert!(service.vitals().unwrap().is_none());
    assert_eq!(
        store.get(storage_keys::HEALTH_PLATFORM).unwrap().as_deref(),
        Some("apple_health")
    );
}

#[tokio::test]
async fn connect_with_prior_consent_triggers_one_refresh() {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new());
    let (service, provider) = service_with_fake(store.clone());

    service.update_consent(true).await.unwrap();
    service.connect(HealthPlatform::AppleHealth).await.unwrap();

    assert_eq!(provider.fetch_count(), 1);
    assert!(service.vitals().unwrap().is_some());
    assert!(store.get(storage_keys::HEALTH_DATA).unwrap().is_some());
}

#[tokio::test]
async fn refresh_after_disconnect_is_a_no_op() {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new());
    let (service, provider) = service_with_fake(store.clone());

    service.update_consent(true).await.unwrap();
    service.connect(HealthPlatform::AppleHealth).await.unwrap();
    assert_eq!(provider.fetch_count(), 1);

    service.disconnect().unwrap();
    let result = service.refresh_vitals().await.unwrap();

    assert!(result.is_none());
    assert_eq!(provider.fetch_count(), 1);
    assert!(service.vitals().unwrap().is_none());
    assert!(store.get(storage_keys::HEALTH_DATA).unwrap().is_none());
    assert!(store.get(storage_keys::HEALTH_PLATFORM).unwrap().is_none());
}

#[tokio::test]
async fn refresh_without_consent_does_not_mutate_vitals() {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new());
    let (service, provider) = service_with_fake(store);

    service.connect(HealthPlatform::AppleHealth).await.unwrap();
    let result = service.refresh_vitals().await.unwrap();

    assert!(result.is_none());
    assert_eq!(provider.fetch_count(), 0);
    assert!(service.vitals().unwrap().is_none());
}

#[tokio::test]
async fn revoking_consent_blocks_future_refreshes() {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new());
    let (service, provider) = service_with_fake(store);

    service.update_consent(true).await.unwrap();
    service.connect(HealthPlatform::AppleHealth).await.unwrap();
    assert_eq!(provider.fetch_count(), 1);

    service.update_consent(false).await.unwrap();
    let result = service.refresh_vitals().await.unwrap();

    assert!(result.is_none());
    assert_eq!(provider.fetch_count(), 1);
    // The previously synced bag is kept; only future syncs stop
    assert!(service.vitals().unwrap().is_some());
}

#[tokio::test]
async fn granting_consent_while_connected_triggers_exactly_one_refresh() {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new());
    let (service, provider) = service_with_fake(store);

    service.connect(HealthPlatform::AppleHealth).await.unwrap();
    assert_eq!(provider.fetch_count(), 0);

    service.update_consent(true).await.unwrap();
    assert_eq!(provider.fetch_count(), 1);
}

#[tokio::test]
async fn granting_consent_while_disconnected_does_not_fetch() {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new());
    let (service, provider) = service_with_fake(store);

    service.update_consent(true).await.unwrap();
    assert_eq!(provider.fetch_count(), 0);
}

#[tokio::test]
async fn refresh_replaces_the_bag_wholesale() {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new());
    let (service, _provider) = service_with_fake(store);

    service.update_consent(true).await.unwrap();
    service.connect(HealthPlatform::AppleHealth).await.unwrap();
    let first = service.vitals().unwrap().unwrap();

    let second = service.refresh_vitals().await.unwrap().unwrap();
    assert!(second.last_synced >= first.last_synced);
    assert_eq!(service.vitals().unwrap().unwrap(), second);
}

#[tokio::test]
async fn connecting_an_unregistered_platform_fails() {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new());
    let (service, _provider) = service_with_fake(store);

    let err = service.connect(HealthPlatform::GoogleFit).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ProviderNotRegistered);
    assert!(service.connected_platform().unwrap().is_none());
}

#[tokio::test]
async fn service_reload_sees_persisted_state() {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new());
    {
        let (service, _provider) = service_with_fake(store.clone());
        service.update_consent(true).await.unwrap();
        service.connect(HealthPlatform::AppleHealth).await.unwrap();
    }

    let (reloaded, provider) = service_with_fake(store);
    assert_eq!(
        reloaded.connected_platform().unwrap(),
        Some(HealthPlatform::AppleHealth)
    );
    assert!(reloaded.has_consented().unwrap());
    assert!(reloaded.vitals().unwrap().is_some());
    assert_eq!(provider.fetch_count(), 0);
}

#[tokio::test]
async fn corrupt_persisted_vitals_are_discarded() {
    let store: Arc<dyn StateStore> = Arc::new(MemoryStateStore::new());
    store.set(storage_keys::HEALTH_DATA, "{not json").unwrap();
    store.set(storage_keys::HEALTH_PLATFORM, "apple_health").unwrap();

    let (service, _provider) = service_with_fake(store);
    assert!(service.vitals().unwrap().is_none());
    assert_eq!(
        service.connected_platform().unwrap(),
        Some(HealthPlatform::AppleHealth)
    );
}
