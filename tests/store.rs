//! Store-level tests: validation ordering, cascade deletes, and the
//! uniqueness probe, all against an in-memory database.

mod common;

use common::test_store;
use superheroes_api::{AppError, Strength, ValidationError};

const FLIGHT_DESC: &str =
    "gives the wielder the ability to fly through the skies at supersonic speed";

#[tokio::test]
async fn short_description_is_rejected_before_insert() {
    let store = test_store().await;
    let err = store.insert_power("flight", "too short").await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Invalid(ValidationError::DescriptionTooShort)
    ));
    assert!(store.list_powers().await.unwrap().is_empty());
}

#[tokio::test]
async fn short_description_update_leaves_row_unchanged() {
    let store = test_store().await;
    let power = store.insert_power("flight", FLIGHT_DESC).await.unwrap();

    let err = store
        .update_power_description(power.id, "nineteen chars long")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Invalid(ValidationError::DescriptionTooShort)
    ));

    let stored = store.power(power.id).await.unwrap().unwrap();
    assert_eq!(stored.description, FLIGHT_DESC);
}

#[tokio::test]
async fn exactly_twenty_characters_is_accepted() {
    let store = test_store().await;
    let power = store
        .insert_power("elasticity", "twenty characters ok")
        .await
        .unwrap();
    let updated = store
        .update_power_description(power.id, "twenty characters ok")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.description, "twenty characters ok");
}

#[tokio::test]
async fn deleting_a_hero_cascades_to_links() {
    let store = test_store().await;
    let hero = store.insert_hero("Gwen Stacy", "Spider-Gwen").await.unwrap();
    let power = store.insert_power("flight", FLIGHT_DESC).await.unwrap();
    store
        .insert_link(Strength::Strong, hero.id, power.id)
        .await
        .unwrap();

    assert!(store.delete_hero(hero.id).await.unwrap());
    assert!(store.links_for_power(power.id).await.unwrap().is_empty());
    assert!(store.find_link(hero.id, power.id).await.unwrap().is_none());
    // The power itself survives.
    assert!(store.power(power.id).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_a_power_cascades_to_links() {
    let store = test_store().await;
    let hero = store.insert_hero("Kitty Pryde", "Shadowcat").await.unwrap();
    let power = store.insert_power("flight", FLIGHT_DESC).await.unwrap();
    store
        .insert_link(Strength::Average, hero.id, power.id)
        .await
        .unwrap();

    assert!(store.delete_power(power.id).await.unwrap());
    assert!(store.links_for_hero(hero.id).await.unwrap().is_empty());
    assert!(store.hero(hero.id).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_a_missing_row_reports_false() {
    let store = test_store().await;
    assert!(!store.delete_hero(9999).await.unwrap());
    assert!(!store.delete_power(9999).await.unwrap());
}

#[tokio::test]
async fn find_link_matches_exact_pair() {
    let store = test_store().await;
    let linked = store.insert_hero("Ororo Munroe", "Storm").await.unwrap();
    let other = store.insert_hero("Jean Grey", "Dark Phoenix").await.unwrap();
    let flight = store.insert_power("flight", FLIGHT_DESC).await.unwrap();
    let senses = store
        .insert_power("super human senses", "allows the wielder to use her senses at a super-human level")
        .await
        .unwrap();
    let link = store
        .insert_link(Strength::Weak, linked.id, flight.id)
        .await
        .unwrap();

    let found = store
        .find_link(linked.id, flight.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, link);
    assert!(store.find_link(linked.id, senses.id).await.unwrap().is_none());
    assert!(store.find_link(other.id, flight.id).await.unwrap().is_none());
}

#[tokio::test]
async fn insert_link_rejects_dangling_references() {
    let store = test_store().await;
    let err = store
        .insert_link(Strength::Strong, 999, 999)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::CommitFailed(_)));
    assert!(store.links_for_hero(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn clear_empties_all_tables() {
    let store = test_store().await;
    let hero = store.insert_hero("Carol Danvers", "Captain Marvel").await.unwrap();
    let power = store.insert_power("flight", FLIGHT_DESC).await.unwrap();
    store
        .insert_link(Strength::Strong, hero.id, power.id)
        .await
        .unwrap();

    store.clear().await.unwrap();
    assert!(store.list_heroes().await.unwrap().is_empty());
    assert!(store.list_powers().await.unwrap().is_empty());
    assert!(store.links_for_hero(hero.id).await.unwrap().is_empty());
}
