mod common;

use common::{Fixture, lang, master, web};
use publish_model::{Field, Item};
use publish_pipeline::{ItemStore, PublishOptions, TargetResolver};
use publish_types::{FieldId, ItemId};

fn resolver(fx: &Fixture) -> TargetResolver {
    TargetResolver::new(fx.source.clone(), fx.target.clone())
}

fn restricted(targets: &str) -> Item {
    Item::new(ItemId::new(), "Home", lang("en"), master())
        .with_field(Field::shared(FieldId::PUBLISHING_TARGETS, targets))
}

fn options(targets: &[&str]) -> PublishOptions {
    targets
        .iter()
        .fold(PublishOptions::new(master(), web(), lang("en")), |o, t| o.with_publishing_target(*t))
}

// ── Publishing targets ───────────────────────────────────────────

#[test]
fn unrestricted_item_matches_every_target() {
    let item = Item::new(ItemId::new(), "Home", lang("en"), master());
    assert!(TargetResolver::matches_publishing_targets(&item, &options(&[])));
    assert!(TargetResolver::matches_publishing_targets(&item, &options(&["internet"])));
}

#[test]
fn empty_targets_field_matches_every_target() {
    assert!(TargetResolver::matches_publishing_targets(&restricted(""), &options(&["internet"])));
    assert!(TargetResolver::matches_publishing_targets(&restricted(""), &options(&[])));
}

#[test]
fn separator_only_targets_field_matches_nothing() {
    for raw in ["|", "||"] {
        assert!(!TargetResolver::matches_publishing_targets(&restricted(raw), &options(&["internet"])));
        assert!(!TargetResolver::matches_publishing_targets(&restricted(raw), &options(&[])));
    }
}

#[test]
fn restricted_item_matches_listed_target() {
    let item = restricted("preview|internet");
    assert!(TargetResolver::matches_publishing_targets(&item, &options(&["internet"])));
    assert!(TargetResolver::matches_publishing_targets(&item, &options(&["other", "preview"])));
}

#[test]
fn restricted_item_rejects_unlisted_target() {
    let item = restricted("preview");
    assert!(!TargetResolver::matches_publishing_targets(&item, &options(&["internet"])));
}

#[test]
fn restricted_item_rejects_when_no_targets_requested() {
    assert!(!TargetResolver::matches_publishing_targets(&restricted("preview"), &options(&[])));
}

#[test]
fn target_match_is_case_sensitive() {
    let item = restricted("{8E080626-DDC3-4EF4-A1D1-F0BE4A200254}");
    assert!(!TargetResolver::matches_publishing_targets(
        &item,
        &options(&["{8e080626-ddc3-4ef4-a1d1-f0be4a200254}"])
    ));
    assert!(TargetResolver::matches_publishing_targets(
        &item,
        &options(&["{8E080626-DDC3-4EF4-A1D1-F0BE4A200254}"])
    ));
}

// ── Lookups ──────────────────────────────────────────────────────

#[tokio::test]
async fn source_item_is_loaded_in_requested_language() {
    let fx = Fixture::new();
    let id = ItemId::new();
    fx.source.put_version(&fx.page_version(id, "en", 1, master()), true).await.unwrap();
    fx.source.put_version(&fx.page_version(id, "da", 4, master()), true).await.unwrap();

    let item = resolver(&fx).get_source_item(&fx.context(id)).await.unwrap().unwrap();

    assert_eq!(item.language, lang("en"));
    assert_eq!(item.version, Some(common::version(1)));
    assert_eq!(item.database, master());
}

#[tokio::test]
async fn missing_source_item_is_none() {
    let fx = Fixture::new();
    assert!(resolver(&fx).get_source_item(&fx.context(ItemId::new())).await.unwrap().is_none());
}

#[tokio::test]
async fn version_to_publish_comes_from_source_store() {
    let fx = Fixture::new();
    let id = ItemId::new();
    fx.source.put_version(&fx.page_version(id, "en", 1, master()), true).await.unwrap();
    fx.target.put_version(&fx.page_version(id, "en", 7, web()), true).await.unwrap();
    let r = resolver(&fx);

    let source = r.get_source_item(&fx.context(id)).await.unwrap().unwrap();
    let version = r.get_version_to_publish(&source, &web()).await.unwrap().unwrap();

    assert_eq!(version.version, Some(common::version(1)));
    assert_eq!(version.database, master());
}

#[tokio::test]
async fn target_item_and_versions() {
    let fx = Fixture::new();
    let id = ItemId::new();
    fx.target.put_version(&fx.page_version(id, "en", 1, web()), true).await.unwrap();
    fx.target.put_version(&fx.page_version(id, "da", 1, web()), true).await.unwrap();
    let r = resolver(&fx);

    let target = r.get_target_item(&id, &lang("en")).await.unwrap().unwrap();
    let versions = r.target_versions(&target).await.unwrap();

    assert_eq!(target.database, web());
    assert_eq!(versions.len(), 2);
    assert!(versions.iter().any(|v| v.language == lang("da")));
    assert!(r.get_target_item(&ItemId::new(), &lang("en")).await.unwrap().is_none());
}

#[test]
fn resolver_exposes_its_stores() {
    let fx = Fixture::new();
    let r = TargetResolver::new(fx.source.clone(), fx.target.clone());
    assert_eq!(r.source().database(), &master());
    assert_eq!(r.target().database(), &web());
}
