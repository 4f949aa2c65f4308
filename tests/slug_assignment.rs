use grant_cms::application::{
    commands::pages::UpdatePageCommand,
    error::{ApplicationError, FieldErrorKind},
    queries::slugs::PreviewSlugQuery,
};
use grant_cms::domain::{grant::Visibility, slug::SluggedCollection};
use std::sync::Arc;

mod support;

use support::{
    InMemoryStore, MISSING_SLUG, UNVERIFIABLE_SLUG, build_services, conflict_message,
    create_grant, create_page, create_post, hero,
};

fn expect_slug_error(err: &ApplicationError, kind: FieldErrorKind, message: &str) {
    let field = err.as_field().expect("field-level error");
    assert_eq!(field.field, "slug");
    assert_eq!(field.kind, kind);
    assert_eq!(field.message, message);
}

/// タイトルからスラグが生成されることを確認する
#[tokio::test]
async fn derives_slug_from_title() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    let page = services
        .page_commands
        .create_page(create_page("Hello, World!  Support", None))
        .await
        .unwrap();

    assert_eq!(page.slug, "hello-world-support");
}

#[tokio::test]
async fn explicit_slug_wins_and_is_trimmed() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    let page = services
        .page_commands
        .create_page(create_page("Completely different", Some("  about-us  ")))
        .await
        .unwrap();

    assert_eq!(page.slug, "about-us");
}

#[tokio::test]
async fn blank_explicit_slug_falls_back_to_title() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    let page = services
        .page_commands
        .create_page(create_page("Emergency Relief", Some("   ")))
        .await
        .unwrap();

    assert_eq!(page.slug, "emergency-relief");
}

#[tokio::test]
async fn symbol_only_title_is_rejected_and_nothing_written() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    let err = services
        .page_commands
        .create_page(create_page("???", None))
        .await
        .unwrap_err();

    expect_slug_error(&err, FieldErrorKind::Invalid, MISSING_SLUG);
    assert_eq!(store.page_count(), 0);
}

/// 同一コレクション内で同じスラグは競合する
#[tokio::test]
async fn second_record_with_same_slug_conflicts() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    services
        .page_commands
        .create_page(create_page("About Us", None))
        .await
        .unwrap();
    let err = services
        .page_commands
        .create_page(create_page("About us!", None))
        .await
        .unwrap_err();

    expect_slug_error(&err, FieldErrorKind::Conflict, &conflict_message("page"));
    assert_eq!(store.page_count(), 1);
}

#[tokio::test]
async fn case_variant_explicit_slug_conflicts() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    services
        .page_commands
        .create_page(create_page("About Us", None))
        .await
        .unwrap();
    let err = services
        .page_commands
        .create_page(create_page("Another", Some("About-Us")))
        .await
        .unwrap_err();

    expect_slug_error(&err, FieldErrorKind::Conflict, &conflict_message("page"));
}

#[tokio::test]
async fn same_slug_may_exist_in_different_collections() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    let page = services
        .page_commands
        .create_page(create_page("Grants 2024", None))
        .await
        .unwrap();
    let post = services
        .post_commands
        .create_post(create_post("Grants 2024", None))
        .await
        .unwrap();
    let grant = services
        .grant_commands
        .create_grant_type(create_grant("Grants 2024", None, Visibility::Visible))
        .await
        .unwrap();

    assert_eq!(page.slug, "grants-2024");
    assert_eq!(post.slug, "grants-2024");
    assert_eq!(grant.slug, "grants-2024");
}

#[tokio::test]
async fn conflict_message_names_the_collection() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    services
        .post_commands
        .create_post(create_post("Spring Update", None))
        .await
        .unwrap();
    let post_err = services
        .post_commands
        .create_post(create_post("Spring update", None))
        .await
        .unwrap_err();
    expect_slug_error(&post_err, FieldErrorKind::Conflict, &conflict_message("post"));

    services
        .grant_commands
        .create_grant_type(create_grant("Rapid Response", None, Visibility::Hidden))
        .await
        .unwrap();
    let grant_err = services
        .grant_commands
        .create_grant_type(create_grant("Other", Some("rapid-response"), Visibility::Visible))
        .await
        .unwrap_err();
    expect_slug_error(&grant_err, FieldErrorKind::Conflict, &conflict_message("grant"));
}

/// 自身のスラグを保持したままの更新は成功する
#[tokio::test]
async fn update_keeping_own_slug_succeeds() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    let page = services
        .page_commands
        .create_page(create_page("About Us", None))
        .await
        .unwrap();

    for slug in [None, Some("about-us".to_string()), Some("ABOUT-US ".to_string())] {
        let updated = services
            .page_commands
            .update_page(UpdatePageCommand {
                id: page.id,
                title: "About Us (updated)".into(),
                slug,
                hero: hero(),
                publish_state: page.publish_state,
            })
            .await
            .unwrap();
        assert!(updated.slug.eq_ignore_ascii_case("about-us"));
        assert_eq!(updated.title, "About Us (updated)");
    }
}

#[tokio::test]
async fn empty_slug_on_update_regenerates_from_title() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    let page = services
        .page_commands
        .create_page(create_page("Old Title", None))
        .await
        .unwrap();
    let updated = services
        .page_commands
        .update_page(UpdatePageCommand {
            id: page.id,
            title: "New Title".into(),
            slug: Some(String::new()),
            hero: hero(),
            publish_state: page.publish_state,
        })
        .await
        .unwrap();

    assert_eq!(updated.slug, "new-title");
}

#[tokio::test]
async fn update_onto_another_records_slug_conflicts() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    services
        .page_commands
        .create_page(create_page("First", None))
        .await
        .unwrap();
    let second = services
        .page_commands
        .create_page(create_page("Second", None))
        .await
        .unwrap();

    let err = services
        .page_commands
        .update_page(UpdatePageCommand {
            id: second.id,
            title: "Second".into(),
            slug: Some("first".into()),
            hero: hero(),
            publish_state: second.publish_state,
        })
        .await
        .unwrap_err();

    expect_slug_error(&err, FieldErrorKind::Conflict, &conflict_message("page"));
}

/// 検索失敗時は書き込まずにエラーを返す（フェイルクローズ）
#[tokio::test]
async fn failed_lookup_blocks_the_write() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);
    store.fail_slug_lookups(true);

    let err = services
        .page_commands
        .create_page(create_page("About Us", None))
        .await
        .unwrap_err();

    expect_slug_error(&err, FieldErrorKind::Unavailable, UNVERIFIABLE_SLUG);
    assert_eq!(store.page_count(), 0);
    assert_eq!(store.slug_lookup_calls(), 1);
}

#[tokio::test]
async fn index_violation_after_passing_precheck_reports_conflict() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    services
        .grant_commands
        .create_grant_type(create_grant("Relief Fund", None, Visibility::Visible))
        .await
        .unwrap();

    store.blind_slug_lookups(true);
    let err = services
        .grant_commands
        .create_grant_type(create_grant("Relief Fund", None, Visibility::Visible))
        .await
        .unwrap_err();

    expect_slug_error(&err, FieldErrorKind::Conflict, &conflict_message("grant"));
    assert_eq!(store.grant_count(), 1);
}

#[tokio::test]
async fn preview_reports_availability() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    let free = services
        .slug_queries
        .preview_slug(PreviewSlugQuery {
            collection: SluggedCollection::Post,
            title: "Hello, World!  Support".into(),
            record_id: None,
        })
        .await
        .unwrap();
    assert_eq!(free.slug, "hello-world-support");
    assert!(free.available);

    let post = services
        .post_commands
        .create_post(create_post("Hello, World!  Support", None))
        .await
        .unwrap();

    let taken = services
        .slug_queries
        .preview_slug(PreviewSlugQuery {
            collection: SluggedCollection::Post,
            title: "Hello World Support".into(),
            record_id: None,
        })
        .await
        .unwrap();
    assert!(!taken.available);

    let own = services
        .slug_queries
        .preview_slug(PreviewSlugQuery {
            collection: SluggedCollection::Post,
            title: "Hello World Support".into(),
            record_id: Some(post.id),
        })
        .await
        .unwrap();
    assert!(own.available);

    let other_collection = services
        .slug_queries
        .preview_slug(PreviewSlugQuery {
            collection: SluggedCollection::Page,
            title: "Hello World Support".into(),
            record_id: None,
        })
        .await
        .unwrap();
    assert!(other_collection.available);
}

#[tokio::test]
async fn preview_of_symbol_only_title_is_missing() {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(&store);

    let err = services
        .slug_queries
        .preview_slug(PreviewSlugQuery {
            collection: SluggedCollection::Page,
            title: "!!!".into(),
            record_id: None,
        })
        .await
        .unwrap_err();

    expect_slug_error(&err, FieldErrorKind::Invalid, MISSING_SLUG);
}
