// tests/support/builders.rs
use grant_cms::application::commands::{
    HeroInput,
    grants::{CreateGrantTypeCommand, GrantCardInput},
    pages::CreatePageCommand,
    posts::{CreatePostCommand, PostFields},
};
use grant_cms::domain::{
    content::PublishState,
    grant::{BadgeColor, CardBackground, Visibility},
};
use serde_json::{Value, json};

pub const MISSING_SLUG: &str = "Slug is required. Please provide a title to auto-generate a slug or enter a custom slug.";
pub const UNVERIFIABLE_SLUG: &str = "Unable to validate slug uniqueness. Please try again.";

pub fn conflict_message(label: &str) -> String {
    format!(
        "This slug is already used by another {label}. Please choose a different slug or modify the title to generate a unique slug."
    )
}

pub fn hero() -> HeroInput {
    HeroInput {
        heading: Some("Need support?".into()),
        subheading: None,
        cta_button_text: "Apply".into(),
        cta_button_url: "/apply".into(),
    }
}

pub fn create_page(title: &str, slug: Option<&str>) -> CreatePageCommand {
    CreatePageCommand {
        title: title.into(),
        slug: slug.map(Into::into),
        hero: hero(),
        publish_state: PublishState::Published,
    }
}

pub fn post_fields(title: &str, slug: Option<&str>) -> PostFields {
    PostFields {
        title: title.into(),
        slug: slug.map(Into::into),
        banner: None,
        content: None,
        author_id: None,
        tag_ids: Vec::new(),
        publish_state: PublishState::Published,
    }
}

pub fn create_post(title: &str, slug: Option<&str>) -> CreatePostCommand {
    CreatePostCommand {
        fields: post_fields(title, slug),
    }
}

pub fn grant_card(amount: &str, availability: &str) -> GrantCardInput {
    GrantCardInput {
        description: "Support for activists in crisis".into(),
        grant_amount: amount.into(),
        time_frame: "2 weeks".into(),
        availability: availability.into(),
        common_uses: "Relocation, medical costs".into(),
        badge_text: "Open".into(),
        badge_color: BadgeColor::default(),
        background_color: CardBackground::default(),
    }
}

pub fn create_grant(title: &str, slug: Option<&str>, visibility: Visibility) -> CreateGrantTypeCommand {
    CreateGrantTypeCommand {
        title: title.into(),
        slug: slug.map(Into::into),
        card: grant_card("Up to $5,000", "Year-round"),
        grant_purpose: "Rapid response".into(),
        visibility,
    }
}

pub fn page_json(title: &str, slug: Option<&str>) -> Value {
    let mut body = json!({
        "title": title,
        "hero_heading": "Need support?",
        "cta_button_text": "Apply",
        "cta_button_url": "/apply",
        "publish_state": "published"
    });
    if let Some(slug) = slug {
        body["slug"] = json!(slug);
    }
    body
}

pub fn grant_json(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Support for activists in crisis",
        "grant_amount": "Up to $5,000",
        "time_frame": "2 weeks",
        "availability": "Year-round",
        "common_uses": "Relocation",
        "badge_text": "Open",
        "grant_purpose": "Rapid response"
    })
}
