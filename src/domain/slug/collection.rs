// src/domain/slug/collection.rs
use std::fmt;

/// Content collections whose records carry a unique slug.
///
/// Uniqueness is scoped per collection: each one is routed under its own URL
/// prefix (`/pages`, `/posts`, `/grants`), so the same slug may live in two
/// collections at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SluggedCollection {
    Page,
    Post,
    GrantType,
}

impl SluggedCollection {
    pub const ALL: [Self; 3] = [Self::Page, Self::Post, Self::GrantType];

    /// Stable collection name used in logs and lookups.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Page => "Page",
            Self::Post => "Post",
            Self::GrantType => "GrantType",
        }
    }

    /// Human label used in user-facing messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Post => "post",
            Self::GrantType => "grant",
        }
    }

    pub const fn table(self) -> &'static str {
        match self {
            Self::Page => "pages",
            Self::Post => "posts",
            Self::GrantType => "grant_types",
        }
    }

    /// Name of the unique index backing the slug invariant for this collection.
    pub const fn slug_index(self) -> &'static str {
        match self {
            Self::Page => "pages_slug_key",
            Self::Post => "posts_slug_key",
            Self::GrantType => "grant_types_slug_key",
        }
    }

    pub fn from_slug_index(index: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug_index() == index)
    }
}

impl fmt::Display for SluggedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
