// tests/support/mocks/store.rs
//! In-memory stand-in for every repository, enforcing the same per-collection
//! slug uniqueness and unique email that the Postgres indexes do.
use async_trait::async_trait;
use grant_cms::domain::{
    content::RecordId,
    errors::{DomainError, DomainResult},
    grant::{
        GrantType, GrantTypeReadRepository, GrantTypeUpdate, GrantTypeWriteRepository,
        NewGrantType, Visibility,
    },
    home_page::{HomePage, HomePageRepository},
    page::{NewPage, Page, PageReadRepository, PageUpdate, PageWriteRepository},
    post::{NewPost, Post, PostReadRepository, PostUpdate, PostWriteRepository},
    slug::{Slug, SlugLookup, SlugOwner, SluggedCollection},
    tag::{Tag, TagId, TagName, TagRepository},
    user::{NewUser, User, UserId, UserRepository},
};
use std::collections::BTreeMap;
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

#[derive(Default)]
struct State {
    next_id: i64,
    pages: BTreeMap<i64, Page>,
    posts: BTreeMap<i64, Post>,
    grants: BTreeMap<i64, GrantType>,
    home: Option<HomePage>,
    users: BTreeMap<i64, User>,
    tags: BTreeMap<i64, Tag>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn owners(&self, collection: SluggedCollection) -> Vec<SlugOwner> {
        match collection {
            SluggedCollection::Page => self
                .pages
                .values()
                .map(|p| SlugOwner { id: p.id, slug: p.slug.clone() })
                .collect(),
            SluggedCollection::Post => self
                .posts
                .values()
                .map(|p| SlugOwner { id: p.id, slug: p.slug.clone() })
                .collect(),
            SluggedCollection::GrantType => self
                .grants
                .values()
                .map(|g| SlugOwner { id: g.id, slug: g.slug.clone() })
                .collect(),
        }
    }

    /// Mirrors the unique index on `lower(btrim(slug))`.
    fn check_index(
        &self,
        collection: SluggedCollection,
        slug: &Slug,
        exclude: Option<RecordId>,
    ) -> DomainResult<()> {
        let clash = self
            .owners(collection)
            .iter()
            .any(|owner| Some(owner.id) != exclude && owner.slug.matches(slug));
        if clash {
            Err(DomainError::DuplicateSlug(collection))
        } else {
            Ok(())
        }
    }
}

fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (chrono::DateTime<chrono::Utc>, i64)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    fail_slug_lookups: AtomicBool,
    blind_slug_lookups: AtomicBool,
    slug_lookup_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every slug lookup fail as if the database were unreachable.
    pub fn fail_slug_lookups(&self, fail: bool) {
        self.fail_slug_lookups.store(fail, Ordering::SeqCst);
    }

    /// Make slug lookups report nothing, as when a concurrent writer commits
    /// between the pre-check and the insert. Writes still hit the index.
    pub fn blind_slug_lookups(&self, blind: bool) {
        self.blind_slug_lookups.store(blind, Ordering::SeqCst);
    }

    pub fn slug_lookup_calls(&self) -> usize {
        self.slug_lookup_calls.load(Ordering::SeqCst)
    }

    pub fn page_count(&self) -> usize {
        self.state.lock().unwrap().pages.len()
    }

    pub fn post_count(&self) -> usize {
        self.state.lock().unwrap().posts.len()
    }

    pub fn grant_count(&self) -> usize {
        self.state.lock().unwrap().grants.len()
    }

    pub fn stored_password_hash(&self, email: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| u.email.as_str() == email)
            .map(|u| u.password_hash.as_str().to_owned())
    }
}

#[async_trait]
impl SlugLookup for InMemoryStore {
    async fn find_by_slug(
        &self,
        collection: SluggedCollection,
        slug: &Slug,
    ) -> DomainResult<Vec<SlugOwner>> {
        self.slug_lookup_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_slug_lookups.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        if self.blind_slug_lookups.load(Ordering::SeqCst) {
            return Ok(Vec::new());
        }
        let state = self.state.lock().unwrap();
        Ok(state
            .owners(collection)
            .into_iter()
            .filter(|owner| owner.slug.matches(slug))
            .collect())
    }
}

/* -------------------------------- Pages -------------------------------- */

#[async_trait]
impl PageWriteRepository for InMemoryStore {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let mut state = self.state.lock().unwrap();
        state.check_index(SluggedCollection::Page, &page.slug, None)?;
        let id = RecordId(state.next_id());
        let stored = Page {
            id,
            title: page.title,
            slug: page.slug,
            hero: page.hero,
            publish_state: page.publish_state,
            created_at: page.created_at,
            updated_at: page.updated_at,
        };
        state.pages.insert(id.0, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let mut state = self.state.lock().unwrap();
        state.check_index(SluggedCollection::Page, &update.slug, Some(update.id))?;
        let page = state
            .pages
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("page not found".into()))?;
        page.title = update.title;
        page.slug = update.slug;
        page.hero = update.hero;
        page.publish_state = update.publish_state;
        page.updated_at = update.updated_at;
        Ok(page.clone())
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .pages
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("page not found".into()))
    }
}

#[async_trait]
impl PageReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Page>> {
        Ok(self.state.lock().unwrap().pages.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        let state = self.state.lock().unwrap();
        Ok(state.pages.values().find(|p| p.slug.matches(slug)).cloned())
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Page>> {
        let state = self.state.lock().unwrap();
        let mut pages: Vec<Page> = state
            .pages
            .values()
            .filter(|p| include_drafts || p.publish_state.is_published())
            .cloned()
            .collect();
        newest_first(&mut pages, |p| (p.updated_at, p.id.0));
        Ok(pages)
    }
}

/* -------------------------------- Posts -------------------------------- */

#[async_trait]
impl PostWriteRepository for InMemoryStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        state.check_index(SluggedCollection::Post, &post.slug, None)?;
        let id = RecordId(state.next_id());
        let stored = Post {
            id,
            title: post.title,
            slug: post.slug,
            banner: post.banner,
            content: post.content,
            author_id: post.author_id,
            tag_ids: post.tag_ids,
            publish_state: post.publish_state,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        state.posts.insert(id.0, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        state.check_index(SluggedCollection::Post, &update.slug, Some(update.id))?;
        let post = state
            .posts
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        post.title = update.title;
        post.slug = update.slug;
        post.banner = update.banner;
        post.content = update.content;
        post.author_id = update.author_id;
        post.tag_ids = update.tag_ids;
        post.publish_state = update.publish_state;
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .posts
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Post>> {
        Ok(self.state.lock().unwrap().posts.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.values().find(|p| p.slug.matches(slug)).cloned())
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Post>> {
        let state = self.state.lock().unwrap();
        let mut posts: Vec<Post> = state
            .posts
            .values()
            .filter(|p| include_drafts || p.publish_state.is_published())
            .cloned()
            .collect();
        newest_first(&mut posts, |p| (p.updated_at, p.id.0));
        Ok(posts)
    }
}

/* -------------------------------- Grant types -------------------------------- */

#[async_trait]
impl GrantTypeWriteRepository for InMemoryStore {
    async fn insert(&self, grant: NewGrantType) -> DomainResult<GrantType> {
        let mut state = self.state.lock().unwrap();
        state.check_index(SluggedCollection::GrantType, &grant.slug, None)?;
        let id = RecordId(state.next_id());
        let stored = GrantType {
            id,
            title: grant.title,
            slug: grant.slug,
            card: grant.card,
            grant_purpose: grant.grant_purpose,
            visibility: grant.visibility,
            created_at: grant.created_at,
            updated_at: grant.updated_at,
        };
        state.grants.insert(id.0, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: GrantTypeUpdate) -> DomainResult<GrantType> {
        let mut state = self.state.lock().unwrap();
        state.check_index(SluggedCollection::GrantType, &update.slug, Some(update.id))?;
        let grant = state
            .grants
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("grant type not found".into()))?;
        grant.title = update.title;
        grant.slug = update.slug;
        grant.card = update.card;
        grant.grant_purpose = update.grant_purpose;
        grant.visibility = update.visibility;
        grant.updated_at = update.updated_at;
        Ok(grant.clone())
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .grants
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("grant type not found".into()))
    }
}

#[async_trait]
impl GrantTypeReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<GrantType>> {
        Ok(self.state.lock().unwrap().grants.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<GrantType>> {
        let state = self.state.lock().unwrap();
        Ok(state.grants.values().find(|g| g.slug.matches(slug)).cloned())
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<GrantType>> {
        let state = self.state.lock().unwrap();
        let mut grants: Vec<GrantType> = state
            .grants
            .values()
            .filter(|g| include_hidden || g.visibility == Visibility::Visible)
            .cloned()
            .collect();
        newest_first(&mut grants, |g| (g.updated_at, g.id.0));
        Ok(grants)
    }
}

/* -------------------------------- Home page -------------------------------- */

#[async_trait]
impl HomePageRepository for InMemoryStore {
    async fn get(&self) -> DomainResult<Option<HomePage>> {
        Ok(self.state.lock().unwrap().home.clone())
    }

    async fn save(&self, home: HomePage) -> DomainResult<HomePage> {
        let mut state = self.state.lock().unwrap();
        let created_at = state.home.as_ref().map_or(home.created_at, |h| h.created_at);
        let stored = HomePage { created_at, ..home };
        state.home = Some(stored.clone());
        Ok(stored)
    }

    async fn insert_if_absent(&self, home: HomePage) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        if state.home.is_some() {
            return Ok(false);
        }
        state.home = Some(home);
        Ok(true)
    }
}

/* -------------------------------- Users & tags -------------------------------- */

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        let wanted = new_user.email.as_str().to_lowercase();
        if state
            .users
            .values()
            .any(|u| u.email.as_str().to_lowercase() == wanted)
        {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        let id = UserId::new(state.next_id())?;
        let user = User {
            id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
        };
        state.users.insert(id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&id.0).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.state.lock().unwrap().users.values().cloned().collect())
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn insert(&self, name: TagName) -> DomainResult<Tag> {
        let mut state = self.state.lock().unwrap();
        let id = TagId::new(state.next_id())?;
        let tag = Tag { id, name };
        state.tags.insert(id.0, tag.clone());
        Ok(tag)
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        Ok(self.state.lock().unwrap().tags.values().cloned().collect())
    }

    async fn find_existing(&self, ids: &[TagId]) -> DomainResult<Vec<TagId>> {
        let state = self.state.lock().unwrap();
        Ok(ids
            .iter()
            .copied()
            .filter(|id| state.tags.contains_key(&id.0))
            .collect())
    }
}
