// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            grants::GrantTypeCommandService, home_page::HomePageCommandService,
            pages::PageCommandService, posts::PostCommandService, tags::TagCommandService,
            users::UserCommandService,
        },
        ports::{ClockPort, PasswordHasherPort, SlugGeneratorPort},
        queries::{
            grants::GrantTypeQueryService, home_page::HomePageQueryService,
            pages::PageQueryService, posts::PostQueryService, slugs::SlugQueryService,
            users::DirectoryQueryService,
        },
    },
    domain::{
        grant::{GrantTypeReadRepository, GrantTypeWriteRepository},
        home_page::HomePageRepository,
        page::{PageReadRepository, PageWriteRepository},
        post::{PostReadRepository, PostWriteRepository},
        slug::{SlugAssignmentService, SlugLookup},
        tag::TagRepository,
        user::UserRepository,
    },
};

/// Storage adapters the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub page_write: Arc<dyn PageWriteRepository>,
    pub page_read: Arc<dyn PageReadRepository>,
    pub post_write: Arc<dyn PostWriteRepository>,
    pub post_read: Arc<dyn PostReadRepository>,
    pub grant_write: Arc<dyn GrantTypeWriteRepository>,
    pub grant_read: Arc<dyn GrantTypeReadRepository>,
    pub home_page: Arc<dyn HomePageRepository>,
    pub users: Arc<dyn UserRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub slug_lookup: Arc<dyn SlugLookup>,
}

pub struct ApplicationServices {
    pub page_commands: Arc<PageCommandService>,
    pub page_queries: Arc<PageQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub grant_commands: Arc<GrantTypeCommandService>,
    pub grant_queries: Arc<GrantTypeQueryService>,
    pub home_page_commands: Arc<HomePageCommandService>,
    pub home_page_queries: Arc<HomePageQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub tag_commands: Arc<TagCommandService>,
    pub directory_queries: Arc<DirectoryQueryService>,
    pub slug_queries: Arc<SlugQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<PasswordHasherPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        let slugs = Arc::new(SlugAssignmentService::new(
            Arc::clone(&repos.slug_lookup),
            slugger,
        ));

        let page_commands = Arc::new(PageCommandService::new(
            Arc::clone(&repos.page_write),
            Arc::clone(&repos.page_read),
            Arc::clone(&slugs),
            Arc::clone(&clock),
        ));
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&repos.post_write),
            Arc::clone(&repos.post_read),
            Arc::clone(&repos.users),
            Arc::clone(&repos.tags),
            Arc::clone(&slugs),
            Arc::clone(&clock),
        ));
        let grant_commands = Arc::new(GrantTypeCommandService::new(
            Arc::clone(&repos.grant_write),
            Arc::clone(&repos.grant_read),
            Arc::clone(&slugs),
            Arc::clone(&clock),
        ));
        let home_page_commands = Arc::new(HomePageCommandService::new(
            Arc::clone(&repos.home_page),
            Arc::clone(&clock),
        ));
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            password_hasher,
            Arc::clone(&clock),
        ));
        let tag_commands = Arc::new(TagCommandService::new(Arc::clone(&repos.tags)));

        Self {
            page_commands,
            page_queries: Arc::new(PageQueryService::new(Arc::clone(&repos.page_read))),
            post_commands,
            post_queries: Arc::new(PostQueryService::new(Arc::clone(&repos.post_read))),
            grant_commands,
            grant_queries: Arc::new(GrantTypeQueryService::new(Arc::clone(&repos.grant_read))),
            home_page_commands,
            home_page_queries: Arc::new(HomePageQueryService::new(
                Arc::clone(&repos.home_page),
                Arc::clone(&repos.grant_read),
            )),
            user_commands,
            tag_commands,
            directory_queries: Arc::new(DirectoryQueryService::new(repos.users, repos.tags)),
            slug_queries: Arc::new(SlugQueryService::new(slugs)),
        }
    }
}
