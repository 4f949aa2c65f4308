pub mod content;
pub mod grants;
pub mod pages;
pub mod posts;
pub mod users;

pub use content::{HeroSectionDto, ListPage, SlugPreviewDto};
pub use grants::{GrantCardDto, GrantCardsOverviewDto, GrantTypeDto};
pub use pages::{HomePageDto, PageDto};
pub use posts::PostDto;
pub use users::{TagDto, UserDto};
