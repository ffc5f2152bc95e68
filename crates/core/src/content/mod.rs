mod collection;
mod error;
mod ids;
mod operations;
mod requests;
mod seed;
mod types;

pub use collection::{CollectionItem, CollectionKind, Placement};
pub use error::ContentError;
pub use ids::{generate_id, generate_id_at};
pub use operations::{create_item, find_item, insert_item, remove_item, update_item};
pub use requests::{
    CreateNewsRequest, CreateTrendingRequest, CreateVideoRequest, UpdateNewsRequest,
    UpdateTrendingRequest, UpdateVideoRequest,
};
pub use seed::seed_content;
pub use types::{ContentDocument, NewsItem, TrendingItem, VideoItem};
