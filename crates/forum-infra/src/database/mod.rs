//! SeaORM-backed entity store and association layer.

mod associations;
mod base;
mod connections;
mod repository;

pub mod entity;
pub mod schema;

pub use associations::SeaOrmAssociationRepository;
pub use base::SeaOrmBaseRepository;
pub use connections::{DatabaseConfig, StoreClient, StoreOptions};
pub use repository::{
    SeaOrmCommentRepository, SeaOrmPostRepository, SeaOrmUserRepository, SeaOrmVoteRepository,
};
