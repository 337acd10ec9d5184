mod in_memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::mentors::models::{Mentor, MentorUpdate, NewMentor};

pub use in_memory::InMemoryMentorRepository;
pub use postgres::PgMentorRepository;

#[async_trait]
pub trait MentorRepository: Send + Sync {
    /// Unknown account is `NotFound`; an account that already has a record is `Conflict`.
    async fn create(&self, new: NewMentor) -> Result<Mentor>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Mentor>>;

    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Option<Mentor>>;

    /// Ordered by username; `available` filters when set
    async fn list(&self, available: Option<bool>) -> Result<Vec<Mentor>>;

    async fn update(&self, id: Uuid, update: MentorUpdate) -> Result<Mentor>;

    /// Returns whether a record was removed
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
