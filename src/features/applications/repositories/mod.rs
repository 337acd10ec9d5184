mod in_memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::applications::models::{Application, NewApplication, StatusChange};

pub use in_memory::InMemoryApplicationRepository;
pub use postgres::PgApplicationRepository;

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// An assigned submission from a student who already has an assigned `Pending`
    /// application gets `Conflict`.
    async fn create(&self, new: NewApplication) -> Result<Application>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Application>>;

    /// Newest first
    async fn list_for_student(&self, student_id: Uuid) -> Result<Vec<Application>>;

    /// Newest first
    async fn list_for_mentor(&self, mentor_id: Uuid) -> Result<Vec<Application>>;

    async fn update_status(&self, id: Uuid, change: StatusChange) -> Result<Application>;
}
