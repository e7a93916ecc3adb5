//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Owns the whole lifecycle of a [`Link`]: creation, exact-key lookup,
/// listing and deletion. Links are never updated.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// The uniqueness check on `(prefix, slug)` and the insert are a single
    /// atomic step: of two concurrent calls with the same key, exactly one
    /// succeeds. Existing links are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the `(prefix, slug)` pair is taken.
    ///
    /// Returns [`AppError::Storage`] on any other failure.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its exact, already-normalized key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_key(&self, prefix: &str, slug: &str) -> Result<Option<Link>, AppError>;

    /// Lists every link, newest first.
    ///
    /// Ordered by `created_at` descending, ties broken by `id` descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Permanently deletes a link, freeing its key for reuse.
    ///
    /// Returns `Ok(true)` if the link existed, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Reports whether the backing store is reachable.
    async fn health_check(&self) -> bool;
}
