//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_long_url;

/// Maximum number of codes tried before giving up on a create.
pub const MAX_CODE_ATTEMPTS: usize = 5;

/// Service for creating and resolving short links.
///
/// Composes URL validation, code generation and the repository. The service
/// holds no link state of its own; the repository is the sole owner of record.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service that builds short URLs under `base_url`.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        Self {
            link_repository,
            base_url: base_url.into(),
        }
    }

    /// Validates `long_url`, generates a code and stores the mapping.
    ///
    /// The URL is stored exactly as submitted. If the generated code collides
    /// with an existing one, a new code is generated, up to
    /// [`MAX_CODE_ATTEMPTS`] times. Other storage errors are not retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingUrl`] or [`AppError::InvalidUrl`] on
    /// validation failure, [`AppError::CodeCollision`] if every attempt
    /// collided, and [`AppError::Database`] on storage failure.
    pub async fn create_short_link(&self, long_url: Option<&str>) -> Result<Link, AppError> {
        let original_url = validate_long_url(long_url)?;

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                short_code: generate_code()?,
                original_url: original_url.to_string(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    tracing::debug!(code = %link.short_code, "Short link created");
                    return Ok(link);
                }
                Err(AppError::CodeCollision) => {
                    tracing::warn!(attempt, "Short code collision, generating a new code");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::CodeCollision)
    }

    /// Looks up the link stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Database`] on storage failure.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Builds the full short URL for a link.
    pub fn short_url(&self, link: &Link) -> String {
        link.short_url(&self.base_url)
    }

    /// Number of stored links.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Checks that the backing store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}
