use lifecycle_core::{
    BearerToken, DeletionBatch, IdentityAdmin, IdentityVerifier, LifecycleError, ObjectStorage,
    UserId,
};

pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// How the caller's objects are paged through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingPolicy {
    page_size: usize,
    max_pages: usize,
}

impl PagingPolicy {
    /// Both values are clamped to at least one.
    pub fn new(page_size: usize, max_pages: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            max_pages: max_pages.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }
}

impl Default for PagingPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_MAX_PAGES)
    }
}

/// What the object cleanup did before the identity was removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErasureReport {
    pub pages_listed: usize,
    pub objects_submitted: usize,
    pub failed_batches: usize,
    /// Set when paging stopped because a listing call failed.
    pub listing_failure: Option<LifecycleError>,
    /// Set when paging stopped at the page safety bound.
    pub hit_page_limit: bool,
}

/// Account eraser use case - removes the caller's stored objects, then the
/// caller's identity record.
///
/// Cleanup runs before identity removal and is best effort: listing and
/// removal failures are logged and skipped, and nothing is rolled back if
/// the identity removal fails afterwards.
pub struct AccountEraser<V, S, A>
where
    V: IdentityVerifier,
    S: ObjectStorage,
    A: IdentityAdmin,
{
    verifier: V,
    storage: S,
    admin: A,
    paging: PagingPolicy,
}

impl<V, S, A> AccountEraser<V, S, A>
where
    V: IdentityVerifier,
    S: ObjectStorage,
    A: IdentityAdmin,
{
    pub fn new(verifier: V, storage: S, admin: A) -> Self {
        Self {
            verifier,
            storage,
            admin,
            paging: PagingPolicy::default(),
        }
    }

    pub fn with_paging(mut self, paging: PagingPolicy) -> Self {
        self.paging = paging;
        self
    }

    /// Execute the account eraser use case
    ///
    /// # Arguments
    /// * `token` - The caller's bearer credential
    ///
    /// # Returns
    /// The cleanup report on success, `Unauthenticated` if the credential does not
    /// resolve, `IdentityDeletionFailed` if the identity store refuses the deletion
    #[tracing::instrument(name = "AccountEraser::execute", skip_all)]
    pub async fn execute(&self, token: &BearerToken) -> Result<ErasureReport, LifecycleError> {
        let identity = self.verifier.verify(token).await.map_err(|e| {
            tracing::debug!(error = %e, "Credential rejected");
            LifecycleError::Unauthenticated
        })?;
        let user_id = identity.user_id();

        let report = self.remove_stored_objects(user_id).await;

        self.admin.delete_user(user_id).await.map_err(|e| {
            tracing::error!(error = %e, "Identity deletion failed");
            LifecycleError::IdentityDeletionFailed(e.to_string())
        })?;

        tracing::info!(
            pages = report.pages_listed,
            objects = report.objects_submitted,
            failed_batches = report.failed_batches,
            "Account erased"
        );

        Ok(report)
    }

    async fn remove_stored_objects(&self, owner: &UserId) -> ErasureReport {
        let mut report = ErasureReport::default();
        let limit = self.paging.page_size();
        let mut offset = 0;

        loop {
            if report.pages_listed >= self.paging.max_pages() {
                tracing::warn!(
                    max_pages = self.paging.max_pages(),
                    "Page limit reached, leaving remaining objects in place"
                );
                report.hit_page_limit = true;
                break;
            }

            let page = match self.storage.list(owner.as_str(), limit, offset).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(error = %e, offset, "Listing failed, skipping object cleanup");
                    report.listing_failure = Some(LifecycleError::ListingFailed(e.to_string()));
                    break;
                }
            };
            report.pages_listed += 1;

            if page.is_empty() {
                break;
            }

            let batch = DeletionBatch::from_page(owner, &page);
            let mut removed = 0;
            if !batch.is_empty() {
                report.objects_submitted += batch.len();
                match self.storage.remove(&batch.paths()).await {
                    Ok(()) => removed = batch.len(),
                    Err(e) => {
                        tracing::warn!(error = %e, offset, "Batch removal failed");
                        report.failed_batches += 1;
                    }
                }
            }

            if page.len() < limit {
                break;
            }
            // Removed objects drop out of the next listing; step over the survivors only
            offset += page.len() - removed;
        }

        report
    }
}
