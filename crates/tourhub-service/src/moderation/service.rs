//! Moderation workflow service, generic over the moderable store.
//!
//! One implementation drives both events and venues. Every decision is a
//! compare-and-swap against the stored `pending` state, so two racing
//! moderators cannot both win and a decided resource is never silently
//! overwritten.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use tourhub_auth::access::{self, AccessTarget, Actor, Operation, ResourceKind};
use tourhub_cache::keys;
use tourhub_core::error::AppError;
use tourhub_core::result::AppResult;
use tourhub_core::traits::{CacheProvider, Notifier};
use tourhub_database::repositories::moderable::ModerableRepository;
use tourhub_entity::moderation::{ApprovalStatus, Moderable};

use crate::context::RequestContext;

/// Applies admin moderation decisions to one moderable resource type.
pub struct ModerationService<R: ModerableRepository> {
    /// Store for the moderated resource type.
    repo: Arc<R>,
    /// Listing cache, dropped on every state change.
    cache: Arc<dyn CacheProvider>,
    /// Best-effort notification sink.
    notifier: Arc<dyn Notifier>,
    /// Resource kind evaluated by the access rules.
    kind: ResourceKind,
}

impl<R: ModerableRepository> ModerationService<R> {
    /// Create a moderation service for one resource type.
    pub fn new(
        repo: Arc<R>,
        cache: Arc<dyn CacheProvider>,
        notifier: Arc<dyn Notifier>,
        kind: ResourceKind,
    ) -> Self {
        Self {
            repo,
            cache,
            notifier,
            kind,
        }
    }

    /// Approve a pending resource.
    ///
    /// Clears any previous rejection reason. Fails with `InvalidState`
    /// when the resource has already been decided, `NotFound` when the id
    /// is unknown.
    pub async fn approve(&self, ctx: &RequestContext, id: Uuid) -> AppResult<R::Resource> {
        access::authorize(&ctx.actor, Operation::Moderate, self.kind, None)?;

        let resource = self
            .decide(id, ApprovalStatus::Approved, None)
            .await?;

        info!(
            moderator = ?ctx.actor.id(),
            resource = self.repo.resource_name(),
            id = %id,
            "Resource approved"
        );
        self.notifier.success(&format!(
            "{} '{}' approved",
            capitalize(self.repo.resource_name()),
            resource.display_label()
        ));

        Ok(resource)
    }

    /// Reject a pending resource with a mandatory reason.
    ///
    /// An empty or whitespace-only reason fails validation before any
    /// state is touched.
    pub async fn reject(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        reason: &str,
    ) -> AppResult<R::Resource> {
        access::authorize(&ctx.actor, Operation::Moderate, self.kind, None)?;

        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::validation("A rejection reason is required"));
        }

        let resource = self
            .decide(id, ApprovalStatus::Rejected, Some(reason))
            .await?;

        info!(
            moderator = ?ctx.actor.id(),
            resource = self.repo.resource_name(),
            id = %id,
            reason = reason,
            "Resource rejected"
        );
        self.notifier.info(&format!(
            "{} '{}' rejected: {}",
            capitalize(self.repo.resource_name()),
            resource.display_label(),
            reason
        ));

        Ok(resource)
    }

    /// Toggle visibility of an already-moderated resource without
    /// discarding it. Allowed for the owner and for permitted admins.
    pub async fn set_active(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        is_active: bool,
    ) -> AppResult<R::Resource> {
        let current = self.fetch(id).await?;
        let target = AccessTarget::moderable(&current);

        // Owners toggle their own resources; everyone else needs the
        // admin moderation gate.
        if access::authorize(&ctx.actor, Operation::Update, self.kind, Some(&target)).is_err() {
            access::authorize(&ctx.actor, Operation::Moderate, self.kind, Some(&target))?;
        }

        let resource = self
            .repo
            .set_active(id, is_active)
            .await?
            .ok_or_else(|| self.not_found())?;

        self.invalidate_listings().await;
        info!(
            actor = ?ctx.actor.id(),
            resource = self.repo.resource_name(),
            id = %id,
            is_active,
            "Resource activity changed"
        );

        Ok(resource)
    }

    /// Toggle the promotional flag. Admin-only, orthogonal to approval.
    pub async fn set_featured(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        featured: bool,
    ) -> AppResult<R::Resource> {
        access::authorize(&ctx.actor, Operation::Moderate, self.kind, None)?;

        let resource = self
            .repo
            .set_featured(id, featured)
            .await?
            .ok_or_else(|| self.not_found())?;

        self.invalidate_listings().await;
        info!(
            moderator = ?ctx.actor.id(),
            resource = self.repo.resource_name(),
            id = %id,
            featured,
            "Resource feature flag changed"
        );

        Ok(resource)
    }

    /// Run one decision through the store CAS and disambiguate failure.
    async fn decide(
        &self,
        id: Uuid,
        decision: ApprovalStatus,
        reason: Option<&str>,
    ) -> AppResult<R::Resource> {
        match self.repo.apply_decision(id, decision, reason).await? {
            Some(resource) => {
                self.invalidate_listings().await;
                Ok(resource)
            }
            None => {
                // The swap did not land: unknown id, or a concurrent
                // decision got there first.
                match self.repo.find_by_id(id).await? {
                    Some(existing) => Err(AppError::invalid_state(format!(
                        "{} is already {}",
                        capitalize(self.repo.resource_name()),
                        existing.approval_status()
                    ))),
                    None => Err(self.not_found()),
                }
            }
        }
    }

    async fn fetch(&self, id: Uuid) -> AppResult<R::Resource> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.not_found())
    }

    /// Drop every cached listing of this resource type.
    async fn invalidate_listings(&self) {
        let pattern = keys::listing_pattern(&format!("{}s", self.repo.resource_name()));
        // Cache trouble must not fail the decision that already landed.
        let _ = self.cache.delete_pattern(&pattern).await;
    }

    fn not_found(&self) -> AppError {
        AppError::not_found(format!(
            "{} not found",
            capitalize(self.repo.resource_name())
        ))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use tourhub_cache::MemoryCache;
    use tourhub_core::config::cache::CacheConfig;
    use tourhub_core::error::ErrorKind;
    use tourhub_entity::event::Event;
    use tourhub_entity::user::AdminPermission;

    use crate::notify::NullNotifier;

    use super::*;

    /// In-memory stand-in for the event store with real CAS semantics.
    struct FakeEventRepo {
        rows: Mutex<HashMap<Uuid, Event>>,
    }

    impl FakeEventRepo {
        fn with_event(event: Event) -> Self {
            let mut rows = HashMap::new();
            rows.insert(event.id, event);
            Self {
                rows: Mutex::new(rows),
            }
        }

        fn get(&self, id: Uuid) -> Option<Event> {
            self.rows.lock().unwrap().get(&id).cloned()
        }
    }

    #[async_trait]
    impl ModerableRepository for FakeEventRepo {
        type Resource = Event;

        fn resource_name(&self) -> &'static str {
            "event"
        }

        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
            Ok(self.get(id))
        }

        async fn apply_decision(
            &self,
            id: Uuid,
            decision: ApprovalStatus,
            rejection_reason: Option<&str>,
        ) -> AppResult<Option<Event>> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&id) {
                Some(event) if event.approval_status == ApprovalStatus::Pending => {
                    event.approval_status = decision;
                    event.rejection_reason = rejection_reason.map(String::from);
                    event.updated_at = Utc::now();
                    Ok(Some(event.clone()))
                }
                _ => Ok(None),
            }
        }

        async fn set_active(&self, id: Uuid, is_active: bool) -> AppResult<Option<Event>> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.get_mut(&id).map(|event| {
                event.is_active = is_active;
                event.clone()
            }))
        }

        async fn set_featured(&self, id: Uuid, featured: bool) -> AppResult<Option<Event>> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.get_mut(&id).map(|event| {
                event.featured = featured;
                event.clone()
            }))
        }
    }

    fn pending_event(organizer_id: Uuid) -> Event {
        let now = Utc::now();
        Event {
            id: Uuid::new_v4(),
            organizer_id,
            title: "Harbor Food Walk".to_string(),
            description: "Street food tour".to_string(),
            category: "food".to_string(),
            city: "Porto".to_string(),
            venue_name: "Riverside Market".to_string(),
            start_at: now,
            end_at: now,
            price_cents: 1500,
            capacity: 30,
            bookings_count: 0,
            approval_status: ApprovalStatus::Pending,
            rejection_reason: None,
            is_active: true,
            featured: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn service(repo: FakeEventRepo) -> (ModerationService<FakeEventRepo>, Arc<FakeEventRepo>) {
        let repo = Arc::new(repo);
        let service = ModerationService::new(
            Arc::clone(&repo),
            Arc::new(MemoryCache::new(&CacheConfig::default())),
            Arc::new(NullNotifier),
            ResourceKind::Event,
        );
        (service, repo)
    }

    fn moderator() -> RequestContext {
        RequestContext::authenticated(
            Actor::Admin {
                id: Uuid::new_v4(),
                permissions: [AdminPermission::ManageEvents].into_iter().collect(),
            },
            Uuid::new_v4(),
        )
    }

    #[tokio::test]
    async fn test_approve_pending_succeeds_and_clears_reason() {
        let mut event = pending_event(Uuid::new_v4());
        event.rejection_reason = Some("stale".to_string());
        let id = event.id;
        let (service, repo) = service(FakeEventRepo::with_event(event));

        let approved = service.approve(&moderator(), id).await.unwrap();
        assert_eq!(approved.approval_status, ApprovalStatus::Approved);
        assert_eq!(approved.rejection_reason, None);
        assert_eq!(
            repo.get(id).unwrap().approval_status,
            ApprovalStatus::Approved
        );
    }

    #[tokio::test]
    async fn test_approve_decided_resource_is_invalid_state() {
        let mut event = pending_event(Uuid::new_v4());
        event.approval_status = ApprovalStatus::Approved;
        let id = event.id;
        let (service, repo) = service(FakeEventRepo::with_event(event));

        let err = service.approve(&moderator(), id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidState);
        // Unchanged.
        assert_eq!(
            repo.get(id).unwrap().approval_status,
            ApprovalStatus::Approved
        );
    }

    #[tokio::test]
    async fn test_reject_requires_nonblank_reason() {
        let event = pending_event(Uuid::new_v4());
        let id = event.id;
        let (service, repo) = service(FakeEventRepo::with_event(event));

        for reason in ["", "   ", "\t\n"] {
            let err = service.reject(&moderator(), id, reason).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }
        assert_eq!(
            repo.get(id).unwrap().approval_status,
            ApprovalStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_reject_records_reason() {
        let event = pending_event(Uuid::new_v4());
        let id = event.id;
        let (service, _repo) = service(FakeEventRepo::with_event(event));

        let rejected = service
            .reject(&moderator(), id, "low quality")
            .await
            .unwrap();
        assert_eq!(rejected.approval_status, ApprovalStatus::Rejected);
        assert_eq!(rejected.rejection_reason.as_deref(), Some("low quality"));
    }

    #[tokio::test]
    async fn test_non_admin_moderation_is_forbidden() {
        let organizer_id = Uuid::new_v4();
        let event = pending_event(organizer_id);
        let id = event.id;
        let (service, repo) = service(FakeEventRepo::with_event(event));

        // Even the owner cannot moderate its own event.
        let ctx =
            RequestContext::authenticated(Actor::Organizer { id: organizer_id }, Uuid::new_v4());
        let err = service.approve(&ctx, id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        let err = service.reject(&ctx, id, "nope").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(
            repo.get(id).unwrap().approval_status,
            ApprovalStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_admin_without_permission_is_forbidden() {
        let event = pending_event(Uuid::new_v4());
        let id = event.id;
        let (service, _repo) = service(FakeEventRepo::with_event(event));

        let ctx = RequestContext::authenticated(
            Actor::Admin {
                id: Uuid::new_v4(),
                permissions: [AdminPermission::ManageVenues].into_iter().collect(),
            },
            Uuid::new_v4(),
        );
        let err = service.approve(&ctx, id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (service, _repo) = service(FakeEventRepo::with_event(pending_event(Uuid::new_v4())));
        let err = service
            .approve(&moderator(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_owner_may_deactivate_own_resource() {
        let organizer_id = Uuid::new_v4();
        let mut event = pending_event(organizer_id);
        event.approval_status = ApprovalStatus::Approved;
        let id = event.id;
        let (service, _repo) = service(FakeEventRepo::with_event(event));

        let ctx =
            RequestContext::authenticated(Actor::Organizer { id: organizer_id }, Uuid::new_v4());
        let updated = service.set_active(&ctx, id, false).await.unwrap();
        assert!(!updated.is_active);

        // A stranger may not.
        let stranger =
            RequestContext::authenticated(Actor::Organizer { id: Uuid::new_v4() }, Uuid::new_v4());
        let err = service.set_active(&stranger, id, true).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_featuring_is_admin_only() {
        let organizer_id = Uuid::new_v4();
        let event = pending_event(organizer_id);
        let id = event.id;
        let (service, _repo) = service(FakeEventRepo::with_event(event));

        let owner =
            RequestContext::authenticated(Actor::Organizer { id: organizer_id }, Uuid::new_v4());
        let err = service.set_featured(&owner, id, true).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let featured = service.set_featured(&moderator(), id, true).await.unwrap();
        assert!(featured.featured);
    }
}
