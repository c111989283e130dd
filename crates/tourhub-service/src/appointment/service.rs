//! Appointment lifecycle between travelers and doctors.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use tourhub_auth::access::{self, AccessTarget, Actor, Operation, ResourceKind};
use tourhub_core::error::AppError;
use tourhub_core::result::AppResult;
use tourhub_core::types::pagination::{PageRequest, PageResponse};
use tourhub_database::repositories::appointment::AppointmentRepository;
use tourhub_database::repositories::user::UserRepository;
use tourhub_entity::appointment::{Appointment, AppointmentStatus, CreateAppointment};
use tourhub_entity::user::Role;

use crate::context::RequestContext;

/// Appointment operations: traveler requests, doctor-driven transitions.
#[derive(Clone)]
pub struct AppointmentService {
    /// Appointment store.
    appointment_repo: Arc<AppointmentRepository>,
    /// User store, to verify the doctor side.
    user_repo: Arc<UserRepository>,
}

impl AppointmentService {
    /// Create a new appointment service.
    pub fn new(
        appointment_repo: Arc<AppointmentRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            appointment_repo,
            user_repo,
        }
    }

    /// Request an appointment with a doctor.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        doctor_id: Uuid,
        scheduled_at: DateTime<Utc>,
        reason: &str,
    ) -> AppResult<Appointment> {
        access::authorize(&ctx.actor, Operation::Create, ResourceKind::Appointment, None)?;
        let user_id = ctx.require_account()?;

        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::validation("A reason for the visit is required"));
        }
        if scheduled_at <= Utc::now() {
            return Err(AppError::validation("Appointment time must be in the future"));
        }

        let doctor = self
            .user_repo
            .find_by_id(doctor_id)
            .await?
            .filter(|account| account.role == Role::Doctor)
            .ok_or_else(|| AppError::not_found("Doctor not found"))?;

        let appointment = self
            .appointment_repo
            .create(&CreateAppointment {
                user_id,
                doctor_id: doctor.id,
                scheduled_at,
                reason: reason.to_string(),
            })
            .await?;

        info!(
            user_id = %user_id,
            doctor_id = %doctor_id,
            appointment_id = %appointment.id,
            "Appointment requested"
        );

        Ok(appointment)
    }

    /// List appointments for the calling traveler or doctor.
    pub async fn list_for(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Appointment>> {
        access::authorize(&ctx.actor, Operation::List, ResourceKind::Appointment, None)?;
        let account_id = ctx.require_account()?;

        match ctx.actor {
            Actor::Doctor { .. } => self.appointment_repo.list_by_doctor(account_id, page).await,
            _ => self.appointment_repo.list_by_user(account_id, page).await,
        }
    }

    /// Fetch one appointment; visible to its two parties and permitted
    /// admins only.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Appointment> {
        let appointment = self
            .appointment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Appointment not found"))?;

        let target = AccessTarget::shared(appointment.user_id, appointment.doctor_id);
        if access::authorize(
            &ctx.actor,
            Operation::Read,
            ResourceKind::Appointment,
            Some(&target),
        )
        .is_err()
        {
            return Err(AppError::not_found("Appointment not found"));
        }

        Ok(appointment)
    }

    /// Move an appointment to a new state.
    ///
    /// Doctors may confirm, complete, or cancel; the requesting traveler
    /// may only cancel. The store update is a compare-and-swap on the
    /// current state, so a concurrent transition surfaces as
    /// `InvalidState` instead of silently overwriting.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        next: AppointmentStatus,
    ) -> AppResult<Appointment> {
        let appointment = self.get(ctx, id).await?;
        let target = AccessTarget::shared(appointment.user_id, appointment.doctor_id);
        access::authorize(
            &ctx.actor,
            Operation::Update,
            ResourceKind::Appointment,
            Some(&target),
        )?;

        // The traveler side can only withdraw the request.
        if ctx.actor.is_actor(appointment.user_id) && next != AppointmentStatus::Cancelled {
            return Err(AppError::forbidden(
                "Only the doctor can confirm or complete an appointment",
            ));
        }

        if !appointment.status.can_transition_to(next) {
            return Err(AppError::invalid_state(format!(
                "Appointment is {} and cannot become {}",
                appointment.status, next
            )));
        }

        let updated = self
            .appointment_repo
            .update_status(id, appointment.status, next)
            .await?
            .ok_or_else(|| {
                AppError::invalid_state("Appointment state changed, reload and retry")
            })?;

        info!(appointment_id = %id, from = %appointment.status, to = %next, "Appointment status changed");

        Ok(updated)
    }
}
