//! Request DTOs.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use tourhub_entity::appointment::AppointmentStatus;
use tourhub_entity::user::{AdminPermission, Role, UserStatus};

/// POST /api/auth/register
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterDto {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// Contact phone.
    pub phone: Option<String>,
    /// Requested role (defaults to traveler).
    pub role: Option<Role>,
}

/// POST /api/auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginDto {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// POST /api/auth/refresh
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshDto {
    /// The refresh token issued at login.
    pub refresh_token: String,
}

/// PUT /api/users/me
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileDto {
    /// New given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    /// New family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    /// New contact phone.
    pub phone: Option<String>,
}

/// PUT /api/users/me/password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordDto {
    /// Current password.
    #[validate(length(min = 1))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 8, max = 128))]
    pub new_password: String,
}

/// POST /api/events
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventDto {
    /// Event title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Long-form description.
    #[validate(length(max = 5000))]
    pub description: String,
    /// Category tag.
    #[validate(length(min = 1, max = 50))]
    pub category: String,
    /// City.
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    /// Venue name.
    #[validate(length(min = 1, max = 200))]
    pub venue_name: String,
    /// Start time.
    pub start_at: DateTime<Utc>,
    /// End time.
    pub end_at: DateTime<Utc>,
    /// Ticket price in cents.
    #[validate(range(min = 0))]
    pub price_cents: i64,
    /// Ticket capacity.
    #[validate(range(min = 1))]
    pub capacity: i32,
}

/// PUT /api/events/{id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEventDto {
    /// New title.
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    /// New description.
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New venue name.
    pub venue_name: Option<String>,
    /// New start time.
    pub start_at: Option<DateTime<Utc>>,
    /// New end time.
    pub end_at: Option<DateTime<Utc>>,
    /// New ticket price in cents.
    #[validate(range(min = 0))]
    pub price_cents: Option<i64>,
    /// New capacity.
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
}

/// POST /api/venues
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVenueDto {
    /// Venue name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Long-form description.
    #[validate(length(max = 5000))]
    pub description: String,
    /// Category tag.
    #[validate(length(min = 1, max = 50))]
    pub category: String,
    /// City.
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    /// Street address.
    #[validate(length(min = 1, max = 300))]
    pub address: String,
    /// Indicative price range label.
    #[validate(length(min = 1, max = 20))]
    pub price_range: String,
}

/// PUT /api/venues/{id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVenueDto {
    /// New name.
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    /// New description.
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New price range label.
    pub price_range: Option<String>,
}

/// POST /api/bookings
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingDto {
    /// Target event.
    pub event_id: Uuid,
    /// Number of tickets.
    #[validate(range(min = 1, max = 20))]
    pub quantity: i32,
}

/// POST /api/appointments
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppointmentDto {
    /// Target doctor.
    pub doctor_id: Uuid,
    /// Requested visit time.
    pub scheduled_at: DateTime<Utc>,
    /// Reason for the visit.
    #[validate(length(min = 1, max = 1000))]
    pub reason: String,
}

/// PUT /api/appointments/{id}/status
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAppointmentStatusDto {
    /// Target state.
    pub status: AppointmentStatus,
}

/// PUT /api/admin/{events,venues}/{id}/reject
#[derive(Debug, Clone, Deserialize)]
pub struct RejectDto {
    /// Mandatory rejection reason.
    pub reason: String,
}

/// PUT .../{id}/active
#[derive(Debug, Clone, Deserialize)]
pub struct SetActiveDto {
    /// Target activity state.
    pub is_active: bool,
}

/// PUT /api/admin/{events,venues}/{id}/feature
#[derive(Debug, Clone, Deserialize)]
pub struct SetFeaturedDto {
    /// Target promotional state.
    pub featured: bool,
}

/// PUT /api/admin/users/{id}/status
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeUserStatusDto {
    /// Target account status.
    pub status: UserStatus,
}

/// POST /api/admin/admins
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdminDto {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// Granted permission set.
    pub permissions: Vec<AdminPermission>,
}

/// PUT /api/admin/admins/{id}/permissions
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePermissionsDto {
    /// Replacement permission set.
    pub permissions: Vec<AdminPermission>,
}
