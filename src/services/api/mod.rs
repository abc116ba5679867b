pub mod http;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{datetime, Booking, UserProfile};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookServiceRequest {
    pub services: Vec<String>,
    #[serde(with = "datetime")]
    pub booking_date: NaiveDateTime,
    pub new_customer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_services: Option<String>,
}

/// The `/auth/*` and `/user/*` surface. The JWT session cookie set by the
/// server rides the underlying transport; implementations never inspect it.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &LoginRequest) -> anyhow::Result<UserProfile>;
    async fn signup(&self, data: &SignupRequest) -> anyhow::Result<UserProfile>;
    async fn logout(&self) -> anyhow::Result<()>;
    async fn forgot_password(&self, email: &str) -> anyhow::Result<()>;
    async fn reset_password(&self, token: &str, data: &ResetPasswordRequest) -> anyhow::Result<()>;
    async fn change_password(&self, data: &ChangePasswordRequest) -> anyhow::Result<()>;
    async fn update_profile(&self, data: &UpdateProfileRequest) -> anyhow::Result<UserProfile>;
}

/// The `/service/*` surface. Bookings are server-owned; the only mutation
/// the client may perform is quotation approval.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn my_bookings(&self) -> anyhow::Result<Vec<Booking>>;
    async fn booking(&self, id: &str) -> anyhow::Result<Booking>;
    async fn book_service(&self, request: &BookServiceRequest) -> anyhow::Result<()>;
    async fn set_quotation_approval(&self, booking_id: &str, approved: bool) -> anyhow::Result<()>;
    async fn quotation_document(&self, booking_id: &str) -> anyhow::Result<Vec<u8>>;
    async fn invoice_document(&self, booking_id: &str) -> anyhow::Result<Vec<u8>>;
}
