use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use super::{
    AuthApi, BookServiceRequest, BookingApi, ChangePasswordRequest, LoginRequest,
    ResetPasswordRequest, SignupRequest, UpdateProfileRequest,
};
use crate::errors::ApiError;
use crate::models::{Booking, UserProfile};

/// reqwest-backed implementation of both API seams. Clones share the same
/// connection pool and cookie jar, so the session cookie set at login is
/// presented on every later call from the same process.
#[derive(Clone)]
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: UserProfile,
}

#[derive(Deserialize)]
struct BookingsEnvelope {
    bookings: Vec<Booking>,
}

#[derive(Deserialize)]
struct BookingEnvelope {
    booking: Booking,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let resp = request.send().await?;
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(ApiError::from_response(resp, fallback).await)
        }
    }

    async fn json_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn bytes_body(resp: reqwest::Response) -> Result<Vec<u8>, ApiError> {
        Ok(resp
            .bytes()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .to_vec())
    }
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn login(&self, credentials: &LoginRequest) -> anyhow::Result<UserProfile> {
        let req = self.client.post(self.url("/auth/login")).json(credentials);
        let resp = self.execute(req, "Login failed!").await?;
        let body: UserEnvelope = Self::json_body(resp).await?;
        Ok(body.user)
    }

    async fn signup(&self, data: &SignupRequest) -> anyhow::Result<UserProfile> {
        let req = self.client.post(self.url("/auth/signup")).json(data);
        let resp = self.execute(req, "Signup failed!").await?;
        let body: UserEnvelope = Self::json_body(resp).await?;
        Ok(body.user)
    }

    async fn logout(&self) -> anyhow::Result<()> {
        let req = self.client.post(self.url("/auth/logout")).json(&json!({}));
        self.execute(req, "Logout failed").await?;
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> anyhow::Result<()> {
        let req = self
            .client
            .post(self.url("/auth/forgot-password"))
            .json(&json!({ "email": email }));
        self.execute(req, "Request failed").await?;
        Ok(())
    }

    async fn reset_password(&self, token: &str, data: &ResetPasswordRequest) -> anyhow::Result<()> {
        let req = self
            .client
            .post(self.url(&format!("/auth/reset-password/{token}")))
            .json(data);
        self.execute(req, "Reset failed").await?;
        Ok(())
    }

    async fn change_password(&self, data: &ChangePasswordRequest) -> anyhow::Result<()> {
        let req = self.client.put(self.url("/auth/change-password")).json(data);
        self.execute(req, "Password change failed").await?;
        Ok(())
    }

    async fn update_profile(&self, data: &UpdateProfileRequest) -> anyhow::Result<UserProfile> {
        let req = self.client.put(self.url("/user/update-profile")).json(data);
        let resp = self.execute(req, "Failed to update profile").await?;
        let body: UserEnvelope = Self::json_body(resp).await?;
        Ok(body.user)
    }
}

#[async_trait]
impl BookingApi for HttpApi {
    async fn my_bookings(&self) -> anyhow::Result<Vec<Booking>> {
        let req = self.client.get(self.url("/service/my-bookings"));
        let resp = self.execute(req, "Error loading bookings").await?;
        let body: BookingsEnvelope = Self::json_body(resp).await?;
        Ok(body.bookings)
    }

    async fn booking(&self, id: &str) -> anyhow::Result<Booking> {
        let req = self.client.get(self.url(&format!("/service/my-bookings/{id}")));
        let resp = self.execute(req, "Error fetching booking").await?;
        let body: BookingEnvelope = Self::json_body(resp).await?;
        Ok(body.booking)
    }

    async fn book_service(&self, request: &BookServiceRequest) -> anyhow::Result<()> {
        let req = self.client.post(self.url("/service/book-service")).json(request);
        self.execute(req, "Booking failed").await?;
        Ok(())
    }

    async fn set_quotation_approval(&self, booking_id: &str, approved: bool) -> anyhow::Result<()> {
        let req = self
            .client
            .put(self.url(&format!("/service/{booking_id}")))
            .json(&json!({ "quotationApproved": approved }));
        self.execute(req, "Action failed").await?;
        Ok(())
    }

    async fn quotation_document(&self, booking_id: &str) -> anyhow::Result<Vec<u8>> {
        let req = self
            .client
            .get(self.url(&format!("/service/get-quotation/{booking_id}")));
        let resp = self.execute(req, "Failed to load quotation").await?;
        Ok(Self::bytes_body(resp).await?)
    }

    async fn invoice_document(&self, booking_id: &str) -> anyhow::Result<Vec<u8>> {
        let req = self
            .client
            .get(self.url(&format!("/service/get-invoice/{booking_id}")));
        let resp = self.execute(req, "Failed to retrieve invoice.").await?;
        Ok(Self::bytes_body(resp).await?)
    }
}
