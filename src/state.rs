use crate::config::AppConfig;
use crate::services::api::BookingApi;
use crate::services::session::AuthSession;

pub struct AppState {
    pub config: AppConfig,
    pub session: AuthSession,
    pub bookings: Box<dyn BookingApi>,
}
