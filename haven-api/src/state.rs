use std::sync::Arc;
use haven_core::{BookingService, ListingRepository};

#[derive(Clone)]
pub struct AppState {
    pub listings: Arc<dyn ListingRepository>,
    pub bookings: BookingService,
}

impl AppState {
    pub fn new(listings: Arc<dyn ListingRepository>, bookings: BookingService) -> Self {
        Self { listings, bookings }
    }
}
