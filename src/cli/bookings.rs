use anyhow::Context;
use chrono::{NaiveDate, NaiveTime, Utc};

use crate::models::{
    BookingStatus, CustomerFilter, DateFilter, FilterState, SortBy, SERVICE_CATALOG, STATUS_STEPS,
};
use crate::services::api::{BookServiceRequest, BookingApi};
use crate::services::query;
use crate::state::AppState;

pub async fn list(
    state: &AppState,
    search: &str,
    date: &str,
    customer: &str,
    sort: &str,
    page: usize,
) -> anyhow::Result<()> {
    let bookings = state.bookings.my_bookings().await?;
    if bookings.is_empty() {
        println!("No Bookings Yet");
        println!("You haven't made any bookings yet. Start by booking your first service!");
        return Ok(());
    }

    let filters = FilterState {
        search_term: search.to_string(),
        date_filter: DateFilter::from_str(date),
        customer_filter: CustomerFilter::from_str(customer),
        sort_by: SortBy::from_str(sort),
        current_page: page,
    };
    let view = query::apply(
        &bookings,
        &filters,
        state.config.page_size,
        Utc::now().naive_utc(),
    );

    println!(
        "Total Bookings: {}   Upcoming: {}   Completed: {}",
        view.stats.total, view.stats.upcoming, view.stats.completed
    );
    println!();

    for (idx, booking) in view.page.iter().enumerate() {
        let number = (filters.current_page.max(1) - 1) * state.config.page_size + idx + 1;
        println!("#{number:03}  {}", booking.services.join(", "));
        println!(
            "      Booking Date: {}   Customer: {}   Status: {}",
            booking.booking_date.format("%d %b %Y"),
            if booking.new_customer { "New Customer" } else { "Existing Customer" },
            booking.status.as_str()
        );
        if let Some(extra) = &booking.additional_services {
            println!("      Additional Services: {extra}");
        }
        println!("      Booked: {}   id: {}", booking.created_at.format("%d %b %Y"), booking.id);
    }

    if view.page.is_empty() {
        println!("No bookings match the current filters.");
    }
    if view.total_pages > 1 {
        println!();
        println!("Page {} of {}", filters.current_page, view.total_pages);
    }
    Ok(())
}

pub async fn show(state: &AppState, id: &str) -> anyhow::Result<()> {
    let booking = state.bookings.booking(id).await?;

    println!("Booking {}", booking.id);
    println!("Services:      {}", booking.services.join(", "));
    println!("Booking Date:  {}", booking.booking_date.format("%d %b %Y"));
    println!("Booked:        {}", booking.created_at.format("%d %b %Y"));
    println!(
        "Customer Type: {}",
        if booking.new_customer { "New Customer" } else { "Existing Customer" }
    );
    if let Some(extra) = &booking.additional_services {
        println!("Additional Services: {extra}");
    }

    println!();
    for step in STATUS_STEPS {
        let mark = if step.step() <= booking.status.step() { "●" } else { "○" };
        println!("  {mark} {}", step.as_str());
    }
    println!("Progress: {}%", booking.status.progress_percent());
    println!("{}", booking.status.message());

    if booking.status == BookingStatus::VendorAssigned {
        if let Some(vendor) = &booking.vendor {
            println!();
            println!("Vendor:   {} ({})", vendor.name, vendor.category);
            println!("Contact:  {}", vendor.contact);
        }
    }

    if booking.has_quotation() {
        let approval = match booking.quotation_approved {
            Some(true) => "Accepted",
            Some(false) => "Rejected",
            None => "Awaiting your response",
        };
        println!();
        println!("Quotation: {approval}");
    }
    if booking.has_invoice() {
        println!(
            "Invoice available: download it with `servicebook invoice download {}`",
            booking.id
        );
    }
    Ok(())
}

pub async fn book(
    state: &AppState,
    services: Vec<String>,
    date: &str,
    customer: &str,
    notes: Option<String>,
) -> anyhow::Result<()> {
    let Some(user) = state.session.user() else {
        anyhow::bail!("Please sign in to book a service");
    };
    if !user.is_complete() {
        anyhow::bail!(
            "Please complete your profile before booking a service to ensure we have all necessary details"
        );
    }

    for service in &services {
        anyhow::ensure!(
            SERVICE_CATALOG.contains(&service.as_str()),
            "Unknown service {service:?}. Available services: {}",
            SERVICE_CATALOG.join(", ")
        );
    }

    let booking_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .context("booking date must be in YYYY-MM-DD form")?;
    let today = Utc::now().naive_utc().date();
    anyhow::ensure!(booking_date >= today, "Booking date must be today or later");

    let request = BookServiceRequest {
        services,
        booking_date: booking_date.and_time(NaiveTime::MIN),
        new_customer: customer == "new",
        additional_services: notes.filter(|n| !n.trim().is_empty()),
    };
    state.bookings.book_service(&request).await?;
    println!("Service booked successfully!");
    Ok(())
}
