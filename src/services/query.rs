//! Derives the displayable bookings-list view: search, date and customer
//! filters, a stable sort, pagination, and the dashboard stat tiles. Pure
//! over its inputs; "now" is passed in so results are reproducible.

use chrono::{Duration, Months, NaiveDateTime};

use crate::models::{Booking, BookingStatus, CustomerFilter, DateFilter, FilterState, SortBy};

/// Which signal the "completed" stat tile counts. The dashboard has always
/// derived it from the booking date rather than the status field; both
/// interpretations are available so callers can pick deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletedBasis {
    #[default]
    BookingDate,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub upcoming: usize,
    pub completed: usize,
    pub new_customers: usize,
}

#[derive(Debug, Clone)]
pub struct BookingView {
    pub page: Vec<Booking>,
    pub total_pages: usize,
    pub stats: Stats,
}

/// Applies the full pipeline with the default completed-stat basis.
pub fn apply(
    bookings: &[Booking],
    filters: &FilterState,
    page_size: usize,
    now: NaiveDateTime,
) -> BookingView {
    apply_with(bookings, filters, page_size, now, CompletedBasis::default())
}

/// Search filter, then date filter, then customer filter, then a stable
/// sort, then the page slice. Stats are computed from the unfiltered
/// collection. The input is never mutated and an out-of-range
/// `current_page` yields an empty page, not an error.
pub fn apply_with(
    bookings: &[Booking],
    filters: &FilterState,
    page_size: usize,
    now: NaiveDateTime,
    basis: CompletedBasis,
) -> BookingView {
    let page_size = page_size.max(1);
    let mut filtered: Vec<&Booking> = bookings.iter().collect();

    if !filters.search_term.is_empty() {
        let term = filters.search_term.to_lowercase();
        filtered.retain(|b| {
            b.services
                .iter()
                .any(|service| service.to_lowercase().contains(&term))
                || b.additional_services
                    .as_deref()
                    .is_some_and(|extra| extra.to_lowercase().contains(&term))
        });
    }

    if filters.date_filter != DateFilter::All {
        filtered.retain(|b| matches_date_filter(b.booking_date, filters.date_filter, now));
    }

    match filters.customer_filter {
        CustomerFilter::All => {}
        CustomerFilter::New => filtered.retain(|b| b.new_customer),
        CustomerFilter::Existing => filtered.retain(|b| !b.new_customer),
    }

    // Vec::sort_by is stable: ties keep their server-given order.
    match filters.sort_by {
        SortBy::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Oldest => filtered.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortBy::DateAsc => filtered.sort_by(|a, b| a.booking_date.cmp(&b.booking_date)),
        SortBy::DateDesc => filtered.sort_by(|a, b| b.booking_date.cmp(&a.booking_date)),
    }

    let total_pages = filtered.len().div_ceil(page_size);
    let start = (filters.current_page.max(1) - 1) * page_size;
    let page = filtered
        .iter()
        .skip(start)
        .take(page_size)
        .map(|b| (*b).clone())
        .collect();

    BookingView {
        page,
        total_pages,
        stats: stats_with(bookings, now, basis),
    }
}

pub fn stats(bookings: &[Booking], now: NaiveDateTime) -> Stats {
    stats_with(bookings, now, CompletedBasis::default())
}

pub fn stats_with(bookings: &[Booking], now: NaiveDateTime, basis: CompletedBasis) -> Stats {
    Stats {
        total: bookings.len(),
        upcoming: bookings.iter().filter(|b| b.booking_date > now).count(),
        completed: match basis {
            CompletedBasis::BookingDate => {
                bookings.iter().filter(|b| b.booking_date < now).count()
            }
            CompletedBasis::Status => bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Completed)
                .count(),
        },
        new_customers: bookings.iter().filter(|b| b.new_customer).count(),
    }
}

fn matches_date_filter(date: NaiveDateTime, filter: DateFilter, now: NaiveDateTime) -> bool {
    match filter {
        DateFilter::All => true,
        DateFilter::Today => date.date() == now.date(),
        DateFilter::Week => date > now - Duration::weeks(1),
        DateFilter::Month => date > month_before(now),
        DateFilter::Upcoming => date > now,
        DateFilter::Past => date < now,
    }
}

// Calendar-month subtraction, like the web dashboard's date handling.
fn month_before(now: NaiveDateTime) -> NaiveDateTime {
    now.checked_sub_months(Months::new(1)).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn now() -> NaiveDateTime {
        dt("2025-06-16 12:00")
    }

    fn booking(
        id: &str,
        services: &[&str],
        booking_date: &str,
        created_at: &str,
        new_customer: bool,
    ) -> Booking {
        Booking {
            id: id.to_string(),
            services: services.iter().map(|s| s.to_string()).collect(),
            booking_date: dt(booking_date),
            new_customer,
            additional_services: None,
            status: BookingStatus::InProgress,
            quotation: None,
            quotation_approved: None,
            vendor: None,
            invoice: None,
            created_at: dt(created_at),
            updated_at: dt(created_at),
        }
    }

    fn ids(view: &BookingView) -> Vec<&str> {
        view.page.iter().map(|b| b.id.as_str()).collect()
    }

    fn sample() -> Vec<Booking> {
        vec![
            booking("plumbing", &["Plumbing"], "2025-06-17 00:00", "2025-06-10 09:00", true),
            booking("ac", &["AC Service/Repair"], "2025-06-15 00:00", "2025-06-11 09:00", false),
            booking("pest", &["Pest Control"], "2025-06-20 00:00", "2025-06-09 09:00", false),
            booking("clean", &["Deep Cleaning"], "2025-05-01 00:00", "2025-06-12 09:00", true),
        ]
    }

    #[test]
    fn test_page_never_exceeds_page_size() {
        let bookings = sample();
        let view = apply(&bookings, &FilterState::default(), 3, now());
        assert!(view.page.len() <= 3);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let bookings = sample();
        let filters = FilterState {
            search_term: "e".to_string(),
            sort_by: SortBy::DateAsc,
            ..FilterState::default()
        };
        let first = apply(&bookings, &filters, 6, now());
        let second = apply(&bookings, &filters, 6, now());
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.total_pages, second.total_pages);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let bookings = sample();
        let upper = apply(
            &bookings,
            &FilterState { search_term: "AC".to_string(), ..FilterState::default() },
            6,
            now(),
        );
        let lower = apply(
            &bookings,
            &FilterState { search_term: "ac".to_string(), ..FilterState::default() },
            6,
            now(),
        );
        assert_eq!(ids(&upper), ids(&lower));
        assert!(ids(&upper).contains(&"ac"));
    }

    #[test]
    fn test_search_matches_additional_services() {
        let mut b = booking("extra", &["Carpentry"], "2025-06-18 00:00", "2025-06-13 09:00", false);
        b.additional_services = Some("Fix the balcony door hinge".to_string());
        let bookings = vec![b];
        let view = apply(
            &bookings,
            &FilterState { search_term: "HINGE".to_string(), ..FilterState::default() },
            6,
            now(),
        );
        assert_eq!(ids(&view), vec!["extra"]);
    }

    #[test]
    fn test_date_asc_is_reverse_of_date_desc() {
        let bookings = sample(); // all booking dates distinct
        let asc = apply(
            &bookings,
            &FilterState { sort_by: SortBy::DateAsc, ..FilterState::default() },
            6,
            now(),
        );
        let desc = apply(
            &bookings,
            &FilterState { sort_by: SortBy::DateDesc, ..FilterState::default() },
            6,
            now(),
        );
        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
    }

    #[test]
    fn test_newest_sorts_by_created_at_descending() {
        let bookings = sample();
        let view = apply(&bookings, &FilterState::default(), 6, now());
        assert_eq!(ids(&view), vec!["clean", "ac", "plumbing", "pest"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let bookings = vec![
            booking("first", &["Plumbing"], "2025-06-17 00:00", "2025-06-10 09:00", true),
            booking("second", &["Carpentry"], "2025-06-18 00:00", "2025-06-10 09:00", true),
        ];
        let view = apply(
            &bookings,
            &FilterState { sort_by: SortBy::Oldest, ..FilterState::default() },
            6,
            now(),
        );
        assert_eq!(ids(&view), vec!["first", "second"]);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let bookings: Vec<Booking> = (0..13)
            .map(|i| {
                booking(
                    &format!("b{i}"),
                    &["Plumbing"],
                    "2025-06-17 00:00",
                    "2025-06-10 09:00",
                    false,
                )
            })
            .collect();
        let view = apply(&bookings, &FilterState::default(), 6, now());
        assert_eq!(view.total_pages, 3);

        let last = apply(
            &bookings,
            &FilterState { current_page: 3, ..FilterState::default() },
            6,
            now(),
        );
        assert_eq!(last.page.len(), 1);
    }

    #[test]
    fn test_no_matches_means_zero_pages() {
        let bookings = sample();
        let view = apply(
            &bookings,
            &FilterState { search_term: "landscaping".to_string(), ..FilterState::default() },
            6,
            now(),
        );
        assert!(view.page.is_empty());
        assert_eq!(view.total_pages, 0);
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_reset() {
        let bookings = sample();
        let view = apply(
            &bookings,
            &FilterState { current_page: 99, ..FilterState::default() },
            6,
            now(),
        );
        assert!(view.page.is_empty());
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn test_upcoming_filter_keeps_future_bookings_only() {
        let bookings = vec![
            booking("tomorrow", &["Plumbing"], "2025-06-17 00:00", "2025-06-10 09:00", true),
            booking("yesterday", &["AC Service/Repair"], "2025-06-15 00:00", "2025-06-11 09:00", false),
        ];
        let view = apply(
            &bookings,
            &FilterState { date_filter: DateFilter::Upcoming, ..FilterState::default() },
            6,
            now(),
        );
        assert_eq!(ids(&view), vec!["tomorrow"]);
    }

    #[test]
    fn test_today_filter_is_calendar_day_equality() {
        let bookings = vec![
            booking("morning", &["Plumbing"], "2025-06-16 08:00", "2025-06-10 09:00", true),
            booking("tomorrow", &["Plumbing"], "2025-06-17 08:00", "2025-06-10 10:00", true),
        ];
        let view = apply(
            &bookings,
            &FilterState { date_filter: DateFilter::Today, ..FilterState::default() },
            6,
            now(),
        );
        assert_eq!(ids(&view), vec!["morning"]);
    }

    #[test]
    fn test_week_filter_is_strictly_after_seven_days_ago() {
        let bookings = vec![
            booking("eight-days", &["Plumbing"], "2025-06-08 09:00", "2025-06-01 09:00", true),
            booking("six-days", &["Plumbing"], "2025-06-10 09:00", "2025-06-01 10:00", true),
        ];
        let view = apply(
            &bookings,
            &FilterState { date_filter: DateFilter::Week, ..FilterState::default() },
            6,
            now(),
        );
        assert_eq!(ids(&view), vec!["six-days"]);
    }

    #[test]
    fn test_month_filter_uses_calendar_month() {
        let bookings = vec![
            booking("in-window", &["Plumbing"], "2025-05-20 09:00", "2025-05-01 09:00", true),
            booking("too-old", &["Plumbing"], "2025-05-10 09:00", "2025-05-01 10:00", true),
        ];
        let view = apply(
            &bookings,
            &FilterState { date_filter: DateFilter::Month, ..FilterState::default() },
            6,
            now(),
        );
        assert_eq!(ids(&view), vec!["in-window"]);
    }

    #[test]
    fn test_customer_filter_partitions() {
        let bookings = sample();
        let new = apply(
            &bookings,
            &FilterState { customer_filter: CustomerFilter::New, ..FilterState::default() },
            6,
            now(),
        );
        let existing = apply(
            &bookings,
            &FilterState { customer_filter: CustomerFilter::Existing, ..FilterState::default() },
            6,
            now(),
        );
        assert!(new.page.iter().all(|b| b.new_customer));
        assert!(existing.page.iter().all(|b| !b.new_customer));
        assert_eq!(new.page.len() + existing.page.len(), bookings.len());
    }

    #[test]
    fn test_stats_come_from_unfiltered_collection() {
        let bookings = sample();
        let view = apply(
            &bookings,
            &FilterState { search_term: "plumbing".to_string(), ..FilterState::default() },
            6,
            now(),
        );
        assert_eq!(view.page.len(), 1);
        assert_eq!(view.stats.total, 4);
        assert_eq!(view.stats.upcoming, 2); // plumbing (17th), pest (20th)
        assert_eq!(view.stats.completed, 2); // ac (15th), clean (May 1st)
        assert_eq!(view.stats.new_customers, 2);
    }

    #[test]
    fn test_completed_stat_by_status_basis() {
        let mut bookings = sample();
        bookings[3].status = BookingStatus::Completed;
        let by_date = stats_with(&bookings, now(), CompletedBasis::BookingDate);
        let by_status = stats_with(&bookings, now(), CompletedBasis::Status);
        assert_eq!(by_date.completed, 2);
        assert_eq!(by_status.completed, 1);
    }
}
