use serde::{Deserialize, Serialize};

/// Ephemeral bookings-list view parameters. Owned by the list view for the
/// life of a session; nothing here is persisted. Changing a filter does NOT
/// reset `current_page`; an out-of-range page renders empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub date_filter: DateFilter,
    pub customer_filter: CustomerFilter,
    pub sort_by: SortBy,
    pub current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            date_filter: DateFilter::All,
            customer_filter: CustomerFilter::All,
            sort_by: SortBy::Newest,
            current_page: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateFilter {
    All,
    Today,
    Week,
    Month,
    Upcoming,
    Past,
}

impl DateFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilter::All => "all",
            DateFilter::Today => "today",
            DateFilter::Week => "week",
            DateFilter::Month => "month",
            DateFilter::Upcoming => "upcoming",
            DateFilter::Past => "past",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "today" => DateFilter::Today,
            "week" => DateFilter::Week,
            "month" => DateFilter::Month,
            "upcoming" => DateFilter::Upcoming,
            "past" => DateFilter::Past,
            _ => DateFilter::All,
        }
    }
}

impl From<String> for DateFilter {
    fn from(s: String) -> Self {
        DateFilter::from_str(&s)
    }
}

impl From<DateFilter> for String {
    fn from(f: DateFilter) -> Self {
        f.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomerFilter {
    All,
    New,
    Existing,
}

impl CustomerFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerFilter::All => "all",
            CustomerFilter::New => "new",
            CustomerFilter::Existing => "existing",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "new" => CustomerFilter::New,
            "existing" => CustomerFilter::Existing,
            _ => CustomerFilter::All,
        }
    }
}

impl From<String> for CustomerFilter {
    fn from(s: String) -> Self {
        CustomerFilter::from_str(&s)
    }
}

impl From<CustomerFilter> for String {
    fn from(f: CustomerFilter) -> Self {
        f.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortBy {
    /// Most recently created first.
    Newest,
    Oldest,
    DateAsc,
    DateDesc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::Oldest => "oldest",
            SortBy::DateAsc => "date-asc",
            SortBy::DateDesc => "date-desc",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "oldest" => SortBy::Oldest,
            "date-asc" => SortBy::DateAsc,
            "date-desc" => SortBy::DateDesc,
            _ => SortBy::Newest,
        }
    }
}

impl From<String> for SortBy {
    fn from(s: String) -> Self {
        SortBy::from_str(&s)
    }
}

impl From<SortBy> for String {
    fn from(s: SortBy) -> Self {
        s.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_state() {
        let f = FilterState::default();
        assert_eq!(f.date_filter, DateFilter::All);
        assert_eq!(f.customer_filter, CustomerFilter::All);
        assert_eq!(f.sort_by, SortBy::Newest);
        assert_eq!(f.current_page, 1);
        assert!(f.search_term.is_empty());
    }

    #[test]
    fn test_unknown_tokens_fall_back() {
        assert_eq!(DateFilter::from_str("fortnight"), DateFilter::All);
        assert_eq!(SortBy::from_str("zigzag"), SortBy::Newest);
        assert_eq!(CustomerFilter::from_str(""), CustomerFilter::All);
    }
}
