pub mod auth;
pub mod bookings;
pub mod documents;
pub mod profile;

use clap::{Parser, Subcommand};

use crate::services::validate::{self, Field};
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "servicebook")]
#[command(about = "Customer portal for the services-booking platform")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        contact: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Sign out and clear the cached session
    Logout,

    /// Show the signed-in profile
    Whoami,

    /// Request a password-reset email
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Set a new password using an emailed reset token
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Change the signed-in account's password (signs you out on success)
    ChangePassword {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },

    /// Update the signed-in profile; omitted fields keep their value
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        representative_name: Option<String>,
        #[arg(long)]
        representative_contact: Option<String>,
        #[arg(long)]
        gst_number: Option<String>,
    },

    /// List your bookings with search, filters, sorting, and paging
    Bookings {
        /// Match against service names and the additional-services note
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all", value_parser = ["all", "today", "week", "month", "upcoming", "past"])]
        date: String,
        #[arg(long, default_value = "all", value_parser = ["all", "new", "existing"])]
        customer: String,
        #[arg(long, default_value = "newest", value_parser = ["newest", "oldest", "date-asc", "date-desc"])]
        sort: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show one booking with its progress and vendor details
    Booking {
        id: String,
    },

    /// Book a service (requires a complete profile)
    Book {
        /// Repeatable; must come from the service catalog
        #[arg(long = "service", required = true)]
        services: Vec<String>,
        /// Requested service date, YYYY-MM-DD (today or later)
        #[arg(long)]
        date: String,
        #[arg(long, value_parser = ["new", "existing"])]
        customer: String,
        /// Free-text note describing additional requirements
        #[arg(long)]
        notes: Option<String>,
    },

    /// List quotations received on your bookings
    Quotations,

    /// Accept, reject, or download a quotation
    Quotation {
        #[command(subcommand)]
        action: QuotationAction,
    },

    /// List invoices for completed bookings
    Invoices,

    /// Download the invoice for a completed booking
    Invoice {
        #[command(subcommand)]
        action: InvoiceAction,
    },
}

#[derive(Subcommand)]
pub enum QuotationAction {
    Accept { id: String },
    Reject { id: String },
    Download {
        id: String,
        /// Output path; defaults to quotation-<id>.pdf
        #[arg(long)]
        out: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum InvoiceAction {
    Download {
        id: String,
        /// Output path; defaults to invoice-<id>.pdf
        #[arg(long)]
        out: Option<String>,
    },
}

pub async fn run(cli: Cli, state: &mut AppState) -> anyhow::Result<()> {
    match cli.command {
        Command::Login { email, password } => auth::login(state, &email, &password).await,
        Command::Signup {
            name,
            email,
            contact,
            password,
            confirm_password,
        } => auth::signup(state, &name, &email, &contact, &password, &confirm_password).await,
        Command::Logout => auth::logout(state).await,
        Command::Whoami => profile::whoami(state),
        Command::ForgotPassword { email } => auth::forgot_password(state, &email).await,
        Command::ResetPassword {
            token,
            password,
            confirm_password,
        } => auth::reset_password(state, &token, &password, &confirm_password).await,
        Command::ChangePassword { current, new, confirm } => {
            auth::change_password(state, &current, &new, &confirm).await
        }
        Command::UpdateProfile {
            name,
            email,
            contact,
            representative_name,
            representative_contact,
            gst_number,
        } => {
            profile::update(
                state,
                name,
                email,
                contact,
                representative_name,
                representative_contact,
                gst_number,
            )
            .await
        }
        Command::Bookings {
            search,
            date,
            customer,
            sort,
            page,
        } => bookings::list(state, &search, &date, &customer, &sort, page).await,
        Command::Booking { id } => bookings::show(state, &id).await,
        Command::Book {
            services,
            date,
            customer,
            notes,
        } => bookings::book(state, services, &date, &customer, notes).await,
        Command::Quotations => documents::quotations(state).await,
        Command::Quotation { action } => documents::quotation_action(state, action).await,
        Command::Invoices => documents::invoices(state).await,
        Command::Invoice { action } => documents::invoice_action(state, action).await,
    }
}

/// Runs every rule, printing each failure inline, and refuses submission
/// when any rule failed.
pub(crate) fn check_fields(checks: &[(Field<'_>, &str)]) -> anyhow::Result<()> {
    let mut ok = true;
    for (field, value) in checks {
        if let Err(err) = validate::validate(*field, value) {
            eprintln!("  - {err}");
            ok = false;
        }
    }
    if !ok {
        anyhow::bail!("Please fix all errors before submitting");
    }
    Ok(())
}
