use std::fs;

use anyhow::Context;

use super::{InvoiceAction, QuotationAction};
use crate::services::api::BookingApi;
use crate::state::AppState;

pub async fn quotations(state: &AppState) -> anyhow::Result<()> {
    let bookings = state.bookings.my_bookings().await?;
    let with_quotation: Vec<_> = bookings.iter().filter(|b| b.has_quotation()).collect();

    if with_quotation.is_empty() {
        println!("You don't have any quotations yet. Your quotations will appear here once vendors respond to your bookings.");
        return Ok(());
    }

    for booking in with_quotation {
        let approval = match booking.quotation_approved {
            Some(true) => "Accepted",
            Some(false) => "Rejected",
            None => "Awaiting your response",
        };
        println!(
            "{}  {}  [{}]",
            booking.id,
            booking.services.join(", "),
            approval
        );
    }
    Ok(())
}

pub async fn quotation_action(state: &AppState, action: QuotationAction) -> anyhow::Result<()> {
    match action {
        QuotationAction::Accept { id } => {
            state.bookings.set_quotation_approval(&id, true).await?;
            println!("Quotation accepted");
        }
        QuotationAction::Reject { id } => {
            state.bookings.set_quotation_approval(&id, false).await?;
            println!("Quotation rejected");
        }
        QuotationAction::Download { id, out } => {
            let bytes = state.bookings.quotation_document(&id).await?;
            let out = out.unwrap_or_else(|| format!("quotation-{id}.pdf"));
            fs::write(&out, bytes).with_context(|| format!("failed to write {out}"))?;
            println!("Saved quotation to {out}");
        }
    }
    Ok(())
}

pub async fn invoices(state: &AppState) -> anyhow::Result<()> {
    let bookings = state.bookings.my_bookings().await?;
    let invoiced: Vec<_> = bookings.iter().filter(|b| b.has_invoice()).collect();

    if invoiced.is_empty() {
        println!("It looks like you don't have any completed bookings with an invoice yet.");
        println!("Once a service is completed and the invoice is generated, it will appear here.");
        return Ok(());
    }

    for booking in &invoiced {
        println!(
            "{}  {}  completed {}",
            booking.id,
            booking.services.join(", "),
            booking.updated_at.format("%d %b %Y")
        );
    }
    println!();
    println!("Showing all completed bookings with generated invoices ({})", invoiced.len());
    Ok(())
}

pub async fn invoice_action(state: &AppState, action: InvoiceAction) -> anyhow::Result<()> {
    match action {
        InvoiceAction::Download { id, out } => {
            let bytes = state.bookings.invoice_document(&id).await?;
            let out = out.unwrap_or_else(|| format!("invoice-{id}.pdf"));
            fs::write(&out, bytes).with_context(|| format!("failed to write {out}"))?;
            println!("Saved invoice to {out}");
        }
    }
    Ok(())
}
