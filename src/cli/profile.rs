use super::check_fields;
use crate::services::api::{AuthApi, UpdateProfileRequest};
use crate::services::validate::Field;
use crate::state::AppState;

pub fn whoami(state: &AppState) -> anyhow::Result<()> {
    let Some(user) = state.session.user() else {
        println!("Not signed in.");
        return Ok(());
    };

    println!("Name:                   {}", user.name);
    println!("Email:                  {}", user.email);
    println!("Contact:                {}", user.contact);
    println!(
        "Representative:         {}",
        user.representative_name.as_deref().unwrap_or("Not Provided")
    );
    println!(
        "Representative Contact: {}",
        user.representative_contact.as_deref().unwrap_or("Not Provided")
    );
    println!(
        "GST Number:             {}",
        user.gst_number.as_deref().unwrap_or("Not Provided")
    );
    if let Some(customer_type) = &user.customer_type {
        println!("Customer Type:          {customer_type}");
    }
    if let Some(created_at) = user.created_at {
        println!("Member Since:           {}", created_at.format("%d %b %Y"));
    }
    println!(
        "Profile Complete:       {}",
        if user.is_complete() { "yes" } else { "no (required before booking)" }
    );
    Ok(())
}

/// Omitted flags keep the current value, like the pre-filled web form.
pub async fn update(
    state: &mut AppState,
    name: Option<String>,
    email: Option<String>,
    contact: Option<String>,
    representative_name: Option<String>,
    representative_contact: Option<String>,
    gst_number: Option<String>,
) -> anyhow::Result<()> {
    let Some(current) = state.session.user() else {
        anyhow::bail!("Please sign in to update your profile");
    };

    let request = UpdateProfileRequest {
        name: name.unwrap_or_else(|| current.name.clone()),
        email: email.unwrap_or_else(|| current.email.clone()),
        contact: contact.unwrap_or_else(|| current.contact.clone()),
        representative_name: representative_name.or_else(|| current.representative_name.clone()),
        representative_contact: representative_contact
            .or_else(|| current.representative_contact.clone()),
        gst_number: gst_number.or_else(|| current.gst_number.clone()),
    };

    check_fields(&[
        (Field::Name, &request.name),
        (Field::Email, &request.email),
        (Field::Contact, &request.contact),
        (Field::GstNumber, request.gst_number.as_deref().unwrap_or("")),
    ])?;

    let updated = state.session.api().update_profile(&request).await?;
    state.session.set_user(updated);
    println!("Profile updated successfully!");
    Ok(())
}
