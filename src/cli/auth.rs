use super::check_fields;
use crate::services::api::{
    AuthApi, ChangePasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest,
};
use crate::services::validate::{self, Field, PasswordContext};
use crate::state::AppState;

pub async fn login(state: &mut AppState, email: &str, password: &str) -> anyhow::Result<()> {
    check_fields(&[
        (Field::Email, email),
        (Field::Password(PasswordContext::Login), password),
    ])?;

    let profile = state
        .session
        .login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;

    println!("Welcome back, {}!", profile.name);
    Ok(())
}

pub async fn signup(
    state: &mut AppState,
    name: &str,
    email: &str,
    contact: &str,
    password: &str,
    confirm_password: &str,
) -> anyhow::Result<()> {
    check_fields(&[
        (Field::Name, name),
        (Field::Email, email),
        (Field::Contact, contact),
        (Field::Password(PasswordContext::Signup), password),
        (Field::ConfirmPassword { password }, confirm_password),
    ])?;

    if let Some(label) = validate::score_label(validate::strength_score(password)) {
        println!("Password strength: {label}");
    }

    let profile = state
        .session
        .signup(&SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            contact: contact.to_string(),
            password: password.to_string(),
        })
        .await?;

    println!("Welcome, {}! Your account has been created.", profile.name);
    Ok(())
}

pub async fn logout(state: &mut AppState) -> anyhow::Result<()> {
    state.session.logout().await;
    println!("Signed out.");
    Ok(())
}

pub async fn forgot_password(state: &AppState, email: &str) -> anyhow::Result<()> {
    check_fields(&[(Field::Email, email)])?;

    state.session.api().forgot_password(email).await?;
    println!("We've sent a password reset link to {email}. Please check your email.");
    Ok(())
}

pub async fn reset_password(
    state: &AppState,
    token: &str,
    password: &str,
    confirm_password: &str,
) -> anyhow::Result<()> {
    check_fields(&[
        (Field::Password(PasswordContext::Reset), password),
        (Field::ConfirmPassword { password }, confirm_password),
    ])?;

    state
        .session
        .api()
        .reset_password(
            token,
            &ResetPasswordRequest {
                password: password.to_string(),
                confirm_password: confirm_password.to_string(),
            },
        )
        .await?;

    println!("Your password has been updated. You can now log in with your new password.");
    Ok(())
}

pub async fn change_password(
    state: &mut AppState,
    current: &str,
    new: &str,
    confirm: &str,
) -> anyhow::Result<()> {
    anyhow::ensure!(!current.is_empty(), "Current password is required");
    check_fields(&[
        (Field::NewPassword { current_password: current }, new),
        (Field::ConfirmPassword { password: new }, confirm),
    ])?;

    let percent = validate::strength_percent(new);
    println!(
        "Password strength: {} ({percent:.0}%)",
        validate::percent_label(percent)
    );

    state
        .session
        .change_password(&ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
        })
        .await?;

    // The server invalidates the old session, so drop ours too.
    state.session.logout().await;
    println!("Password changed successfully! Please login again.");
    Ok(())
}
