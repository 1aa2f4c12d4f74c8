use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use cadastro_client::HttpRegistrationClient;
use cadastro_core::{AppConfig, Consent, Field, Gender};
use cadastro_form::{FormController, FormState, Severity};
use cadastro_validation::mask;

use crate::cli::FieldArgs;

pub async fn run_submit(config: &AppConfig, args: &FieldArgs) -> Result<()> {
    let mut controller = build_controller(config)?;
    fill(&mut controller, args)?;

    info!(
        document = %mask::document(controller.value(Field::DocumentId)),
        phone = %mask::mobile_phone(controller.value(Field::MobilePhone)),
        "submitting registration"
    );

    let state = controller.submit().await;
    print_feedback(&controller);

    match state {
        FormState::Success => Ok(()),
        _ => anyhow::bail!("registration not completed"),
    }
}

pub fn run_validate(config: &AppConfig, args: &FieldArgs) -> Result<()> {
    let mut controller = build_controller(config)?;
    fill(&mut controller, args)?;

    let mut invalid = 0;
    for field in Field::ALL {
        controller.touch_field(field);
        if let Some(message) = controller.error(field) {
            println!("{}: {}", field.label(), message);
            invalid += 1;
        }
    }

    if invalid == 0 {
        println!("todos os campos válidos");
        Ok(())
    } else {
        anyhow::bail!("{invalid} invalid fields")
    }
}

fn build_controller(config: &AppConfig) -> Result<FormController> {
    let api = Arc::new(HttpRegistrationClient::new(&config.api)?);
    Ok(FormController::with_dismiss_interval(
        api,
        Duration::from_millis(config.form.notification_dismiss_ms),
    ))
}

fn fill(controller: &mut FormController, args: &FieldArgs) -> Result<()> {
    controller.set_field(Field::FirstName, args.first_name.as_str());
    controller.set_field(Field::LastName, args.last_name.as_str());
    controller.set_field(Field::Email, args.email.as_str());
    controller.set_field(Field::MobilePhone, args.mobile_phone.as_str());
    controller.set_field(Field::DocumentId, args.document_id.as_str());
    controller.set_field(Field::BirthDate, args.birth_date.as_str());
    controller.set_field(Field::Password, args.password.as_str());
    controller.set_field(
        Field::PasswordConfirmation,
        args.password_confirmation.as_str(),
    );
    controller.set_gender(parse_gender(&args.gender)?);

    controller.set_consent(Consent::AcceptsEmail, args.accepts_email);
    controller.set_consent(Consent::AcceptsSms, args.accepts_sms);
    controller.set_consent(Consent::AcceptsWhatsapp, args.accepts_whatsapp);
    controller.set_consent(Consent::PartnerEmail, args.partner_email);
    controller.set_consent(Consent::PartnerSms, args.partner_sms);
    controller.set_consent(Consent::PartnerWhatsapp, args.partner_whatsapp);

    Ok(())
}

fn parse_gender(value: &str) -> Result<Gender> {
    match value {
        "f" | "feminino" => Ok(Gender::Female),
        "m" | "masculino" => Ok(Gender::Male),
        "other" | "outro" => Ok(Gender::Unspecified),
        _ => anyhow::bail!("invalid gender '{value}' (expected f, m or other)"),
    }
}

fn print_feedback(controller: &FormController) {
    for field in Field::ALL {
        if let Some(message) = controller.error(field) {
            println!("{}: {}", field.label(), message);
        }
    }

    if let Some(notification) = controller.notification() {
        match notification.severity() {
            Severity::Success => println!("✓ {}", notification.message()),
            Severity::Error => println!("✗ {}", notification.message()),
        }
    }
}
