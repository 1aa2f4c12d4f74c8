use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cadastro", about = "Registration form client")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the field set and submit it to the registration endpoint
    Submit(FieldArgs),
    /// Run validation only and print the per-field errors
    Validate(FieldArgs),
}

#[derive(Args)]
pub struct FieldArgs {
    /// First name (letters only)
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Last name (letters only)
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Mobile phone, masked or raw digits
    #[arg(long, default_value = "")]
    pub mobile_phone: String,

    /// CPF, masked or raw digits
    #[arg(long, default_value = "")]
    pub document_id: String,

    /// Birth date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub birth_date: String,

    /// Password (6 characters minimum)
    #[arg(long, default_value = "")]
    pub password: String,

    /// Password confirmation
    #[arg(long, default_value = "")]
    pub password_confirmation: String,

    /// Gender: f, m or other
    #[arg(long, default_value = "m")]
    pub gender: String,

    /// Consent to email communication
    #[arg(long)]
    pub accepts_email: bool,

    /// Consent to SMS communication
    #[arg(long)]
    pub accepts_sms: bool,

    /// Consent to WhatsApp communication
    #[arg(long)]
    pub accepts_whatsapp: bool,

    /// Consent to partner email communication
    #[arg(long)]
    pub partner_email: bool,

    /// Consent to partner SMS communication
    #[arg(long)]
    pub partner_sms: bool,

    /// Consent to partner WhatsApp communication
    #[arg(long)]
    pub partner_whatsapp: bool,
}
