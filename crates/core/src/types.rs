use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Notification text shown when the endpoint accepts a registration
pub const SUCCESS_MESSAGE: &str = "Cadastro Realizado";

/// Fallback notification text when a failure carries no usable message
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Não foi possível realizar o cadastro. Tente novamente.";

/// The eight validated text fields of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    MobilePhone,
    DocumentId,
    BirthDate,
    Password,
    PasswordConfirmation,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::MobilePhone,
        Field::DocumentId,
        Field::BirthDate,
        Field::Password,
        Field::PasswordConfirmation,
    ];

    /// Wire name, exactly as serialized in the registration payload
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::MobilePhone => "mobilePhone",
            Field::DocumentId => "documentId",
            Field::BirthDate => "birthDate",
            Field::Password => "password",
            Field::PasswordConfirmation => "passwordConfirmation",
        }
    }

    /// Label shown next to the input on the form surface
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "Nome",
            Field::LastName => "Sobrenome",
            Field::Email => "Email",
            Field::MobilePhone => "Celular",
            Field::DocumentId => "CPF",
            Field::BirthDate => "Data de Nascimento",
            Field::Password => "Senha",
            Field::PasswordConfirmation => "Confirmar Senha",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Gender selection; the wire codes follow the endpoint contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "f")]
    Female,
    #[default]
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "other")]
    Unspecified,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Feminino",
            Gender::Male => "Masculino",
            Gender::Unspecified => "Não quero informar",
        }
    }
}

/// One of the six independent communication-consent toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consent {
    AcceptsEmail,
    AcceptsSms,
    AcceptsWhatsapp,
    PartnerEmail,
    PartnerSms,
    PartnerWhatsapp,
}

impl Consent {
    pub const ALL: [Consent; 6] = [
        Consent::AcceptsEmail,
        Consent::AcceptsSms,
        Consent::AcceptsWhatsapp,
        Consent::PartnerEmail,
        Consent::PartnerSms,
        Consent::PartnerWhatsapp,
    ];
}

/// The complete field set sent to the registration endpoint.
///
/// Phone and document keep whatever the user typed (possibly masked); the
/// endpoint strips non-digits itself if it needs raw digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_phone: String,
    pub document_id: String,
    pub birth_date: String,
    pub password: String,
    pub password_confirmation: String,
    pub gender: Gender,
    pub accepts_email: bool,
    pub accepts_sms: bool,
    pub accepts_whatsapp: bool,
    pub partner_email: bool,
    pub partner_sms: bool,
    pub partner_whatsapp: bool,
}

impl RegistrationRequest {
    /// Read a text field by its enum key
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::MobilePhone => &self.mobile_phone,
            Field::DocumentId => &self.document_id,
            Field::BirthDate => &self.birth_date,
            Field::Password => &self.password,
            Field::PasswordConfirmation => &self.password_confirmation,
        }
    }

    /// Write a text field by its enum key
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::MobilePhone => self.mobile_phone = value,
            Field::DocumentId => self.document_id = value,
            Field::BirthDate => self.birth_date = value,
            Field::Password => self.password = value,
            Field::PasswordConfirmation => self.password_confirmation = value,
        }
    }

    pub fn consent(&self, consent: Consent) -> bool {
        match consent {
            Consent::AcceptsEmail => self.accepts_email,
            Consent::AcceptsSms => self.accepts_sms,
            Consent::AcceptsWhatsapp => self.accepts_whatsapp,
            Consent::PartnerEmail => self.partner_email,
            Consent::PartnerSms => self.partner_sms,
            Consent::PartnerWhatsapp => self.partner_whatsapp,
        }
    }

    pub fn set_consent(&mut self, consent: Consent, granted: bool) {
        match consent {
            Consent::AcceptsEmail => self.accepts_email = granted,
            Consent::AcceptsSms => self.accepts_sms = granted,
            Consent::AcceptsWhatsapp => self.accepts_whatsapp = granted,
            Consent::PartnerEmail => self.partner_email = granted,
            Consent::PartnerSms => self.partner_sms = granted,
            Consent::PartnerWhatsapp => self.partner_whatsapp = granted,
        }
    }
}

/// Response metadata for an accepted registration
#[derive(Debug, Clone)]
pub struct RegistrationReceipt {
    pub status: u16,
    pub response_time_ms: u64,
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

/// The remote registration endpoint, as seen by the form
#[async_trait]
pub trait RegistrationApi: Send + Sync + 'static {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = RegistrationRequest::default();

        assert_eq!(request.gender, Gender::Male);
        for field in Field::ALL {
            assert_eq!(request.field(field), "");
        }
        for consent in Consent::ALL {
            assert!(!request.consent(consent));
        }
    }

    #[test]
    fn test_field_roundtrip_by_key() {
        let mut request = RegistrationRequest::default();
        request.set_field(Field::Email, "a@b.com");
        request.set_consent(Consent::PartnerSms, true);

        assert_eq!(request.field(Field::Email), "a@b.com");
        assert_eq!(request.email, "a@b.com");
        assert!(request.partner_sms);
        assert!(!request.accepts_sms);
    }

    #[test]
    fn test_gender_wire_codes() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"f\"");
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"m\"");
        assert_eq!(
            serde_json::to_string(&Gender::Unspecified).unwrap(),
            "\"other\""
        );
    }
}
