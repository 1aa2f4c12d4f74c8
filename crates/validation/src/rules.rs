use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use cadastro_core::{Field, RegistrationRequest};

static LETTERS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

// local@domain with at least one dot in the domain part
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Minimum digit count for CPF and mobile numbers after stripping the mask
const MIN_DIGITS: usize = 11;

const MIN_PASSWORD_CHARS: usize = 6;

/// Per-field error messages from one validation pass. Fields that passed
/// their rule have no entry; an empty map means the field set is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(|m| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

/// Validate the whole field set. Pure: depends only on the request passed in.
pub fn validate(request: &RegistrationRequest) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for field in Field::ALL {
        if let Some(message) = check_field(request, field) {
            errors.insert(field, message);
        }
    }

    errors
}

/// Rule for a single field. The required check always runs before the
/// format check, so an empty field reports its required message only.
fn check_field(request: &RegistrationRequest, field: Field) -> Option<String> {
    let value = request.field(field);

    match field {
        Field::FirstName => {
            letters_only(value, "Nome é obrigátorio", "Nome deve conter apenas letras.")
        }
        Field::LastName => letters_only(
            value,
            "Sobrenome é obrigátorio",
            "Sobrenome deve conter apenas letras.",
        ),
        Field::Email => {
            if value.is_empty() {
                Some("Email é obrigátorio".to_string())
            } else if !EMAIL_RE.is_match(value) {
                Some("Deve ser um email valido exemplo@exemplo.com.".to_string())
            } else {
                None
            }
        }
        Field::MobilePhone => min_digits(
            value,
            "Celular é obrigatório",
            "Celular deve conter 11 digitos.",
        ),
        Field::DocumentId => {
            min_digits(value, "CPF é obrigatório", "CPF deve conter 11 digitos.")
        }
        Field::BirthDate => {
            // No calendar or age check, presence only
            if value.is_empty() {
                Some("Data de Nascimento é obrigatória.".to_string())
            } else {
                None
            }
        }
        Field::Password => {
            if value.is_empty() {
                Some("Senha é obrigatória".to_string())
            } else if value.chars().count() < MIN_PASSWORD_CHARS {
                Some("Senha deve conter no minino 6 caracteres.".to_string())
            } else {
                None
            }
        }
        Field::PasswordConfirmation => {
            if value.is_empty() {
                Some("Confirmar Senha é obrigatória".to_string())
            } else if value != request.field(Field::Password) {
                Some("As senhas tem que ser iguais.".to_string())
            } else {
                None
            }
        }
    }
}

fn letters_only(value: &str, required: &str, format: &str) -> Option<String> {
    if value.is_empty() {
        Some(required.to_string())
    } else if !LETTERS_RE.is_match(value) {
        Some(format.to_string())
    } else {
        None
    }
}

fn min_digits(value: &str, required: &str, short: &str) -> Option<String> {
    if value.is_empty() {
        Some(required.to_string())
    } else if digit_count(value) < MIN_DIGITS {
        Some(short.to_string())
    } else {
        None
    }
}

fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegistrationRequest {
        let mut request = RegistrationRequest::default();
        request.set_field(Field::FirstName, "Maria");
        request.set_field(Field::LastName, "Silva");
        request.set_field(Field::Email, "maria@exemplo.com");
        request.set_field(Field::MobilePhone, "(11) 987654321");
        request.set_field(Field::DocumentId, "123.456.789-00");
        request.set_field(Field::BirthDate, "1990-05-12");
        request.set_field(Field::Password, "abc123");
        request.set_field(Field::PasswordConfirmation, "abc123");
        request
    }

    #[test]
    fn test_valid_request_has_no_errors() {
        let errors = validate(&valid_request());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_every_required_field_reports_when_empty() {
        for field in Field::ALL {
            let mut request = valid_request();
            request.set_field(field, "");

            let errors = validate(&request);
            assert!(
                errors.message(field).is_some(),
                "{} should be required",
                field
            );
        }
    }

    #[test]
    fn test_names_reject_digits_and_spaces() {
        let mut request = valid_request();
        request.set_field(Field::FirstName, "Maria2");
        request.set_field(Field::LastName, "da Silva");

        let errors = validate(&request);
        assert_eq!(
            errors.message(Field::FirstName),
            Some("Nome deve conter apenas letras.")
        );
        assert_eq!(
            errors.message(Field::LastName),
            Some("Sobrenome deve conter apenas letras.")
        );
    }

    #[test]
    fn test_email_needs_dot_in_domain() {
        let mut request = valid_request();
        request.set_field(Field::Email, "maria@exemplo");
        assert_eq!(
            validate(&request).message(Field::Email),
            Some("Deve ser um email valido exemplo@exemplo.com.")
        );

        request.set_field(Field::Email, "maria@exemplo.com.br");
        assert!(validate(&request).message(Field::Email).is_none());
    }

    #[test]
    fn test_document_length_counts_digits_only() {
        let mut request = valid_request();
        request.set_field(Field::DocumentId, "123.456.789-00");
        assert!(validate(&request).message(Field::DocumentId).is_none());

        request.set_field(Field::DocumentId, "123.45");
        assert_eq!(
            validate(&request).message(Field::DocumentId),
            Some("CPF deve conter 11 digitos.")
        );
    }

    #[test]
    fn test_phone_length_counts_digits_only() {
        let mut request = valid_request();
        request.set_field(Field::MobilePhone, "(11) 9876");
        assert_eq!(
            validate(&request).message(Field::MobilePhone),
            Some("Celular deve conter 11 digitos.")
        );
    }

    #[test]
    fn test_password_minimum_length() {
        let mut request = valid_request();
        request.set_field(Field::Password, "abc12");
        request.set_field(Field::PasswordConfirmation, "abc12");
        assert_eq!(
            validate(&request).message(Field::Password),
            Some("Senha deve conter no minino 6 caracteres.")
        );

        request.set_field(Field::Password, "abc123");
        request.set_field(Field::PasswordConfirmation, "abc123");
        assert!(validate(&request).message(Field::Password).is_none());
    }

    #[test]
    fn test_password_confirmation_tracks_password() {
        let mut request = valid_request();
        request.set_field(Field::PasswordConfirmation, "abc124");
        assert_eq!(
            validate(&request).message(Field::PasswordConfirmation),
            Some("As senhas tem que ser iguais.")
        );

        // Changing the password side re-evaluates the pair
        request.set_field(Field::Password, "abc124");
        assert!(validate(&request)
            .message(Field::PasswordConfirmation)
            .is_none());
    }

    #[test]
    fn test_birth_date_presence_only() {
        let mut request = valid_request();
        request.set_field(Field::BirthDate, "9999-99-99");
        assert!(validate(&request).message(Field::BirthDate).is_none());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut request = valid_request();
        request.set_field(Field::Email, "not-an-email");
        request.set_field(Field::Password, "a");

        assert_eq!(validate(&request), validate(&request));
    }
}
