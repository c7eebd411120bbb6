use log::info;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso! Entraremos em contato em breve.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} é obrigatório")]
    MissingField(&'static str),
    #[error("e-mail inválido")]
    InvalidEmail,
}

impl ContactMessage {
    /// Trims every field and checks the required ones. Subject is optional.
    pub fn validated(self) -> Result<Self, ContactError> {
        let message = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        if message.name.is_empty() {
            return Err(ContactError::MissingField("nome"));
        }
        if message.email.is_empty() {
            return Err(ContactError::MissingField("e-mail"));
        }
        if message.message.is_empty() {
            return Err(ContactError::MissingField("mensagem"));
        }
        match message.email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(message),
            _ => Err(ContactError::InvalidEmail),
        }
    }
}

/// Delivery of a contact message.
pub trait FormSubmitter {
    fn submit(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Accepts every message without sending it anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulatedSubmitter;

impl FormSubmitter for SimulatedSubmitter {
    fn submit(&self, message: &ContactMessage) -> Result<(), ContactError> {
        info!(
            "Contact message from {} <{}>, subject {:?} ({} chars)",
            message.name,
            message.email,
            message.subject,
            message.message.chars().count()
        );
        Ok(())
    }
}

/// Validates, then hands the message to `submitter`.
pub fn send<F: FormSubmitter + ?Sized>(submitter: &F, message: ContactMessage) -> Result<ContactMessage, ContactError> {
    let message = message.validated()?;
    submitter.submit(&message)?;
    Ok(message)
}
