use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewContactMeForm {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 100))]
    pub subject: Option<String>,

    #[validate(length(min = 5, max = 1000))]
    pub message: String,
}

/// Trimmed, normalized form ready for the database.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ContactMeFormInsert {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(max = 100, message = "Subject must be at most 100 characters"))]
    pub subject: Option<String>,

    #[validate(length(min = 5, max = 1000, message = "Message must be between 5 and 1000 characters"))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactMeResponse {
    pub id: Uuid,
    pub message: String,
}

impl TryFrom<NewContactMeForm> for ContactMeFormInsert {
    type Error = ValidationErrors;

    fn try_from(form: NewContactMeForm) -> Result<Self, Self::Error> {
        let insert = ContactMeFormInsert {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_lowercase(),
            subject: form.subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            message: form.message.trim().to_string(),
        };

        insert.validate()?;
        Ok(insert)
    }
}
