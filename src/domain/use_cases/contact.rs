use crate::{
    entities::contact_me::{ContactMeFormInsert, ContactMeResponse, NewContactMeForm},
    errors::AppError,
    repositories::contact_me::ContactMeRepository,
};

pub struct ContactMeHandler<R>
where 
    R: ContactMeRepository,
{
    pub contact_repo: R,
}

impl<R> ContactMeHandler<R>
where 
    R: ContactMeRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactMeHandler { contact_repo }
    }

    /// Handles the creation of a new contact message
    pub async fn create_contact_message(
        &self, 
        request: NewContactMeForm
    ) -> Result<ContactMeResponse, AppError> {
        let new_msg = ContactMeFormInsert::try_from(request)?;

        let id = self.contact_repo.create_contact_message(&new_msg).await?;

        tracing::info!(message_id = %id, "Contact message received");

        Ok(ContactMeResponse {
            message: "Your message has been received.".to_string(),
            id,
        })
    }
}
