mod contact_email;
mod message_body;
mod person_name;
mod submission_id;

pub use contact_email::ContactEmail;
pub use message_body::MessageBody;
pub use person_name::PersonName;
pub use submission_id::SubmissionId;
