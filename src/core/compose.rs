use crate::core::{ContactSubmission, OutgoingEmail};

pub const SUBJECT_PREFIX: &str = "New message from";

/// 將表單內容映射成郵件，所有欄位原樣保留
pub fn compose_email(submission: &ContactSubmission, recipient: &str) -> OutgoingEmail {
    OutgoingEmail {
        sender_name: submission.name.clone(),
        sender_email: submission.email.clone(),
        reply_to: submission.email.clone(),
        to: recipient.to_string(),
        subject: format!("{} {}", SUBJECT_PREFIX, submission.name),
        text: submission.message.clone(),
    }
}
