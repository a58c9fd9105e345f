mod salary;
mod webhook;

pub use salary::{Company, DEFAULT_SITE_URL, SalaryEntriesPage, SalaryEntry};
pub use webhook::{Embed, EmbedAuthor, EmbedField, WebhookMessage};
