use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

// ───── Rate limiting ─────────────────────────────────────────────────
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 3;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
pub const DEFAULT_RATE_LIMIT_SWEEP_SECS: u64 = 300;
pub const UNKNOWN_SOURCE: &str = "unknown";

// ───── Contact form ──────────────────────────────────────────────────
pub const MAX_NAME_CHARS: u64 = 100;
pub const MAX_EMAIL_CHARS: u64 = 255;
pub const MAX_SUBJECT_CHARS: u64 = 200;
pub const MAX_MESSAGE_CHARS: u64 = 2000;
pub const MAX_LINKS_PER_MESSAGE: usize = 2;

// ───── Responses ─────────────────────────────────────────────────────
pub const CONTACT_SENT_MESSAGE: &str = "Message sent successfully! Thank you for reaching out.";
pub const INVALID_FORM_MESSAGE: &str = "Invalid form data. Please check all fields and try again.";
pub const RATE_LIMITED_MESSAGE: &str = "Rate limit exceeded. Please wait before sending another message.";
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to process contact form. Please try again later.";
