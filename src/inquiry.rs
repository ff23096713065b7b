use std::fmt;

use chrono::NaiveDate;
use gloo_net::http::Request;
use serde::Serialize;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Wedding,
    Corporate,
    Social,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Wedding,
        EventType::Corporate,
        EventType::Social,
        EventType::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Corporate => "corporate",
            EventType::Social => "social",
            EventType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventType::Wedding => "Wedding",
            EventType::Corporate => "Corporate",
            EventType::Social => "Social",
            EventType::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// Raw field values as typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub event_date: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InquiryError {
    MissingField(&'static str),
    InvalidEmail,
    UnknownEventType(String),
    InvalidDate(String),
    DateInPast(NaiveDate),
}

impl fmt::Display for InquiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InquiryError::MissingField(field) => write!(f, "Please fill in your {}.", field),
            InquiryError::InvalidEmail => write!(f, "Please enter a valid email address."),
            InquiryError::UnknownEventType(value) => write!(f, "Unknown event type: {}", value),
            InquiryError::InvalidDate(value) => write!(f, "Invalid event date: {}", value),
            InquiryError::DateInPast(date) => write!(f, "The event date {} has already passed.", date),
        }
    }
}

impl std::error::Error for InquiryError {}

fn required(value: &str, field: &'static str) -> Result<String, InquiryError> {
    let value = value.trim();
    if value.is_empty() {
        Err(InquiryError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .rsplit_once('.')
            .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
}

impl InquiryDraft {
    /// Checks the draft the same way the form's `required` attributes do, plus
    /// email shape and date sanity. `today` is the visitor's local date.
    pub fn validate(&self, today: NaiveDate) -> Result<Inquiry, InquiryError> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        if !looks_like_email(&email) {
            return Err(InquiryError::InvalidEmail);
        }
        let phone = Some(self.phone.trim().to_string()).filter(|p| !p.is_empty());

        let event_type = required(&self.event_type, "event type")?;
        let event_type =
            EventType::parse(&event_type).ok_or(InquiryError::UnknownEventType(event_type))?;

        let event_date = required(&self.event_date, "event date")?;
        let event_date = NaiveDate::parse_from_str(&event_date, "%Y-%m-%d")
            .map_err(|_| InquiryError::InvalidDate(event_date))?;
        if event_date < today {
            return Err(InquiryError::DateInPast(event_date));
        }

        let message = required(&self.message, "message")?;

        Ok(Inquiry { name, email, phone, event_type, event_date, message })
    }
}

#[derive(Debug, PartialEq)]
pub enum SubmitError {
    Network(String),
    Status(u16),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Network(e) => write!(f, "Request failed: {}", e),
            SubmitError::Status(status) => write!(f, "Inquiry was not accepted (status {})", status),
        }
    }
}

impl std::error::Error for SubmitError {}

pub async fn submit(inquiry: &Inquiry) -> Result<(), SubmitError> {
    let response = Request::post(&config::inquiry_url())
        .json(inquiry)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn draft() -> InquiryDraft {
        InquiryDraft {
            name: "  Ada Lovelace ".to_string(),
            email: "ada@example.com".to_string(),
            phone: "".to_string(),
            event_type: "wedding".to_string(),
            event_date: "2026-06-20".to_string(),
            message: "Garden ceremony for 80 guests.".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_is_trimmed() {
        let inquiry = draft().validate(today()).unwrap();
        assert_eq!(inquiry.name, "Ada Lovelace");
        assert_eq!(inquiry.phone, None);
        assert_eq!(inquiry.event_type, EventType::Wedding);
        assert_eq!(inquiry.event_date, NaiveDate::from_ymd_opt(2026, 6, 20).unwrap());
    }

    #[test]
    fn test_optional_phone_kept_when_given() {
        let mut d = draft();
        d.phone = " +1 555 0100 ".to_string();
        assert_eq!(d.validate(today()).unwrap().phone.as_deref(), Some("+1 555 0100"));
    }

    #[test]
    fn test_missing_required_fields_are_named() {
        let cases: [(fn(&mut InquiryDraft), &str); 5] = [
            (|d| d.name.clear(), "name"),
            (|d| d.email = "   ".to_string(), "email"),
            (|d| d.event_type.clear(), "event type"),
            (|d| d.event_date.clear(), "event date"),
            (|d| d.message.clear(), "message"),
        ];
        for (clear, field) in cases {
            let mut d = draft();
            clear(&mut d);
            assert_eq!(d.validate(today()), Err(InquiryError::MissingField(field)));
        }
    }

    #[test]
    fn test_rejects_malformed_email() {
        for email in ["ada", "ada@", "@example.com", "ada@example", "ada@@example.com", "a da@example.com"] {
            let mut d = draft();
            d.email = email.to_string();
            assert_eq!(d.validate(today()), Err(InquiryError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn test_rejects_unknown_event_type() {
        let mut d = draft();
        d.event_type = "funeral".to_string();
        assert_eq!(
            d.validate(today()),
            Err(InquiryError::UnknownEventType("funeral".to_string()))
        );
    }

    #[test]
    fn test_rejects_bad_and_past_dates() {
        let mut d = draft();
        d.event_date = "20/06/2026".to_string();
        assert!(matches!(d.validate(today()), Err(InquiryError::InvalidDate(_))));

        d.event_date = "2026-02-28".to_string();
        assert!(matches!(d.validate(today()), Err(InquiryError::DateInPast(_))));

        d.event_date = "2026-03-01".to_string();
        assert!(d.validate(today()).is_ok());
    }

    #[test]
    fn test_event_type_values_round_trip_through_parse() {
        for event_type in EventType::ALL {
            assert_eq!(EventType::parse(event_type.value()), Some(event_type));
        }
        assert_eq!(EventType::parse("Wedding"), None);
    }

    #[test]
    fn test_inquiry_json_shape() {
        let inquiry = draft().validate(today()).unwrap();
        let value = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": null,
                "event_type": "wedding",
                "event_date": "2026-06-20",
                "message": "Garden ceremony for 80 guests."
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(InquiryError::MissingField("name").to_string(), "Please fill in your name.");
        assert_eq!(SubmitError::Status(503).to_string(), "Inquiry was not accepted (status 503)");
    }
}
