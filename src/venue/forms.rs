use std::fmt;

use crate::config;

/// What the visitor typed into the booking overlay. Nothing is sent
/// anywhere; the draft only lives as long as the overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingDraft {
    pub date: String,
    pub time: String,
    pub guests: Option<u8>,
    pub notes: String,
}

impl BookingDraft {
    /// Reads the guest field the way the number input bounds it.
    pub fn set_guests(&mut self, raw: &str) {
        self.guests = raw
            .trim()
            .parse::<u8>()
            .ok()
            .map(|n| n.clamp(config::MIN_GUESTS, config::MAX_GUESTS));
    }
}

impl fmt::Display for BookingDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_blank = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
        write!(
            f,
            "date={} time={} guests={} notes={}",
            or_blank(&self.date),
            or_blank(&self.time),
            self.guests.map(|n| n.to_string()).unwrap_or_else(|| "-".into()),
            or_blank(&self.notes),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubscriptionDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl fmt::Display for SubscriptionDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Contact details stay out of the console.
        write!(
            f,
            "name={} email={} phone={}",
            !self.name.is_empty(),
            !self.email.is_empty(),
            !self.phone.is_empty()
        )
    }
}
