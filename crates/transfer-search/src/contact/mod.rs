//! Contact links shown next to a search result.
//!
//! When a destination is found the message quotes its fixed price and
//! duration; otherwise it asks for a custom quote. Nothing is sent from here,
//! the caller opens the returned links.

use tracing::debug;
use transfer_search_data::{Destination, Locale};
use url::Url;

use crate::error::{Result, TransferSearchError};

const DEFAULT_PHONE: &str = "+34 123 456 789";
const WHATSAPP_BASE: &str = "https://wa.me/";

/// Phone number customers are pointed at.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    phone: String,
}

impl ContactConfig {
    /// Phone numbers are free-form (`+34 123 456 789`) but must contain digits.
    pub fn new(phone: impl Into<String>) -> Result<Self> {
        let phone = phone.into();
        if !phone.chars().any(|c| c.is_ascii_digit()) {
            return Err(TransferSearchError::ConfigError(format!(
                "Contact phone number has no digits: '{phone}'"
            )));
        }
        Ok(Self { phone })
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    fn phone_digits(&self) -> String {
        self.phone.chars().filter(char::is_ascii_digit).collect()
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: DEFAULT_PHONE.to_string(),
        }
    }
}

fn greeting(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => {
            "Hola, me interesa el servicio de transfer desde el aeropuerto de Alicante hasta"
        }
        Locale::En => "Hello, I'm interested in transfer service from Alicante Airport to",
        Locale::De => {
            "Hallo, ich interessiere mich für den Transfer-Service vom Flughafen Alicante nach"
        }
    }
}

fn quote_line(locale: Locale, destination: &Destination) -> String {
    let price = destination.price_eur;
    let minutes = destination.duration_minutes;
    match locale {
        Locale::Es => format!("Precio estimado: €{price}, Duración: {minutes} min"),
        Locale::En => format!("Estimated price: €{price}, Duration: {minutes} min"),
        Locale::De => format!("Geschätzter Preis: €{price}, Dauer: {minutes} Min."),
    }
}

fn custom_quote_line(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "Solicito cotización personalizada.",
        Locale::En => "I would like a personalised quote.",
        Locale::De => "Ich bitte um ein individuelles Angebot.",
    }
}

/// Message asking for a transfer to what the customer typed.
///
/// `query` is echoed as typed; the quote comes from `destination` when the
/// search found one.
#[must_use]
pub fn quote_message(locale: Locale, query: &str, destination: Option<&Destination>) -> String {
    let details = destination.map_or_else(
        || custom_quote_line(locale).to_string(),
        |destination| quote_line(locale, destination),
    );
    format!("{} {}. {details}", greeting(locale), query)
}

/// `https://wa.me/<digits>?text=<message>` chat link.
pub fn whatsapp_link(contact: &ContactConfig, message: &str) -> Result<Url> {
    let base = format!("{WHATSAPP_BASE}{}", contact.phone_digits());
    let url = Url::parse_with_params(&base, &[("text", message)])?;
    debug!(%url, "Built WhatsApp link");
    Ok(url)
}

/// `tel:` link with the number stripped of spacing.
#[must_use]
pub fn call_link(contact: &ContactConfig) -> String {
    let number: String = contact
        .phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{number}")
}
