//! "Contact Seller" mail-compose action

use std::fmt;

use listings_client::{Listing, Seller};

pub const CONTACT_UNAVAILABLE: &str = "Seller contact information not available";

/// A pre-filled `mailto:` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    pub fn uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    Compose(MailtoLink),
    /// No usable seller email; tell the user instead of navigating
    Unavailable,
}

/// Price as shown on cards and in the contact message, e.g. `$20.00`.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn contact_action(listing: &Listing, seller: Option<&Seller>) -> ContactAction {
    let Some(email) = seller.and_then(Seller::contact_email) else {
        return ContactAction::Unavailable;
    };

    ContactAction::Compose(MailtoLink {
        to: email.to_string(),
        subject: format!("Interested in: {}", listing.title),
        body: format!(
            "Hi,\n\nI'm interested in your listing \"{}\" for {}.\n\nPlease let me know if it's still available.\n\nThanks!",
            listing.title,
            format_price(listing.price)
        ),
    })
}

/// Carry out the action: open the mail client or show a notice.
pub fn perform(action: &ContactAction) {
    match action {
        ContactAction::Compose(link) => {
            tracing::info!(to = %link.to, "Opening mail client");
            #[cfg(feature = "web")]
            if let Some(window) = web_sys::window() {
                log_failure(window.location().set_href(&link.uri()), "Failed to open mail client");
            }
        }
        ContactAction::Unavailable => {
            tracing::info!("{}", CONTACT_UNAVAILABLE);
            #[cfg(feature = "web")]
            if let Some(window) = web_sys::window() {
                log_failure(
                    window.alert_with_message(CONTACT_UNAVAILABLE),
                    "Failed to show contact notice",
                );
            }
        }
    }
}

/// Log a failed browser call. Returns whether the call succeeded.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
fn log_failure<E: fmt::Debug>(result: Result<(), E>, message: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = ?e, "{}", message);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listings_client::Category;

    fn desk() -> Listing {
        Listing {
            id: 5,
            title: "Desk".into(),
            price: 20.0,
            category: Category::Furniture,
            region: None,
            description: None,
            image_url: None,
            user_id: 9,
        }
    }

    fn seller(email: Option<&str>) -> Seller {
        Seller {
            id: 9,
            name: "Ana".into(),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn composes_mail_to_seller() {
        let action = contact_action(&desk(), Some(&seller(Some("a@b.edu"))));

        let ContactAction::Compose(link) = action else {
            panic!("expected a mail link");
        };
        assert_eq!(link.subject, "Interested in: Desk");
        assert!(link.body.contains("\"Desk\" for $20.00."));

        let uri = link.uri();
        assert!(uri.starts_with("mailto:a@b.edu?subject=Interested%20in%3A%20Desk&body="));
        assert!(uri.contains("%0A%0AThanks%21"));
        assert_eq!(link.to_string(), uri);
    }

    #[test]
    fn missing_or_blank_email_is_unavailable() {
        assert_eq!(contact_action(&desk(), None), ContactAction::Unavailable);
        assert_eq!(
            contact_action(&desk(), Some(&seller(None))),
            ContactAction::Unavailable
        );
        assert_eq!(
            contact_action(&desk(), Some(&seller(Some("")))),
            ContactAction::Unavailable
        );
    }

    #[test]
    fn browser_failures_are_reported_not_dropped() {
        assert!(log_failure::<&str>(Ok(()), "Failed to show contact notice"));
        assert!(!log_failure(Err("alert blocked"), "Failed to show contact notice"));
    }

    #[test]
    fn prices_use_two_decimals() {
        assert_eq!(format_price(20.0), "$20.00");
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(0.0), "$0.00");
    }
}
