//! Checkout form and validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the simulated order will be paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Pay the courier on delivery.
    #[default]
    #[serde(rename = "cod")]
    CashOnDelivery,
    /// Manual bank transfer.
    #[serde(rename = "transfer")]
    BankTransfer,
    /// E-wallet payment.
    #[serde(rename = "ewallet")]
    EWallet,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "cod",
            PaymentMethod::BankTransfer => "transfer",
            PaymentMethod::EWallet => "ewallet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::EWallet => "E-Wallet",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cod" => Some(PaymentMethod::CashOnDelivery),
            "transfer" => Some(PaymentMethod::BankTransfer),
            "ewallet" => Some(PaymentMethod::EWallet),
            _ => None,
        }
    }

    /// All methods, in display order.
    pub fn all() -> [PaymentMethod; 3] {
        [
            PaymentMethod::CashOnDelivery,
            PaymentMethod::BankTransfer,
            PaymentMethod::EWallet,
        ]
    }
}

/// The shipping/payment form collected at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutForm {
    /// Customer full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Shipping street address.
    pub address: String,
    /// Shipping city.
    pub city: String,
    /// Selected payment method.
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Validate the form, collecting one error per offending field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.full_name.trim().is_empty() {
            errors.push("full_name", "Full name is required");
        }
        if self.email.trim().is_empty() {
            errors.push("email", "Email is required");
        } else if !looks_like_email(&self.email) {
            errors.push("email", "Email format is invalid");
        }
        if self.phone.trim().is_empty() {
            errors.push("phone", "Phone number is required");
        }
        if self.address.trim().is_empty() {
            errors.push("address", "Address is required");
        }
        if self.city.trim().is_empty() {
            errors.push("city", "City is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Structural email check: `local@domain.tld`, no whitespace.
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain.split('.').filter(|part| !part.is_empty()).count() >= 2
}

/// A single field-level validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field identifier (e.g. "email").
    pub field: &'static str,
    /// Human-readable message.
    pub message: &'static str,
}

/// Field-level validation errors, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Record an error for a field.
    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    /// Check if no errors were recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of offending fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    /// Iterate over the recorded errors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Dewi Lestari".to_string(),
            email: "dewi@example.com".to_string(),
            phone: "081234567890".to_string(),
            address: "Jl. Merdeka No. 17".to_string(),
            city: "Bandung".to_string(),
            payment_method: PaymentMethod::CashOnDelivery,
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = CheckoutForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.get("full_name").is_some());
        assert!(errors.get("email").is_some());
        assert!(errors.get("phone").is_some());
        assert!(errors.get("address").is_some());
        assert!(errors.get("city").is_some());
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut form = valid_form();
        form.city = "   ".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("city"), Some("City is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn email_shape_is_checked() {
        let mut form = valid_form();

        for bad in ["plainaddress", "no@tld", "@missing.local", "two words@x.y"] {
            form.email = bad.to_string();
            let errors = form.validate().unwrap_err();
            assert_eq!(
                errors.get("email"),
                Some("Email format is invalid"),
                "expected {bad:?} to be rejected"
            );
        }

        for good in ["a@b.c", "dewi.lestari@mail.example.com"] {
            form.email = good.to_string();
            assert!(form.validate().is_ok(), "expected {good:?} to be accepted");
        }
    }

    #[test]
    fn payment_method_round_trips() {
        for method in PaymentMethod::all() {
            assert_eq!(PaymentMethod::from_str(method.as_str()), Some(method));
        }
        assert_eq!(PaymentMethod::from_str("crypto"), None);
    }

    #[test]
    fn payment_method_serializes_as_short_code() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"transfer\"");
    }

    #[test]
    fn validation_errors_display() {
        let errors = CheckoutForm::default().validate().unwrap_err();
        let text = errors.to_string();
        assert!(text.contains("full_name: Full name is required"));
        assert!(text.contains("; "));
    }
}
