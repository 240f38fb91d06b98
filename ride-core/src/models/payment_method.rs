use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
    PayPal,
}

impl PaymentMethod {
    pub fn all() -> &'static [PaymentMethod] {
        &[PaymentMethod::Card, PaymentMethod::Cash, PaymentMethod::PayPal]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
            Self::PayPal => "paypal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "Credit Card",
            Self::Cash => "Cash",
            Self::PayPal => "PayPal",
        }
    }
}
