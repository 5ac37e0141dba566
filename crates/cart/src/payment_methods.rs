use serde::{Deserialize, Serialize};

use vitrine_core::{DomainError, DomainResult, Entity, PaymentMethodId};

use crate::defaults::{DefaultFlag, DefaultList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Credit,
    Debit,
    Pix,
}

impl PaymentKind {
    fn uses_card(self) -> bool {
        matches!(self, PaymentKind::Credit | PaymentKind::Debit)
    }
}

/// Card details as the shopper sees them. The number is stored masked
/// (`**** **** **** 1234`); nothing here holds a full card number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub masked_number: String,
    pub holder: String,
    /// `MM/YY`
    pub expiry: String,
}

impl CardDetails {
    pub fn last_four(&self) -> &str {
        let n = self.masked_number.len();
        self.masked_number.get(n.saturating_sub(4)..).unwrap_or("")
    }
}

/// Input for [`PaymentMethods::add`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPaymentMethod {
    pub id: PaymentMethodId,
    pub kind: PaymentKind,
    #[serde(default)]
    pub card: Option<CardDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    id: PaymentMethodId,
    kind: PaymentKind,
    card: Option<CardDetails>,
    is_default: bool,
}

impl PaymentMethod {
    pub fn kind(&self) -> PaymentKind {
        self.kind
    }

    /// `None` for Pix.
    pub fn card(&self) -> Option<&CardDetails> {
        self.card.as_ref()
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

impl Entity for PaymentMethod {
    type Id = PaymentMethodId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl DefaultFlag for PaymentMethod {
    fn is_default(&self) -> bool {
        self.is_default
    }

    fn set_default_flag(&mut self, is_default: bool) {
        self.is_default = is_default;
    }
}

impl TryFrom<NewPaymentMethod> for PaymentMethod {
    type Error = DomainError;

    fn try_from(new: NewPaymentMethod) -> Result<Self, Self::Error> {
        match (&new.card, new.kind.uses_card()) {
            (None, true) => {
                return Err(DomainError::validation(format!(
                    "payment method {}: card details are required for {:?}",
                    new.id, new.kind
                )));
            }
            (Some(_), false) => {
                return Err(DomainError::validation(format!(
                    "payment method {}: pix takes no card details",
                    new.id
                )));
            }
            (Some(card), true) if !is_valid_expiry(&card.expiry) => {
                return Err(DomainError::validation(format!(
                    "payment method {}: invalid card expiry {:?}",
                    new.id, card.expiry
                )));
            }
            _ => {}
        }

        Ok(Self {
            id: new.id,
            kind: new.kind,
            card: new.card,
            is_default: false,
        })
    }
}

fn is_valid_expiry(expiry: &str) -> bool {
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };
    let digits = |s: &str, len: usize| s.len() == len && s.chars().all(|c| c.is_ascii_digit());
    digits(month, 2)
        && digits(year, 2)
        && month.parse::<u8>().is_ok_and(|m| (1..=12).contains(&m))
}

/// Saved payment methods, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethods {
    entries: DefaultList<PaymentMethod>,
}

impl PaymentMethods {
    pub fn new() -> Self {
        Self::default()
    }

    /// New methods are never the default; see [`PaymentMethods::set_default`].
    pub fn add(&mut self, new: NewPaymentMethod) -> DomainResult<()> {
        let method = PaymentMethod::try_from(new)?;
        self.entries.insert(method, "payment method")
    }

    pub fn remove(&mut self, id: &PaymentMethodId) -> DomainResult<PaymentMethod> {
        self.entries.remove(id, "payment method")
    }

    pub fn set_default(&mut self, id: &PaymentMethodId) -> DomainResult<()> {
        self.entries.set_default(id, "payment method")
    }

    pub fn get(&self, id: &PaymentMethodId) -> Option<&PaymentMethod> {
        self.entries.get(id)
    }

    pub fn default_method(&self) -> Option<&PaymentMethod> {
        self.entries.default_entry()
    }

    pub fn methods(&self) -> &[PaymentMethod] {
        self.entries.items()
    }

    pub fn len(&self) -> usize {
        self.entries.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.items().is_empty()
    }
}
