use serde::{Deserialize, Serialize};

use vitrine_core::{AddressId, DomainError, DomainResult, Entity};

use crate::defaults::{DefaultFlag, DefaultList};

/// Input for [`AddressBook::add`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAddress {
    pub id: AddressId,
    /// Shopper-chosen name, e.g. "Casa" or "Trabalho".
    pub label: String,
    pub street: String,
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
    pub district: String,
    pub city: String,
    pub state: String,
    /// CEP, eight digits with or without the hyphen (`01234-567`).
    pub zip_code: String,
}

/// Saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub label: String,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub district: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    is_default: bool,
}

impl Address {
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

impl Entity for Address {
    type Id = AddressId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl DefaultFlag for Address {
    fn is_default(&self) -> bool {
        self.is_default
    }

    fn set_default_flag(&mut self, is_default: bool) {
        self.is_default = is_default;
    }
}

impl TryFrom<NewAddress> for Address {
    type Error = DomainError;

    fn try_from(new: NewAddress) -> Result<Self, Self::Error> {
        let required = [
            ("label", &new.label),
            ("street", &new.street),
            ("city", &new.city),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "address {}: {field} cannot be empty",
                    new.id
                )));
            }
        }

        let digits: String = new.zip_code.chars().filter(|c| *c != '-').collect();
        if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "address {}: invalid zip code {:?}",
                new.id, new.zip_code
            )));
        }

        Ok(Self {
            id: new.id,
            label: new.label,
            street: new.street,
            number: new.number,
            complement: new.complement.filter(|c| !c.trim().is_empty()),
            district: new.district,
            city: new.city,
            state: new.state,
            zip_code: new.zip_code,
            is_default: false,
        })
    }
}

/// The shopper's saved delivery addresses, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    entries: DefaultList<Address>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// New addresses are never the default; see [`AddressBook::set_default`].
    pub fn add(&mut self, new: NewAddress) -> DomainResult<()> {
        let address = Address::try_from(new)?;
        self.entries.insert(address, "address")
    }

    pub fn remove(&mut self, id: &AddressId) -> DomainResult<Address> {
        self.entries.remove(id, "address")
    }

    /// Make `id` the only default address.
    pub fn set_default(&mut self, id: &AddressId) -> DomainResult<()> {
        self.entries.set_default(id, "address")
    }

    pub fn get(&self, id: &AddressId) -> Option<&Address> {
        self.entries.get(id)
    }

    pub fn default_address(&self) -> Option<&Address> {
        self.entries.default_entry()
    }

    pub fn addresses(&self) -> &[Address] {
        self.entries.items()
    }

    pub fn len(&self) -> usize {
        self.entries.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.items().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aid(id: &str) -> AddressId {
        AddressId::new(id).unwrap()
    }

    fn new_address(id: &str) -> NewAddress {
        NewAddress {
            id: aid(id),
            label: format!("Endereço {id}"),
            street: "Rua das Flores".to_string(),
            number: "123".to_string(),
            complement: Some("Apto 101".to_string()),
            district: "Jardim Primavera".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            zip_code: "01234-567".to_string(),
        }
    }

    #[test]
    fn added_addresses_are_not_default() {
        let mut book = AddressBook::new();
        book.add(new_address("1")).unwrap();
        book.add(new_address("2")).unwrap();
        assert_eq!(book.len(), 2);
        assert!(book.addresses().iter().all(|a| !a.is_default()));
        assert!(book.default_address().is_none());
    }

    #[test]
    fn set_default_leaves_exactly_one_default() {
        let mut book = AddressBook::new();
        book.add(new_address("1")).unwrap();
        book.add(new_address("2")).unwrap();

        book.set_default(&aid("1")).unwrap();
        book.set_default(&aid("2")).unwrap();

        let defaults: Vec<&str> = book
            .addresses()
            .iter()
            .filter(|a| a.is_default())
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(defaults, vec!["2"]);
        assert_eq!(book.default_address().map(|a| a.id.as_str()), Some("2"));
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut book = AddressBook::new();
        book.add(new_address("1")).unwrap();
        book.set_default(&aid("1")).unwrap();

        assert!(matches!(book.set_default(&aid("9")), Err(DomainError::NotFound(_))));
        assert!(matches!(book.remove(&aid("9")), Err(DomainError::NotFound(_))));
        assert!(book.get(&aid("1")).unwrap().is_default());
    }

    #[test]
    fn duplicate_id_is_a_conflict() {
        let mut book = AddressBook::new();
        book.add(new_address("1")).unwrap();
        let err = book.add(new_address("1")).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn removing_the_default_leaves_none() {
        let mut book = AddressBook::new();
        book.add(new_address("1")).unwrap();
        book.add(new_address("2")).unwrap();
        book.set_default(&aid("1")).unwrap();

        let removed = book.remove(&aid("1")).unwrap();
        assert!(removed.is_default());
        assert!(book.default_address().is_none());
    }

    #[test]
    fn rejects_malformed_addresses() {
        let mut book = AddressBook::new();
        let blank_city = NewAddress {
            city: " ".to_string(),
            ..new_address("1")
        };
        assert!(matches!(book.add(blank_city), Err(DomainError::Validation(_))));

        for zip in ["0123-4567x", "1234-567", "abcdefgh"] {
            let bad = NewAddress {
                zip_code: zip.to_string(),
                ..new_address("2")
            };
            assert!(matches!(book.add(bad), Err(DomainError::Validation(_))), "{zip}");
        }
        let bare_digits = NewAddress {
            zip_code: "01310200".to_string(),
            ..new_address("3")
        };
        assert!(book.add(bare_digits).is_ok());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u8),
            Remove(u8),
            SetDefault(u8),
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0u8..6).prop_map(Op::Add),
                (0u8..6).prop_map(Op::Remove),
                (0u8..6).prop_map(Op::SetDefault),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: after any sequence of operations there is at most one
            /// default, and it is the address most recently made default (unless
            /// that address was removed since).
            #[test]
            fn at_most_one_default_and_it_is_the_last_set(
                ops in prop::collection::vec(arb_op(), 0..80)
            ) {
                let mut book = AddressBook::new();
                let mut expected: Option<AddressId> = None;

                for op in ops {
                    match op {
                        Op::Add(n) => {
                            let _ = book.add(new_address(&n.to_string()));
                        }
                        Op::Remove(n) => {
                            let id = aid(&n.to_string());
                            if book.remove(&id).is_ok() && expected.as_ref() == Some(&id) {
                                expected = None;
                            }
                        }
                        Op::SetDefault(n) => {
                            let id = aid(&n.to_string());
                            if book.set_default(&id).is_ok() {
                                expected = Some(id);
                            }
                        }
                    }

                    let defaults: Vec<&AddressId> = book
                        .addresses()
                        .iter()
                        .filter(|a| a.is_default())
                        .map(|a| &a.id)
                        .collect();
                    prop_assert!(defaults.len() <= 1);
                    prop_assert_eq!(defaults.first().copied(), expected.as_ref());
                }
            }
        }
    }
}
