//! Shopper state: cart, wishlist, saved addresses and payment methods.
//!
//! Plain single-owner state objects. The presentation layer owns them and
//! hands products in from the catalog; nothing here touches the catalog itself.

pub mod address_book;
pub mod cart;
mod defaults;
pub mod payment_methods;
pub mod wishlist;

pub use address_book::{Address, AddressBook, NewAddress};
pub use cart::{Cart, CartItem};
pub use payment_methods::{
    CardDetails, NewPaymentMethod, PaymentKind, PaymentMethod, PaymentMethods,
};
pub use wishlist::Wishlist;
