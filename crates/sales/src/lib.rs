//! Sales domain module: reservations and the offers priced from them.
//!
//! This crate contains business rules for reservations, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Discounts come from
//! a caller-supplied [`DiscountPolicy`].

pub mod discount;
pub mod offer;
pub mod reservation;

pub use discount::{Discount, DiscountPolicy, NoDiscount, PercentageDiscount};
pub use offer::{Offer, OfferItem};
pub use reservation::{
    Reservation, ReservationId, ReservationItem, ReservationStatus, ReservedProduct,
};
