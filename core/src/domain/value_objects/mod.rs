//! Value objects: closed sets of wire values validated at the request boundary.

pub mod delivery_method;
pub mod operation;

pub use delivery_method::DeliveryMethod;
pub use operation::Operation;
