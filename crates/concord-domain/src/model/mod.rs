//! Domain Models - The vocabulary of the console
//!
//! Every entity the console manages, plus the record shape they share.
//! Wire names are camelCase; fields the model does not know about are
//! kept in each entity's `extra` map so they survive a typed round trip.

pub mod channel;
pub mod contract;
pub mod partner;
pub mod record;
pub mod user;
pub mod work;
