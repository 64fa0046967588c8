//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages (`offers`, `login`, `register`) are mounted directly. The
//! role pages sit behind a `RouteGuard` parent route in `app`, so they can
//! assume a session of an admitted role exists.

pub mod admin;
pub mod company;
pub mod login;
pub mod offers;
pub mod register;
pub mod stagiaire;
