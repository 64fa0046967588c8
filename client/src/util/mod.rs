//! Session plumbing that sits outside the store itself.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` is the durable token/user backing (`localStorage` in the browser,
//! in-memory elsewhere); `auth` turns a lost session into a redirect to
//! `/login`.

pub mod auth;
pub mod storage;
