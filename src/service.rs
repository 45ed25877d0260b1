//! The one-field web UI.
//!
//! `GET /` renders the question form. `POST /` answers the submitted question through a
//! [`Chain`](crate::Chain) and renders the form again with the answer below it.

pub mod page;
pub mod server;

pub use server::{router, serve, AskForm, ServiceError};
