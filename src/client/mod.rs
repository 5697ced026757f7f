//! Cliente do formulário de registro: acesso HTTP à API, estado do
//! formulário e renderização em texto.

pub mod api;
pub mod form;
pub mod render;

pub use api::{ApiError, HttpUsersApi, UsersApi};
pub use form::{FormState, SubmitOutcome, UserForm};
pub use render::render;
