//! Page UI state
//!
//! Platform-free pieces of the page glue: the modal session, the article
//! catalogue, contact form validation and navbar rules. The browser
//! bindings in `platform` drive these.

pub mod articles;
pub mod form;
pub mod modal;
pub mod nav;

pub use articles::{Article, DemoKind};
pub use form::{ContactMessage, FormError, SubmitFlow};
pub use modal::{ContentGeneration, Dismissal, ModalSession};
pub use nav::NavbarStyle;
