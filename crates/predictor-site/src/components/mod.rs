//! Estimator site components

mod nav;
mod footer;
mod cards;
mod form;

pub use nav::Navbar;
pub use footer::Footer;
pub use cards::*;
pub use form::PredictionForm;
