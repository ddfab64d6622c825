// State management module.
// Handles the FAQ list, form fields, and in-flight flags of the view.

pub mod faqs;
pub mod form;

pub use faqs::FaqViewState;
pub use form::FormField;
