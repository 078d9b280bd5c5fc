//! Form validation for formkit.
//!
//! A fluent API for validating form widgets. Widgets never evaluate
//! patterns themselves; the page composes rules here and pushes the
//! outcome back into the widgets as display state.
//!
//! # Example
//!
//! ```ignore
//! use formkit::validation::Validator;
//!
//! let result = Validator::new()
//!     .field(&name, "name")
//!         .required("Name is required")
//!         .pattern(name_re.clone(), "Name must be at least 3 letters")
//!     .field(&email, "email")
//!         .required("Email is required")
//!         .email("Invalid email address")
//!     .validate();
//!
//! if result.is_valid() {
//!     // Proceed with form submission
//! }
//! ```

mod error_display;
mod result;
mod validatable;
mod validator;

pub use error_display::ErrorDisplay;
pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
