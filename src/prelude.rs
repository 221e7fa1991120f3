//! cplxkit prelude.
//!
//! This module contains the most used types, traits, and macros that you can
//! import easily as a group.
//!
//! ```
//! use cplxkit::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::complex::ComplexNumber;

#[doc(no_inline)]
pub use crate::error::ComplexError;

#[doc(no_inline)]
pub use crate::cplx;

#[doc(no_inline)]
pub use num_traits::{One, Zero};
