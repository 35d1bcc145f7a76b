//! unitconv Core - Fundamental types
//!
//! This crate provides the types shared by every unitconv crate:
//! - `UnitCategory`: the closed set of conversion categories
//! - `ConversionRequest` / `Conversion`: one conversion call and its outcome
//! - `ConvertError`: typed failures, and `ErrorReport` for the presentation boundary

mod category;
mod error;
mod request;

pub use category::{UnitCategory, ParseCategoryError};
pub use error::{ConvertError, ErrorReport, codes};
pub use request::{ConversionRequest, Conversion, ConversionResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{UnitCategory, ConversionRequest, Conversion, ConversionResult, ConvertError};
    pub use crate::error::codes;
}
