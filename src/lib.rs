// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! xdec is a fixed-precision decimal arithmetic library for Rust.
//!
//! # Introduction
//!
//! Binary floating-point numbers can only approximate common decimal
//! numbers. The value 0.1, for example, would need an infinitely recurring
//! binary fraction, so binary floating-point cannot be used for financial
//! calculations, or indeed for any calculations where the results achieved
//! are required to match those which might be calculated by hand.
//!
//! xdec instead provides [`Decimal`], an exact base-10 representation with a
//! fixed precision of eighteen fractional digits and an integer magnitude of
//! up to 10<sup>36</sup>. Values at the magnitude bound are the designated
//! infinities, [`Decimal::INFINITY`] and [`Decimal::NEG_INFINITY`]; they are
//! ordinary values that sit at the edge of the representable range, not
//! IEEE 754-style specials, and there is no NaN.
//!
//! # Details
//!
//! The main properties of the arithmetic are as follows:
//!
//!  * Every operation rounds excess precision to eighteen fractional digits
//!    using round-half-up: a cut digit of five or greater rounds the
//!    preceding digit up, with the carry cascading through trailing nines.
//!
//!  * Results whose integer magnitude would exceed 10<sup>36</sup> are not
//!    representable. The `checked_*` methods report this as an error; the
//!    overloaded operators panic, like the standard library's integer
//!    operators in debug builds.
//!
//!  * Zero is always non-negative. No operation produces a negative zero.
//!
//! # Examples
//!
//! ```
//! # use std::error::Error;
//! use xdec::Decimal;
//!
//! let x: Decimal = "0.1".parse()?;
//! let y: Decimal = "0.2".parse()?;
//!
//! assert_eq!(x + y, "0.3".parse()?);
//! assert_eq!((x + y).to_string(), "0.300000000000000000");
//!
//! # Ok::<_, Box<dyn Error>>(())
//! ```

#![deny(missing_debug_implementations, missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod conv;
mod decimal;
mod error;

pub use decimal::Decimal;
pub use error::{ArithmeticError, ParseDecimalError, TryFromDecimalError};
