//! Conversions into and out of `FixedInt`
//!
//! Every conversion between integer types is an explicit call. The
//! submodules are split by the kind of guarantee they give:
//! - `range`: checked construction (`from_literal`, `exactly`, `from_f64`)
//!   and lossy construction (`truncating`)
//! - `pattern`: same-width signed/unsigned reinterpretation
//! - `native`: lossless `From` to and from the matching primitive
//! - `widen`: lossless `From` between fixed types

mod native;
mod pattern;
mod range;
mod widen;
