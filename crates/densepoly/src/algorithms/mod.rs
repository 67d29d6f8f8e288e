//! Polynomial algorithms.
//!
//! This module contains coefficient-slice implementations of:
//! - Schoolbook convolution
//! - Karatsuba multiplication

pub mod karatsuba;
