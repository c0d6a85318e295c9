//! Property tests exercising the public API against `std` collections.

mod tree;
