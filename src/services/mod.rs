pub mod allocator;
pub mod artifact;
pub mod booking;
pub mod capacity;
