// Domain services
// Pure logic: identifier allocation, date normalization, event ordering,
// CSV interchange

pub mod csv_codec;
pub mod id_alloc;
pub mod normalize;
pub mod ordering;

pub use csv_codec::*;
pub use id_alloc::*;
pub use normalize::*;
pub use ordering::*;
