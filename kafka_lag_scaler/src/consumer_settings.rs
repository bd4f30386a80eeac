mod offset_reset_policy;

pub use offset_reset_policy::*;
