mod envelope;
mod permission_groups;

pub use envelope::*;
pub use permission_groups::*;
