pub mod activity;
pub mod config;
pub mod error;
pub mod io;
pub mod paths;
pub mod seed;

pub use activity::{Activity, Confirmation, Directory, SignupPolicy};
pub use error::{ActivitiesError, ErrorKind, Result};
