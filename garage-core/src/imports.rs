pub use anyhow::{anyhow, bail, ensure, Context};
#[cfg(feature = "logging")]
pub use log;
pub use serde::{Deserialize, Serialize};
pub use std::ffi::OsStr;
pub use std::fmt;
pub use std::fs::File;
pub use std::io::Write;
pub use std::path::Path;
