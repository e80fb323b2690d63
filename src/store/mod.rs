pub mod memory;

pub use memory::{ContactIter, ContactStore};

use crate::domain::contact::Contact;
use crate::errors::AppError;
use tracing::{debug, warn};
