pub mod contact;

use crate::errors::AppError;
use crate::validation::{ContactField, require_non_blank};
use uuid::Uuid;
