//! Core module - records shared by the loaders and the output layer

mod types;

pub(crate) use types::{Application, OpenItem, Project};
