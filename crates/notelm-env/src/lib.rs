//! Isolated runtime environment for the skill scripts: console UTF-8
//! normalization and first-run provisioning of the `.venv`.

pub mod builder;
pub mod console;
