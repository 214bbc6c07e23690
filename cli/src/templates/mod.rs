//! Built-in templates.
//!
//! Each submodule describes one template as data: its file specs, the
//! features that guard them, and the generator functions for content that
//! has to be computed.

pub mod binary_extension;
pub mod cli_tool;
pub mod common;
pub mod data_science;
pub mod fastapi;
pub mod flask;
pub mod minimal;
pub mod namespace;
pub mod plugin;
pub mod pyproject;

use crate::descriptor::TemplateDescriptor;

/// Descriptors for every template shipped with pygen, in registration order.
pub fn builtin() -> Vec<TemplateDescriptor> {
    vec![
        minimal::descriptor(),
        cli_tool::descriptor(),
        flask::descriptor(),
        fastapi::descriptor(),
        data_science::descriptor(),
        binary_extension::descriptor(),
        namespace::descriptor(),
        plugin::descriptor(),
    ]
}
