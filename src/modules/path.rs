use std::path::{Component, Path};

use log::warn;
use thiserror::Error;

use super::Module;

/// The extension source files are expected to have.
const EXTENSION: &str = "dk";

/// Errors from translating a file path into a module name.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ModuleError {
    #[error("invalid character `{ch}` in module name component `{component}`")]
    InvalidChar { ch: char, component: String },

    #[error("module name components must not be empty")]
    EmptyComponent,

    #[error("the path component `{0}` cannot be part of a module name")]
    UnsupportedComponent(String),

    #[error("the module name `{name}` is too long, the maximum is {max}")]
    TooLong { name: String, max: usize },
}

impl Module {
    /// Translate a relative file path into a module name, so that the file
    /// `a/b/c.dk` becomes the module `a.b.c`. Every directory in the path and
    /// the file name itself must start with a letter and consist only of
    /// letters, digits and underscores.
    pub fn from_path(path: &Path, max_len: usize) -> Result<Self, ModuleError> {
        let mut components = Vec::new();
        for component in path.components() {
            match component {
                Component::CurDir => continue,
                Component::Normal(name) => components.push(name.to_string_lossy()),
                other => {
                    let display = other.as_os_str().to_string_lossy().into_owned();
                    return Err(ModuleError::UnsupportedComponent(display));
                }
            }
        }

        let file = components.pop().ok_or(ModuleError::EmptyComponent)?;
        let stem = match file.split_once('.') {
            Some((stem, EXTENSION)) => stem,
            Some((stem, _)) => {
                warn!("path {} should end in '.{EXTENSION}'", path.display());
                stem
            }

            None => {
                warn!("path {} should end in '.{EXTENSION}'", path.display());
                &*file
            }
        };

        let mut parts: Vec<&str> = components.iter().map(|part| &**part).collect();
        parts.push(stem);
        Self::from_components(&parts, max_len)
    }
}

pub(super) fn check_component(component: &str) -> Result<(), ModuleError> {
    let mut chars = component.chars();
    let first = chars.next().ok_or(ModuleError::EmptyComponent)?;

    if !first.is_ascii_alphabetic() {
        return Err(ModuleError::InvalidChar {
            ch: first,
            component: component.into(),
        });
    }

    match chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        Some(ch) => Err(ModuleError::InvalidChar {
            ch,
            component: component.into(),
        }),
        None => Ok(()),
    }
}
