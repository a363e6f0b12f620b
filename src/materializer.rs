use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::errors::{CgError, Result};
use crate::fs_util::list_template_files;

/// One template file and the path it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub template: PathBuf,
    pub output: PathBuf,
}

/// Result of materializing a component.
#[derive(Debug)]
pub struct Materialized {
    pub name: String,
    pub output_dir: PathBuf,
    /// Written files, in write order.
    pub files: Vec<PathBuf>,
}

/// Replace every literal occurrence of `placeholder` in `text` with `value`.
///
/// The placeholder is never interpreted as a pattern. An empty placeholder
/// matches nothing.
#[must_use]
pub fn substitute(text: &str, placeholder: &str, value: &str) -> String {
    if placeholder.is_empty() {
        return text.to_string();
    }
    text.replace(placeholder, value)
}

/// Check and normalize a component name.
///
/// Surrounding whitespace is trimmed. Empty names, `.`, `..` and names with a
/// path separator are rejected, since the name becomes a single directory.
pub fn validate_component_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." {
        Some("name must not be a relative directory reference")
    } else if name.contains('/') || name.contains('\\') {
        Some("name must not contain path separators")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(CgError::InvalidName {
            name: raw.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(name.to_string()),
    }
}

/// Destination directory of a component: `base/COMPONENTS_DIR/name`.
#[must_use]
pub fn component_dir(name: &str, config: &Config, base_dir: &Path) -> PathBuf {
    tidy(base_dir.join(&config.components_dir).join(name))
}

/// Template directory: `base/TEMPLATE_DIR`.
#[must_use]
pub fn template_dir(config: &Config, base_dir: &Path) -> PathBuf {
    tidy(base_dir.join(&config.template_dir))
}

/// Drop interior `.` segments so `./src/./components` prints as `./src/components`.
fn tidy(path: PathBuf) -> PathBuf {
    path.components().collect()
}

/// Compute which files `materialize` would write, without touching the destination.
pub fn preview(name: &str, config: &Config, base_dir: &Path) -> Result<Vec<PlannedFile>> {
    let output_dir = component_dir(name, config, base_dir);
    let templates = list_template_files(&template_dir(config, base_dir))?;
    let mut plan = Vec::with_capacity(templates.len());
    for template in templates {
        let file_name = template.file_name().unwrap_or_default();
        let Some(output_name) = output_file_name(file_name, &config.placeholder, name) else {
            return Err(CgError::TemplateRead {
                path: template,
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "file name is not valid Unicode",
                ),
            });
        };
        let output = output_dir.join(output_name);
        plan.push(PlannedFile { template, output });
    }
    Ok(plan)
}

/// Substitute the placeholder in a template file name.
///
/// Names that are not UTF-8 are rewritten byte-wise on Unix, keeping the
/// undecodable bytes as they are. Elsewhere such names yield `None`.
fn output_file_name(file_name: &OsStr, placeholder: &str, value: &str) -> Option<OsString> {
    match file_name.to_str() {
        Some(s) => Some(OsString::from(substitute(s, placeholder, value))),
        None => substitute_raw(file_name, placeholder, value),
    }
}

#[cfg(unix)]
fn substitute_raw(file_name: &OsStr, placeholder: &str, value: &str) -> Option<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let needle = placeholder.as_bytes();
    if needle.is_empty() {
        return Some(file_name.to_os_string());
    }
    let mut rest = file_name.as_bytes();
    let mut out = Vec::with_capacity(rest.len());
    while let Some(pos) = rest.windows(needle.len()).position(|w| w == needle) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(value.as_bytes());
        rest = &rest[pos + needle.len()..];
    }
    out.extend_from_slice(rest);
    Some(OsString::from_vec(out))
}

#[cfg(not(unix))]
fn substitute_raw(_file_name: &OsStr, _placeholder: &str, _value: &str) -> Option<OsString> {
    None
}

/// Generate a component from the template directory.
///
/// Creates `base/COMPONENTS_DIR/name` (and any missing parents), then writes
/// one file per template entry with the placeholder replaced by `name` in
/// both the file name and the content. Existing files of the same name are
/// overwritten; other files in the directory are left alone.
///
/// Files written before a failure are not removed.
pub fn materialize(name: &str, config: &Config, base_dir: &Path) -> Result<Materialized> {
    // Listing first so a bad template directory leaves no empty component behind.
    let plan = preview(name, config, base_dir)?;

    let output_dir = component_dir(name, config, base_dir);
    std::fs::create_dir_all(&output_dir).map_err(|source| CgError::Write {
        path: output_dir.clone(),
        source,
    })?;

    let mut files = Vec::with_capacity(plan.len());
    for PlannedFile { template, output } in plan {
        let content =
            std::fs::read_to_string(&template).map_err(|source| CgError::TemplateRead {
                path: template.clone(),
                source,
            })?;
        let rendered = substitute(&content, &config.placeholder, name);
        std::fs::write(&output, rendered).map_err(|source| CgError::Write {
            path: output.clone(),
            source,
        })?;
        files.push(output);
    }

    Ok(Materialized {
        name: name.to_string(),
        output_dir,
        files,
    })
}
