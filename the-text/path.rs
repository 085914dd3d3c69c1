//! Manipulation of `/`-separated path strings.
//!
//! These work on the text alone, the same way on every platform, and never
//! touch the file system. Trailing separators are ignored except on the root
//! path `/`.

const SEPARATOR: char = '/';
const ROOT: &str = "/";

fn trim_trailing_separators(path: &str) -> &str {
  let trimmed = path.trim_end_matches(SEPARATOR);
  if trimmed.is_empty() && path.starts_with(SEPARATOR) {
    ROOT
  } else {
    trimmed
  }
}

/// ```
/// use the_text::path::last_path_component;
///
/// assert_eq!(last_path_component("/tmp/scratch.tiff"), "scratch.tiff");
/// assert_eq!(last_path_component("/tmp/lock/"), "lock");
/// assert_eq!(last_path_component("/"), "/");
/// ```
pub fn last_path_component(path: &str) -> &str {
  let path = trim_trailing_separators(path);
  if path == ROOT {
    return path;
  }
  match path.rfind(SEPARATOR) {
    Some(idx) => &path[idx + 1..],
    None => path,
  }
}

/// Extension of the last component, without the dot. Hidden files like
/// `.profile` have none.
pub fn path_extension(path: &str) -> &str {
  let name = last_path_component(path);
  match name.rfind('.') {
    Some(idx) if idx > 0 => &name[idx + 1..],
    _ => "",
  }
}

/// ```
/// use the_text::path::deleting_last_path_component;
///
/// assert_eq!(deleting_last_path_component("/tmp/scratch.tiff"), "/tmp");
/// assert_eq!(deleting_last_path_component("/tmp/"), "/");
/// assert_eq!(deleting_last_path_component("scratch.tiff"), "");
/// ```
pub fn deleting_last_path_component(path: &str) -> &str {
  let path = trim_trailing_separators(path);
  if path == ROOT {
    return path;
  }
  match path.rfind(SEPARATOR) {
    Some(idx) => {
      let parent = path[..idx].trim_end_matches(SEPARATOR);
      if parent.is_empty() { ROOT } else { parent }
    },
    None => "",
  }
}

/// ```
/// use the_text::path::deleting_path_extension;
///
/// assert_eq!(deleting_path_extension("/tmp/scratch.tiff"), "/tmp/scratch");
/// assert_eq!(deleting_path_extension("scratch.bundle/"), "scratch");
/// ```
pub fn deleting_path_extension(path: &str) -> &str {
  let path = trim_trailing_separators(path);
  let name = last_path_component(path);
  match name.rfind('.') {
    Some(idx) if idx > 0 => &path[..path.len() - (name.len() - idx)],
    _ => path,
  }
}

/// Components of `path`. An absolute path starts with a `/` component and
/// empty components are dropped.
pub fn path_components(path: &str) -> Vec<&str> {
  let mut components = Vec::new();
  if path.starts_with(SEPARATOR) {
    components.push(ROOT);
  }
  components.extend(path.split(SEPARATOR).filter(|c| !c.is_empty()));
  components
}

/// Joins `component` onto `path` with exactly one separator between them.
///
/// ```
/// use the_text::path::appending_path_component;
///
/// assert_eq!(appending_path_component("/tmp", "scratch.tiff"), "/tmp/scratch.tiff");
/// assert_eq!(appending_path_component("/", "scratch.tiff"), "/scratch.tiff");
/// ```
pub fn appending_path_component(path: &str, component: &str) -> String {
  let component = component.trim_start_matches(SEPARATOR);
  if path.is_empty() {
    return component.to_string();
  }
  let base = path.trim_end_matches(SEPARATOR);
  if component.is_empty() {
    return trim_trailing_separators(path).to_string();
  }
  format!("{base}{SEPARATOR}{component}")
}

/// Appends `.extension` to the last component.
///
/// Returns `None` for an empty path, the root path, or an extension that
/// contains a separator.
pub fn appending_path_extension(path: &str, extension: &str) -> Option<String> {
  if extension.contains(SEPARATOR) {
    return None;
  }
  let path = trim_trailing_separators(path);
  if path.is_empty() || path == ROOT {
    return None;
  }
  if extension.is_empty() {
    return Some(path.to_string());
  }
  Some(format!("{path}.{extension}"))
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn last_component() {
    assert_eq!(last_path_component("/tmp/scratch.tiff"), "scratch.tiff");
    assert_eq!(last_path_component("/tmp/scratch"), "scratch");
    assert_eq!(last_path_component("/tmp/"), "tmp");
    assert_eq!(last_path_component("scratch///"), "scratch");
    assert_eq!(last_path_component("/"), "/");
    assert_eq!(last_path_component(""), "");
  }

  #[test]
  fn extension() {
    assert_eq!(path_extension("/tmp/scratch.tiff"), "tiff");
    assert_eq!(path_extension("archive.tar.gz"), "gz");
    assert_eq!(path_extension("/tmp/scratch"), "");
    assert_eq!(path_extension("/tmp/.profile"), "");
    assert_eq!(path_extension("/tmp.d/scratch"), "");
    assert_eq!(path_extension("scratch.bundle/"), "bundle");
  }

  #[test]
  fn delete_last_component() {
    assert_eq!(deleting_last_path_component("/tmp/scratch.tiff"), "/tmp");
    assert_eq!(deleting_last_path_component("/tmp/lock/"), "/tmp");
    assert_eq!(deleting_last_path_component("/tmp/"), "/");
    assert_eq!(deleting_last_path_component("/tmp"), "/");
    assert_eq!(deleting_last_path_component("/"), "/");
    assert_eq!(deleting_last_path_component("scratch.tiff"), "");
    assert_eq!(deleting_last_path_component("a//b"), "a");
  }

  #[test]
  fn delete_extension() {
    assert_eq!(deleting_path_extension("/tmp/scratch.tiff"), "/tmp/scratch");
    assert_eq!(deleting_path_extension("/tmp/"), "/tmp");
    assert_eq!(deleting_path_extension("scratch.bundle/"), "scratch");
    assert_eq!(deleting_path_extension("scratch..tiff"), "scratch.");
    assert_eq!(deleting_path_extension(".tiff"), ".tiff");
    assert_eq!(deleting_path_extension("/"), "/");
  }

  #[test]
  fn components() {
    assert_eq!(path_components("/tmp/scratch.tiff"), ["/", "tmp", "scratch.tiff"]);
    assert_eq!(path_components("tmp//scratch/"), ["tmp", "scratch"]);
    assert_eq!(path_components("/"), ["/"]);
    assert!(path_components("").is_empty());
  }

  #[test]
  fn append_component() {
    assert_eq!(appending_path_component("/tmp", "scratch.tiff"), "/tmp/scratch.tiff");
    assert_eq!(appending_path_component("/tmp/", "scratch.tiff"), "/tmp/scratch.tiff");
    assert_eq!(appending_path_component("/", "scratch.tiff"), "/scratch.tiff");
    assert_eq!(appending_path_component("", "scratch.tiff"), "scratch.tiff");
    assert_eq!(appending_path_component("tmp", "/scratch"), "tmp/scratch");
    assert_eq!(appending_path_component("/tmp/", ""), "/tmp");
  }

  #[test]
  fn append_extension() {
    assert_eq!(appending_path_extension("/tmp/scratch.old", "tiff").as_deref(), Some("/tmp/scratch.old.tiff"));
    assert_eq!(appending_path_extension("/tmp/", "tiff").as_deref(), Some("/tmp.tiff"));
    assert_eq!(appending_path_extension("scratch", "").as_deref(), Some("scratch"));
    assert_eq!(appending_path_extension("/", "tiff"), None);
    assert_eq!(appending_path_extension("", "tiff"), None);
    assert_eq!(appending_path_extension("scratch", "a/b"), None);
  }
}
