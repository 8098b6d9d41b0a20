/* src/server/engine/rust/src/source.rs */

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::normalize::RouteLayout;

/// Supplies the raw identifier of every page template.
pub trait RouteSource {
  fn routes(&self) -> Vec<String>;
}

impl RouteSource for Vec<String> {
  fn routes(&self) -> Vec<String> {
    self.clone()
  }
}

impl RouteSource for [String] {
  fn routes(&self) -> Vec<String> {
    self.to_vec()
  }
}

impl RouteSource for [&str] {
  fn routes(&self) -> Vec<String> {
    self.iter().map(|s| (*s).to_string()).collect()
  }
}

impl<const N: usize> RouteSource for [&str; N] {
  fn routes(&self) -> Vec<String> {
    self.as_slice().routes()
  }
}

/// Route source backed by a closure, called once per generation.
pub struct FnRouteSource<F>(F);

pub fn from_fn<F>(f: F) -> FnRouteSource<F>
where
  F: Fn() -> Vec<String>,
{
  FnRouteSource(f)
}

impl<F> RouteSource for FnRouteSource<F>
where
  F: Fn() -> Vec<String>,
{
  fn routes(&self) -> Vec<String> {
    (self.0)()
  }
}

/// Page files found under a route directory, as `{prefix}/{dir}/{file}` identifiers.
#[derive(Debug, Clone)]
pub struct DirRouteSource {
  routes: Vec<String>,
}

impl DirRouteSource {
  pub fn scan(root: &Path, layout: &RouteLayout) -> io::Result<Self> {
    let mut routes = Vec::new();
    walk(root, &layout.prefix, layout, &mut routes)?;
    routes.sort();
    debug!(root = %root.display(), pages = routes.len(), "route tree scanned");
    Ok(Self { routes })
  }
}

impl RouteSource for DirRouteSource {
  fn routes(&self) -> Vec<String> {
    self.routes.clone()
  }
}

fn walk(dir: &Path, id: &str, layout: &RouteLayout, out: &mut Vec<String>) -> io::Result<()> {
  for entry in fs::read_dir(dir)? {
    let entry = entry?;
    let name = entry.file_name();
    let Some(name) = name.to_str() else { continue };
    if name.starts_with('.') {
      continue;
    }
    let child = format!("{id}/{name}");
    if entry.file_type()?.is_dir() {
      walk(&entry.path(), &child, layout, out)?;
    } else if layout.is_page_file(name) {
      out.push(child);
    }
  }
  Ok(())
}
