//! Reference content: the screen catalog and where it comes from.
//!
//! The search navigator never sees this module; it receives a screen's
//! section list as an opaque `Arc<[Section]>`. The catalog only decides which
//! screens exist and how menus link them.

pub mod loader;

pub use loader::{load_catalog, parse_catalog, PackFormat};

use crate::model::{ContentError, Screen, ScreenId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::warn;

/// Bundled content pack, compiled into the binary.
const BUILTIN_PACK: &str = include_str!("guides.toml");

/// A validated set of screens with a root.
///
/// Construction checks that screen ids are unique, section keys are unique
/// within each screen, every menu link resolves and the root exists. Lookups
/// after construction therefore cannot dangle.
#[derive(Debug, Clone)]
pub struct Catalog {
    screens: Vec<Arc<Screen>>,
    index: HashMap<ScreenId, usize>,
    root_index: usize,
}

impl Catalog {
    /// Validate `screens` and build a catalog rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found, in declaration order.
    pub fn new(root: ScreenId, screens: Vec<Screen>) -> Result<Self, ContentError> {
        let mut index = HashMap::with_capacity(screens.len());
        for (position, screen) in screens.iter().enumerate() {
            if index.insert(screen.id().clone(), position).is_some() {
                return Err(ContentError::DuplicateScreen(screen.id().clone()));
            }

            let mut keys = HashSet::new();
            for section in screen.sections() {
                if !keys.insert(&section.key) {
                    return Err(ContentError::DuplicateSection {
                        screen: screen.id().clone(),
                        key: section.key.clone(),
                    });
                }
                if section.body.is_empty() {
                    warn!(
                        screen = %screen.id(),
                        section = %section.key,
                        kind = section.body.kind_name(),
                        "Section has an empty body"
                    );
                }
            }
        }

        for screen in &screens {
            if let Some(child) = screen.children().iter().find(|c| !index.contains_key(*c)) {
                return Err(ContentError::MissingChild {
                    menu: screen.id().clone(),
                    child: child.clone(),
                });
            }
        }

        let root_index = *index.get(&root).ok_or(ContentError::MissingRoot(root))?;

        Ok(Self {
            screens: screens.into_iter().map(Arc::new).collect(),
            index,
            root_index,
        })
    }

    /// The root screen.
    pub fn root(&self) -> Arc<Screen> {
        Arc::clone(&self.screens[self.root_index])
    }

    /// Look up a screen by id.
    pub fn get(&self, id: &ScreenId) -> Option<Arc<Screen>> {
        self.index.get(id).map(|&i| Arc::clone(&self.screens[i]))
    }

    /// All screens in declaration order.
    pub fn screens(&self) -> impl Iterator<Item = &Screen> {
        self.screens.iter().map(|s| s.as_ref())
    }

    /// Number of screens.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// True if the catalog has no screens. Never true for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

/// The bundled IB guide catalog.
///
/// # Errors
///
/// Only fails if the bundled pack itself is malformed, which the tests rule out.
pub fn catalog() -> Result<Catalog, ContentError> {
    parse_catalog(BUILTIN_PACK, PackFormat::Toml, "<builtin>")
}
