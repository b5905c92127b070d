use std::collections::HashMap;

use resostack_data::{IsotopeEntry, IsotopeInfo, SigmaTable};

use crate::database::Database;
use crate::error::{ResoError, Result};

/// Boundary to the nuclide reference data.
///
/// Implementations resolve element symbols to their isotope lists, isotope
/// identifiers to physical constants, and source references to raw tabulated
/// cross-section curves. The engine passes its configured database through
/// every call; implementations must not keep a "current database" of their
/// own. Lookups are expected to be local and deterministic — the engine
/// re-fetches tables on every rebuild and does not retry.
pub trait NuclideProvider {
    /// Ordered isotope list for an element symbol.
    fn list_isotopes(&self, element: &str, database: Database) -> Result<Vec<IsotopeEntry>>;

    /// Mass, natural abundance and density of one isotope.
    fn isotope_info(&self, isotope: &str, database: Database) -> Result<IsotopeInfo>;

    /// Raw tabulated (energy, sigma) points behind a source reference.
    fn cross_section_table(&self, source: &str, database: Database) -> Result<SigmaTable>;
}

/// Map-backed [`NuclideProvider`] holding its data entirely in memory.
///
/// Used by the test suite and benches, and by embedders that carry their own
/// nuclide tables. Isotopes are listed in insertion order.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    elements: HashMap<(Database, String), Vec<IsotopeEntry>>,
    isotopes: HashMap<(Database, String), IsotopeInfo>,
    tables: HashMap<(Database, String), SigmaTable>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one isotope under an element symbol.
    pub fn insert_isotope(
        &mut self,
        database: Database,
        element: &str,
        id: &str,
        source: &str,
        info: IsotopeInfo,
    ) {
        self.elements
            .entry((database, element.to_string()))
            .or_default()
            .push(IsotopeEntry {
                id: id.to_string(),
                source: source.to_string(),
            });
        self.isotopes.insert((database, id.to_string()), info);
    }

    /// Register the tabulated curve behind a source reference.
    pub fn insert_table(&mut self, database: Database, source: &str, table: SigmaTable) {
        self.tables.insert((database, source.to_string()), table);
    }
}

impl NuclideProvider for MemoryProvider {
    fn list_isotopes(&self, element: &str, database: Database) -> Result<Vec<IsotopeEntry>> {
        self.elements
            .get(&(database, element.to_string()))
            .filter(|entries| !entries.is_empty())
            .cloned()
            .ok_or_else(|| ResoError::UnknownElement(element.to_string()))
    }

    fn isotope_info(&self, isotope: &str, database: Database) -> Result<IsotopeInfo> {
        self.isotopes
            .get(&(database, isotope.to_string()))
            .copied()
            .ok_or_else(|| ResoError::UnknownIsotope(isotope.to_string()))
    }

    fn cross_section_table(&self, source: &str, database: Database) -> Result<SigmaTable> {
        self.tables
            .get(&(database, source.to_string()))
            .cloned()
            .ok_or_else(|| ResoError::SourceNotFound(source.to_string()))
    }
}
