//! Filter-dropdown option lookups.

use crate::error::Result;
use crate::models::DropdownOption;
use crate::query_params::QueryParams;

/// Query interface for the filter dropdown endpoints.
pub struct DropdownClient<'a> {
    conn: &'a crate::connection::ApiConnection,
}

impl<'a> DropdownClient<'a> {
    pub fn new(conn: &'a crate::connection::ApiConnection) -> Self {
        Self { conn }
    }

    pub fn drivers(&self) -> Result<Vec<DropdownOption>> {
        self.conn.get("/dropdown/drivers", &QueryParams::new())
    }

    pub fn constructors(&self) -> Result<Vec<DropdownOption>> {
        self.conn.get("/dropdown/constructors", &QueryParams::new())
    }

    pub fn sets(&self) -> Result<Vec<DropdownOption>> {
        self.conn.get("/dropdown/sets", &QueryParams::new())
    }

    pub fn parallels(&self, set_name: &str) -> Result<Vec<DropdownOption>> {
        self.conn
            .get(&format!("/dropdown/parallels/{set_name}"), &QueryParams::new())
    }

    /// Year options derived from the set dropdown.
    ///
    /// Set labels start with the four-digit release year; years are extracted
    /// and de-duplicated preserving first-seen order.
    pub fn years(&self) -> Result<Vec<DropdownOption>> {
        let sets = self.sets()?;
        Ok(derive_years(&sets))
    }
}

/// Extract unique four-character year prefixes from set labels.
pub fn derive_years(sets: &[DropdownOption]) -> Vec<DropdownOption> {
    let mut years: Vec<DropdownOption> = Vec::new();
    for set in sets {
        let year: String = set.label.chars().take(4).collect();
        if year.is_empty() || years.iter().any(|y| y.value == year) {
            continue;
        }
        years.push(DropdownOption {
            label: year.clone(),
            value: year,
        });
    }
    years
}
