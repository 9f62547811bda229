//! Tank catalog: the ordered list of known tanks and the grouping rule
//! that collapses tanks sharing one calibration table into a single
//! selector entry.

use serde::Serialize;
use tracing::debug;

use crate::calibration::CalibrationStore;

/// One selectable entry for a tank picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayOption {
    /// Representative tank number (the first of its group).
    pub tank_no: u32,
    /// Label shown to the user: the tank number, or `"first ～ last"` for
    /// a group.
    pub label: String,
}

/// A run of consecutive catalog entries sharing one calibration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TankGroup {
    first: u32,
    last: u32,
}

impl TankGroup {
    fn label(&self) -> String {
        if self.first == self.last {
            self.first.to_string()
        } else {
            format!("{} ～ {}", self.first, self.last)
        }
    }

    fn contains(&self, tank_no: u32) -> bool {
        (self.first..=self.last).contains(&tank_no)
    }
}

/// Ordered catalog of known tanks with display grouping.
///
/// Built once from the store at startup. Consecutive entries whose tables
/// compare equal collapse into one display option; grouping is derived
/// entirely from table equality, so a changed dataset regroups itself.
pub struct TankCatalog {
    tank_nos: Vec<u32>,
    groups: Vec<TankGroup>,
}

impl TankCatalog {
    /// Derive the catalog from a loaded store.
    pub fn new(store: &CalibrationStore) -> Self {
        let tank_nos: Vec<u32> = store.tank_nos().collect();

        let mut groups: Vec<TankGroup> = Vec::new();
        for &tank_no in &tank_nos {
            match groups.last_mut() {
                Some(group) if store.table(group.last) == store.table(tank_no) => {
                    group.last = tank_no;
                }
                _ => groups.push(TankGroup {
                    first: tank_no,
                    last: tank_no,
                }),
            }
        }

        debug!(
            "Cataloged {} tanks into {} display options",
            tank_nos.len(),
            groups.len()
        );
        Self { tank_nos, groups }
    }

    /// Ascending tank numbers, one per tank (ungrouped).
    pub fn tank_nos(&self) -> &[u32] {
        &self.tank_nos
    }

    /// Selector entries in catalog order, one per group.
    pub fn display_options(&self) -> Vec<DisplayOption> {
        self.groups
            .iter()
            .map(|group| DisplayOption {
                tank_no: group.first,
                label: group.label(),
            })
            .collect()
    }

    /// Display label for a tank number: its group's range label when the
    /// tank belongs to a group, otherwise the number itself.
    pub fn label_for(&self, tank_no: u32) -> String {
        self.groups
            .iter()
            .find(|group| group.contains(tank_no))
            .map(TankGroup::label)
            .unwrap_or_else(|| tank_no.to_string())
    }
}
