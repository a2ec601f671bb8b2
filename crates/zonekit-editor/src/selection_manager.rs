use tracing::debug;

use crate::document::{Document, TerritoryHandle, ZoneHandle};
use zonekit_core::EditorResult;

/// Manages zone selection state and selection operations.
///
/// `SelectionManager` is responsible for:
/// - Tracking the ordered set of selected zones
/// - Tracking which territory was picked from the hierarchy, if any
/// - Keeping every zone's `selected` flag in step with the set
///
/// # Selection Model
///
/// - A zone's `selected` flag is true exactly when its handle is in the set
/// - The set holds no duplicates and keeps insertion order
/// - Clearing the zone selection also clears the territory selection
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    zones: Vec<ZoneHandle>,
    territory: Option<TerritoryHandle>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected zones in the order they were added.
    pub fn selected_zones(&self) -> &[ZoneHandle] {
        &self.zones
    }

    pub fn selected_territory(&self) -> Option<TerritoryHandle> {
        self.territory
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn contains(&self, handle: ZoneHandle) -> bool {
        self.zones.contains(&handle)
    }

    /// Selects a zone.
    ///
    /// With `additive` false the previous selection is dropped first. Adding a
    /// zone that is already selected is a no-op. Returns whether the zone was
    /// newly added. A stale handle is rejected before anything changes.
    pub fn select(&mut self, document: &mut Document, handle: ZoneHandle, additive: bool) -> EditorResult<bool> {
        document.zone(handle)?;

        if !additive {
            self.clear(document);
        }
        if self.zones.contains(&handle) {
            return Ok(false);
        }

        document.zone_mut(handle)?.selected = true;
        self.zones.push(handle);
        Ok(true)
    }

    /// Adds several zones to the selection. Stale handles are skipped.
    /// Returns how many zones were newly added.
    pub fn select_many(&mut self, document: &mut Document, handles: &[ZoneHandle], additive: bool) -> usize {
        if !additive {
            self.clear(document);
        }
        handles
            .iter()
            .filter(|h| matches!(self.select(document, **h, true), Ok(true)))
            .count()
    }

    /// Drops the selection and the territory selection.
    ///
    /// Handles that no longer resolve are skipped: after a structural change
    /// their flags are already gone with the records they pointed at.
    pub fn clear(&mut self, document: &mut Document) {
        for handle in self.zones.drain(..) {
            match document.zone_mut(handle) {
                Ok(zone) => zone.selected = false,
                Err(_) => debug!(
                    territory = handle.territory_index(),
                    zone = handle.zone_index(),
                    "skipping stale handle while clearing selection"
                ),
            }
        }
        self.territory = None;
    }

    /// Replaces the selection with every zone of a territory and records the
    /// territory as selected. Returns the number of zones selected.
    pub fn select_territory(&mut self, document: &mut Document, handle: TerritoryHandle) -> EditorResult<usize> {
        let handles = document.zone_handles_in(handle)?;

        self.clear(document);
        for zone in &handles {
            document.zone_mut(*zone)?.selected = true;
        }
        self.zones = handles;
        self.territory = Some(handle);
        Ok(self.zones.len())
    }

    /// Whether the selected flags in the document agree with the set.
    pub fn is_consistent_with(&self, document: &Document) -> bool {
        let flagged = document
            .iter_zones()
            .filter(|(_, _, zone)| zone.selected)
            .count();
        flagged == self.zones.len()
            && self
                .zones
                .iter()
                .all(|h| document.zone(*h).is_ok_and(|z| z.selected))
    }
}
