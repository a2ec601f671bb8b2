//! Selection operations for editor state.

use zonekit_core::{EditorResult, Point, Zone};

use super::EditorState;
use crate::document::{TerritoryHandle, ZoneHandle};

/// Name and size of the territory picked in the hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct TerritorySummary {
    pub name: String,
    pub zone_count: usize,
}

/// Aggregate figures for the selection panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionSummary {
    pub count: usize,
    pub average_position: Option<Point>,
    pub average_radius: Option<f64>,
    pub territory: Option<TerritorySummary>,
}

impl EditorState {
    /// Selects a zone, replacing the selection unless `additive`.
    pub fn select_zone(&mut self, handle: ZoneHandle, additive: bool) -> EditorResult<bool> {
        self.selection.select(&mut self.document, handle, additive)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear(&mut self.document);
    }

    /// Selects every zone of a territory (hierarchy click).
    pub fn select_territory(&mut self, handle: TerritoryHandle) -> EditorResult<usize> {
        self.selection.select_territory(&mut self.document, handle)
    }

    pub fn selected_zone_count(&self) -> usize {
        self.selection.len()
    }

    /// The selected zone when exactly one is selected.
    pub fn selected_zone(&self) -> Option<(ZoneHandle, &Zone)> {
        match self.selection.selected_zones() {
            [handle] => self.document.zone(*handle).ok().map(|z| (*handle, z)),
            _ => None,
        }
    }

    pub fn selection_summary(&self) -> SelectionSummary {
        let zones: Vec<&Zone> = self
            .selection
            .selected_zones()
            .iter()
            .filter_map(|h| self.document.zone(*h).ok())
            .collect();

        let territory = self
            .selection
            .selected_territory()
            .and_then(|h| self.document.territory(h).ok())
            .map(|t| TerritorySummary {
                name: t.name.clone(),
                zone_count: t.zones.len(),
            });

        if zones.is_empty() {
            return SelectionSummary {
                territory,
                ..SelectionSummary::default()
            };
        }

        let n = zones.len() as f64;
        let (sx, sz, sr) = zones
            .iter()
            .fold((0.0, 0.0, 0.0), |(x, z, r), zone| (x + zone.x, z + zone.z, r + zone.r));

        SelectionSummary {
            count: zones.len(),
            average_position: Some(Point::new(sx / n, sz / n)),
            average_radius: Some(sr / n),
            territory,
        }
    }
}
