//! Zone operations (create, delete, batch and inspector edits, visibility)
//! for editor state.

use tracing::{info, warn};
use zonekit_core::constants::{DEFAULT_TERRITORY_COLOR, FALLBACK_TERRITORY_NAME};
use zonekit_core::{EditorError, EditorResult, Point, Territory, Zone};

use super::EditorState;
use crate::batch_edit::{BatchEdit, BatchField, BatchMode};
use crate::document::{TerritoryHandle, ZoneHandle};

/// Editable fields of a single zone, as shown in the inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneProperties {
    pub name: String,
    pub smin: i32,
    pub smax: i32,
    pub dmin: i32,
    pub dmax: i32,
    pub x: f64,
    pub z: f64,
    pub r: f64,
    pub h: f64,
}

impl From<&Zone> for ZoneProperties {
    fn from(zone: &Zone) -> Self {
        Self {
            name: zone.name.clone(),
            smin: zone.smin,
            smax: zone.smax,
            dmin: zone.dmin,
            dmax: zone.dmax,
            x: zone.x,
            z: zone.z,
            r: zone.r,
            h: zone.h,
        }
    }
}

impl ZoneProperties {
    fn validate(&self) -> EditorResult<()> {
        for (field, value) in [("x", self.x), ("z", self.z), ("r", self.r), ("h", self.h)] {
            if !value.is_finite() {
                return Err(EditorError::NonFiniteValue {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    fn apply_to(&self, zone: &mut Zone) {
        zone.name.clone_from(&self.name);
        zone.smin = self.smin;
        zone.smax = self.smax;
        zone.dmin = self.dmin;
        zone.dmax = self.dmax;
        zone.x = self.x;
        zone.z = self.z;
        zone.r = self.r.max(0.0);
        zone.h = self.h;
    }
}

impl EditorState {
    /// Deletes every selected zone and any territory left empty.
    /// Returns the number of zones removed.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }

        self.save_undo_state();
        let (removed, pruned) = self.document.remove_zones_where(|z| z.selected);
        self.forget_handles();
        self.is_modified = true;

        info!(zones = removed, territories = pruned, "deleted selected zones");
        removed
    }

    /// Creates a zone at a world position inside the first territory named
    /// `territory_name`, creating that territory if needed.
    pub fn add_zone(&mut self, world: Point, territory_name: &str) -> EditorResult<ZoneHandle> {
        if !world.x.is_finite() || !world.z.is_finite() {
            return Err(EditorError::NonFiniteValue {
                field: "position".to_string(),
            });
        }
        let name = territory_name.trim();
        if name.is_empty() {
            return Err(EditorError::UnknownTerritory {
                name: territory_name.to_string(),
            });
        }

        self.save_undo_state();

        let territory = match self.document.find_territory(name) {
            Some(handle) => handle,
            None => {
                info!(territory = name, "creating territory");
                self.document
                    .push_territory(Territory::new(name, DEFAULT_TERRITORY_COLOR))
            }
        };

        let zone = Zone {
            name: name.to_string(),
            dmin: self.settings.default_dmin,
            dmax: self.settings.default_dmax,
            r: self.settings.default_zone_radius,
            ..Zone::new(name, world.x, world.z, 0.0)
        };
        let handle = self.document.push_zone(territory, zone)?;
        self.is_modified = true;

        info!(territory = name, at = %world, "added zone");
        Ok(handle)
    }

    /// Sorted unique territory names for the creation dialog.
    pub fn territory_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .document
            .territories()
            .iter()
            .filter(|t| !t.name.is_empty())
            .map(|t| t.name.clone())
            .collect();
        names.sort();
        names.dedup();
        if names.is_empty() {
            names.push(FALLBACK_TERRITORY_NAME.to_string());
        }
        names
    }

    /// Parses `input` and applies it to every selected zone.
    ///
    /// Invalid input is rejected before any snapshot is taken. Returns the
    /// number of zones changed; an empty selection changes nothing.
    pub fn apply_batch_edit(&mut self, field: BatchField, mode: BatchMode, input: &str) -> EditorResult<usize> {
        let edit = BatchEdit::parse(field, mode, input).inspect_err(|err| {
            warn!(%field, %mode, input, error = %err, "rejected batch edit input");
        })?;
        Ok(self.apply_batch(edit))
    }

    /// Applies a validated batch edit to every selected zone, with a single
    /// undo snapshot for the whole batch.
    pub fn apply_batch(&mut self, edit: BatchEdit) -> usize {
        if self.selection.is_empty() {
            return 0;
        }

        self.save_undo_state();
        let mut changed = 0;
        for handle in self.selection.selected_zones() {
            if let Ok(zone) = self.document.zone_mut(*handle) {
                edit.apply_to(zone);
                changed += 1;
            }
        }
        self.is_modified = true;

        info!(
            field = %edit.field(),
            mode = %edit.mode(),
            value = edit.value(),
            zones = changed,
            "applied batch edit"
        );
        changed
    }

    /// Steps the radius of the single selected zone. Returns false when the
    /// selection is not exactly one zone.
    pub fn adjust_selected_radius(&mut self, grow: bool, large_step: bool) -> bool {
        let Some((handle, _)) = self.selected_zone() else {
            return false;
        };
        let step = if large_step {
            self.settings.radius_step_large
        } else {
            self.settings.radius_step
        };

        self.save_undo_state();
        let Ok(zone) = self.document.zone_mut(handle) else {
            return false;
        };
        zone.r = if grow { zone.r + step } else { (zone.r - step).max(0.0) };
        self.is_modified = true;
        true
    }

    /// Replaces the editable fields of one zone (inspector edit).
    pub fn update_zone(&mut self, handle: ZoneHandle, properties: &ZoneProperties) -> EditorResult<()> {
        properties.validate()?;
        self.document.zone(handle)?;

        self.save_undo_state();
        properties.apply_to(self.document.zone_mut(handle)?);
        self.is_modified = true;
        Ok(())
    }

    /// Shows or hides a territory. Hidden territories cannot be picked by
    /// clicking but are still reached by the marquee.
    pub fn set_territory_visible(&mut self, handle: TerritoryHandle, visible: bool) -> EditorResult<()> {
        self.document.territory_mut(handle)?.visible = visible;
        Ok(())
    }

    pub fn set_zone_visible(&mut self, handle: ZoneHandle, visible: bool) -> EditorResult<()> {
        self.document.zone_mut(handle)?.visible = visible;
        Ok(())
    }

    /// Indices of territories whose name, or any of whose zone names, contains
    /// `query` (case-sensitive). An empty query matches every territory.
    pub fn filter_territories(&self, query: &str) -> Vec<usize> {
        self.document
            .territories()
            .iter()
            .enumerate()
            .filter(|(_, t)| {
                query.is_empty() || t.name.contains(query) || t.zones.iter().any(|z| z.name.contains(query))
            })
            .map(|(i, _)| i)
            .collect()
    }
}
