//! The live territory document and the handles that address into it.
//!
//! Zones and territories are addressed by index pairs. Indices shift whenever
//! zones or territories are removed, so every handle carries the document
//! generation it was issued under. Any mutation that can reorder or drop
//! records bumps the generation, after which older handles resolve to
//! [`EditorError::StaleHandle`] instead of silently pointing at a different zone.

use zonekit_core::{EditorError, EditorResult, Territory, TerritoryData, Zone};

/// Addresses one zone of one territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneHandle {
    territory: usize,
    zone: usize,
    generation: u64,
}

impl ZoneHandle {
    pub fn territory_index(&self) -> usize {
        self.territory
    }

    pub fn zone_index(&self) -> usize {
        self.zone
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle of the territory that owns this zone.
    pub fn territory(&self) -> TerritoryHandle {
        TerritoryHandle {
            territory: self.territory,
            generation: self.generation,
        }
    }
}

/// Addresses one territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerritoryHandle {
    territory: usize,
    generation: u64,
}

impl TerritoryHandle {
    pub fn index(&self) -> usize {
        self.territory
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns the [`TerritoryData`] being edited and hands out handles into it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    data: TerritoryData,
    generation: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing data. Selection flags are not trusted and get cleared.
    pub fn from_data(mut data: TerritoryData) -> Self {
        data.clear_selection_flags();
        Self {
            data,
            generation: 0,
        }
    }

    pub fn data(&self) -> &TerritoryData {
        &self.data
    }

    pub fn territories(&self) -> &[Territory] {
        &self.data.territories
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn total_zone_count(&self) -> usize {
        self.data.total_zone_count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.territories.is_empty()
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Issues a handle for `(territory, zone)` if both indices are in range.
    pub fn zone_handle(&self, territory: usize, zone: usize) -> Option<ZoneHandle> {
        let in_range = self
            .data
            .territories
            .get(territory)
            .is_some_and(|t| zone < t.zones.len());
        in_range.then_some(ZoneHandle {
            territory,
            zone,
            generation: self.generation,
        })
    }

    /// Issues a handle for a territory if the index is in range.
    pub fn territory_handle(&self, territory: usize) -> Option<TerritoryHandle> {
        (territory < self.data.territories.len()).then_some(TerritoryHandle {
            territory,
            generation: self.generation,
        })
    }

    /// Whether the handle still resolves to a zone.
    pub fn is_valid(&self, handle: ZoneHandle) -> bool {
        self.zone(handle).is_ok()
    }

    pub fn zone(&self, handle: ZoneHandle) -> EditorResult<&Zone> {
        if handle.generation != self.generation {
            return Err(EditorError::StaleHandle);
        }
        self.data
            .territories
            .get(handle.territory)
            .and_then(|t| t.zones.get(handle.zone))
            .ok_or(EditorError::StaleHandle)
    }

    pub fn zone_mut(&mut self, handle: ZoneHandle) -> EditorResult<&mut Zone> {
        if handle.generation != self.generation {
            return Err(EditorError::StaleHandle);
        }
        self.data
            .territories
            .get_mut(handle.territory)
            .and_then(|t| t.zones.get_mut(handle.zone))
            .ok_or(EditorError::StaleHandle)
    }

    pub fn territory(&self, handle: TerritoryHandle) -> EditorResult<&Territory> {
        if handle.generation != self.generation {
            return Err(EditorError::StaleHandle);
        }
        self.data
            .territories
            .get(handle.territory)
            .ok_or(EditorError::StaleHandle)
    }

    /// Mutable access to a territory's own fields. The zone list must not be
    /// resized through this reference; use the structural operations instead.
    pub(crate) fn territory_mut(&mut self, handle: TerritoryHandle) -> EditorResult<&mut Territory> {
        if handle.generation != self.generation {
            return Err(EditorError::StaleHandle);
        }
        self.data
            .territories
            .get_mut(handle.territory)
            .ok_or(EditorError::StaleHandle)
    }

    /// Iterates every zone with its handle and owning territory, in document order.
    pub fn iter_zones(&self) -> impl Iterator<Item = (ZoneHandle, &Territory, &Zone)> + '_ {
        let generation = self.generation;
        self.data
            .territories
            .iter()
            .enumerate()
            .flat_map(move |(ti, territory)| {
                territory.zones.iter().enumerate().map(move |(zi, zone)| {
                    (
                        ZoneHandle {
                            territory: ti,
                            zone: zi,
                            generation,
                        },
                        territory,
                        zone,
                    )
                })
            })
    }

    /// Handles for every zone of one territory, in order.
    pub fn zone_handles_in(&self, handle: TerritoryHandle) -> EditorResult<Vec<ZoneHandle>> {
        let territory = self.territory(handle)?;
        Ok((0..territory.zones.len())
            .map(|zone| ZoneHandle {
                territory: handle.territory,
                zone,
                generation: self.generation,
            })
            .collect())
    }

    /// Deep copy of the current data, suitable for an undo snapshot.
    pub fn snapshot(&self) -> TerritoryData {
        let mut data = self.data.clone();
        data.clear_selection_flags();
        data
    }

    /// Replaces the whole document (load, undo restore, new document).
    ///
    /// Every `selected` flag in the incoming data is cleared and every
    /// previously issued handle becomes stale.
    pub fn replace(&mut self, mut data: TerritoryData) {
        data.clear_selection_flags();
        self.data = data;
        self.bump_generation();
    }

    /// Removes every zone matching `remove` and then every territory left
    /// empty. Returns `(zones_removed, territories_removed)`.
    ///
    /// Invalidates all handles.
    pub fn remove_zones_where<F>(&mut self, mut remove: F) -> (usize, usize)
    where
        F: FnMut(&Zone) -> bool,
    {
        let mut removed = 0;
        for territory in &mut self.data.territories {
            let before = territory.zones.len();
            territory.zones.retain(|z| !remove(z));
            removed += before - territory.zones.len();
        }
        let pruned = self.data.prune_empty();
        self.bump_generation();
        (removed, pruned)
    }

    /// Index of the first territory named `name`.
    pub fn find_territory(&self, name: &str) -> Option<TerritoryHandle> {
        self.data
            .territories
            .iter()
            .position(|t| t.name == name)
            .and_then(|i| self.territory_handle(i))
    }

    /// Appends a territory. Existing indices are unaffected, so handles stay valid.
    pub fn push_territory(&mut self, territory: Territory) -> TerritoryHandle {
        self.data.territories.push(territory);
        TerritoryHandle {
            territory: self.data.territories.len() - 1,
            generation: self.generation,
        }
    }

    /// Appends a zone to a territory. Existing indices are unaffected, so
    /// handles stay valid.
    pub fn push_zone(&mut self, handle: TerritoryHandle, zone: Zone) -> EditorResult<ZoneHandle> {
        let territory = self.territory_mut(handle)?;
        territory.zones.push(zone);
        let zone = territory.zones.len() - 1;
        Ok(ZoneHandle {
            territory: handle.territory,
            zone,
            generation: self.generation,
        })
    }
}
