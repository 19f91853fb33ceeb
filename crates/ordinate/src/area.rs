//! Registry of layout areas that measures may refer to.
//!
//! Legends, headers and planes register their geometry here and hand out the
//! resulting [`AreaId`]. A measure keeps the id as a lookup-only
//! back-reference: once the area is removed the id stops resolving.

use crate::error::{OrdinateError, Result};
use ordinate_core::alloc::slot_arena::{Slot, SlotArena};
use ordinate_core::geometry::Rect;
use ordinate_core::math::DVec2;

/// Weak handle to an area in an [`AreaRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AreaId(Slot);

static_assertions::assert_eq_size!(AreaId, Option<AreaId>);

/// Something that can report the current size of an area.
pub trait AreaLookup {
    /// Current size of `id`, or `None` if the area no longer exists.
    fn area_size(&self, id: AreaId) -> Option<DVec2>;
}

#[derive(Debug, Clone)]
struct Area {
    name: String,
    geometry: Rect,
}

/// Owns named areas and their geometry.
#[derive(Debug, Default)]
pub struct AreaRegistry {
    areas: SlotArena<Area>,
}

impl AreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an area and return its handle.
    pub fn insert(&mut self, name: impl Into<String>, geometry: Rect) -> AreaId {
        let name = name.into();
        tracing::trace!(area = %name, ?geometry, "registering area");
        AreaId(self.areas.insert(Area { name, geometry }))
    }

    /// Remove an area. Handles to it stop resolving.
    pub fn remove(&mut self, id: AreaId) -> Option<Rect> {
        self.areas.remove(id.0).map(|area| area.geometry)
    }

    /// Update an area's geometry.
    pub fn set_geometry(&mut self, id: AreaId, geometry: Rect) -> Result<()> {
        let area = self
            .areas
            .get_mut(id.0)
            .ok_or(OrdinateError::StaleArea(id))?;
        area.geometry = geometry;
        Ok(())
    }

    pub fn geometry(&self, id: AreaId) -> Option<Rect> {
        self.areas.get(id.0).map(|area| area.geometry)
    }

    pub fn name(&self, id: AreaId) -> Option<&str> {
        self.areas.get(id.0).map(|area| area.name.as_str())
    }

    pub fn contains(&self, id: AreaId) -> bool {
        self.areas.contains(id.0)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl AreaLookup for AreaRegistry {
    fn area_size(&self, id: AreaId) -> Option<DVec2> {
        self.geometry(id).map(|rect| rect.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_area_stops_resolving() {
        let mut areas = AreaRegistry::new();
        let legend = areas.insert("legend", Rect::new(0.0, 0.0, 120.0, 80.0));
        assert_eq!(areas.area_size(legend), Some(DVec2::new(120.0, 80.0)));
        assert_eq!(areas.name(legend), Some("legend"));

        areas.remove(legend);
        let header = areas.insert("header", Rect::new(0.0, 0.0, 10.0, 10.0));

        assert_eq!(areas.area_size(legend), None);
        assert_eq!(areas.area_size(header), Some(DVec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_set_geometry_on_stale_area_fails() {
        let mut areas = AreaRegistry::new();
        let id = areas.insert("legend", Rect::ZERO);
        areas.remove(id);

        assert_eq!(
            areas.set_geometry(id, Rect::new(0.0, 0.0, 1.0, 1.0)),
            Err(OrdinateError::StaleArea(id))
        );
    }
}
