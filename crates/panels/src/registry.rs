use std::cell::RefCell;
use std::rc::Rc;

use catalog::StyleDescriptor;

/// Index of a panel in the registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PanelId(pub u32);

/// One live panel: its descriptor and a shared handle to its engine.
pub struct Panel<E> {
    pub id: PanelId,
    pub descriptor: StyleDescriptor,
    pub engine: Rc<RefCell<E>>,
}

/// Registry of live panels, in catalog order.
///
/// Append-only after startup; there is no removal path. Consumers
/// iterate it in registration order, which is what gives the camera
/// broadcast its ordering guarantee.
pub struct PanelRegistry<E> {
    panels: Vec<Panel<E>>,
}

impl<E> PanelRegistry<E> {
    pub fn new() -> Self {
        Self { panels: Vec::new() }
    }

    pub fn register(&mut self, descriptor: StyleDescriptor, engine: E) -> PanelId {
        let id = PanelId(self.panels.len() as u32);
        self.panels.push(Panel {
            id,
            descriptor,
            engine: Rc::new(RefCell::new(engine)),
        });
        id
    }

    pub fn get(&self, id: PanelId) -> Option<&Panel<E>> {
        self.panels.get(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel<E>> {
        self.panels.iter()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl<E> Default for PanelRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::PanelRegistry;
    use catalog::StyleDescriptor;
    use engine::FakeMap;

    fn descriptor(id: &str) -> StyleDescriptor {
        StyleDescriptor {
            id: id.to_string(),
            label: id.to_string(),
            style_url: format!("mapbox://styles/test/{id}"),
        }
    }

    #[test]
    fn ids_follow_registration_order() {
        let mut registry = PanelRegistry::new();
        let a = registry.register(descriptor("a"), FakeMap::loaded_at_start());
        let b = registry.register(descriptor("b"), FakeMap::loaded_at_start());
        assert_eq!(a.0, 0);
        assert_eq!(b.0, 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(b).unwrap().descriptor.id, "b");
    }

    #[test]
    fn iteration_is_in_registration_order() {
        let mut registry = PanelRegistry::new();
        for name in ["a", "b", "c"] {
            registry.register(descriptor(name), FakeMap::loaded_at_start());
        }
        let ids: Vec<_> = registry.iter().map(|p| p.descriptor.id.clone()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
