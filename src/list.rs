//! Navigable List - Item slots and the uniform usability check
//!
//! The ordered sequence of item slots a navigation engine traverses.
//! A slot is either present (with an id handle and an innate disabled
//! flag) or absent (not yet mounted, treated as disabled). Length counts
//! slots, not enabled items.
//!
//! All disabled-ness funnels through one check: [`NavigableList::is_usable`]
//! combines the slot state with an explicit [`DisabledSet`] overlay.

// =============================================================================
// ITEM SLOTS
// =============================================================================

/// One position in a navigable list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemSlot {
    /// The item is not mounted yet. Never a navigation target.
    Absent,
    /// A mounted item with its id handle.
    Present {
        /// Host-side handle, exposed through the active-descendant surface.
        id: String,
        /// Innate per-item disabled marker.
        disabled: bool,
    },
}

impl ItemSlot {
    /// A mounted, enabled item.
    pub fn enabled(id: impl Into<String>) -> Self {
        Self::Present {
            id: id.into(),
            disabled: false,
        }
    }

    /// A mounted but disabled item.
    pub fn disabled(id: impl Into<String>) -> Self {
        Self::Present {
            id: id.into(),
            disabled: true,
        }
    }
}

// =============================================================================
// DISABLED SET
// =============================================================================

/// Explicit disabled indices layered over per-slot disabled flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisabledSet {
    indices: Vec<usize>,
}

impl DisabledSet {
    /// No extra disabled indices.
    pub fn none() -> Self {
        Self::default()
    }

    /// An explicit set of disabled indices.
    pub fn from_indices(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }

    /// Is this index in the explicit set?
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

impl From<Option<Vec<usize>>> for DisabledSet {
    fn from(indices: Option<Vec<usize>>) -> Self {
        Self {
            indices: indices.unwrap_or_default(),
        }
    }
}

// =============================================================================
// NAVIGABLE LIST
// =============================================================================

/// The ordered item slots of one popup list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigableList {
    slots: Vec<ItemSlot>,
}

impl NavigableList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// A list of `len` enabled items with generated ids (`item-0`, ...).
    pub fn with_len(len: usize) -> Self {
        Self {
            slots: (0..len).map(|i| ItemSlot::enabled(format!("item-{i}"))).collect(),
        }
    }

    /// Build from explicit slots.
    pub fn from_slots(slots: impl Into<Vec<ItemSlot>>) -> Self {
        Self {
            slots: slots.into(),
        }
    }

    /// Number of slots (not enabled items).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the list holds no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append a slot.
    pub fn push(&mut self, slot: ItemSlot) {
        self.slots.push(slot);
    }

    /// Replace one slot, growing the list with absent slots if needed.
    pub fn set_slot(&mut self, index: usize, slot: ItemSlot) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, ItemSlot::Absent);
        }
        self.slots[index] = slot;
    }

    /// Slot at an index, if within bounds.
    pub fn slot(&self, index: usize) -> Option<&ItemSlot> {
        self.slots.get(index)
    }

    /// Item id at an index, if the slot is present.
    pub fn id(&self, index: usize) -> Option<&str> {
        match self.slots.get(index) {
            Some(ItemSlot::Present { id, .. }) => Some(id),
            _ => None,
        }
    }

    /// The uniform usability check.
    ///
    /// An index is usable when it is in bounds, its slot is present, the
    /// slot is not innately disabled, and it is not in the explicit set.
    /// Absent slots are treated identically to disabled items.
    pub fn is_usable(&self, disabled: &DisabledSet, index: isize) -> bool {
        if index < 0 {
            return false;
        }
        let index = index as usize;
        match self.slots.get(index) {
            Some(ItemSlot::Present { disabled: innate, .. }) => {
                !innate && !disabled.contains(index)
            }
            _ => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_len_ids() {
        let list = NavigableList::with_len(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.id(0), Some("item-0"));
        assert_eq!(list.id(2), Some("item-2"));
        assert_eq!(list.id(3), None);
    }

    #[test]
    fn test_usable_respects_slot_state() {
        let list = NavigableList::from_slots(vec![
            ItemSlot::enabled("a"),
            ItemSlot::disabled("b"),
            ItemSlot::Absent,
        ]);
        let disabled = DisabledSet::none();

        assert!(list.is_usable(&disabled, 0));
        assert!(!list.is_usable(&disabled, 1));
        assert!(!list.is_usable(&disabled, 2));
    }

    #[test]
    fn test_usable_respects_explicit_set() {
        let list = NavigableList::with_len(3);
        let disabled = DisabledSet::from_indices(vec![1]);

        assert!(list.is_usable(&disabled, 0));
        assert!(!list.is_usable(&disabled, 1));
        assert!(list.is_usable(&disabled, 2));
    }

    #[test]
    fn test_usable_out_of_bounds() {
        let list = NavigableList::with_len(3);
        let disabled = DisabledSet::none();

        assert!(!list.is_usable(&disabled, -1));
        assert!(!list.is_usable(&disabled, 3));
        assert!(!list.is_usable(&disabled, 100));
    }

    #[test]
    fn test_set_slot_grows_with_absent() {
        let mut list = NavigableList::new();
        list.set_slot(2, ItemSlot::enabled("c"));

        assert_eq!(list.len(), 3);
        assert_eq!(list.slot(0), Some(&ItemSlot::Absent));
        assert_eq!(list.slot(1), Some(&ItemSlot::Absent));
        assert_eq!(list.id(2), Some("c"));
    }
}
