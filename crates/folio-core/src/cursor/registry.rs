use fnv::FnvHashMap;

/// Opaque id for an interactive element, assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(pub u64);

/// What the cursor needs to know about an interactive element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractiveMeta {
    pub label: Option<String>,
}

impl InteractiveMeta {
    pub fn plain() -> Self {
        Self::default()
    }

    /// Blank labels count as no label.
    pub fn labeled(label: impl AsRef<str>) -> Self {
        let label = label.as_ref().trim();
        Self {
            label: (!label.is_empty()).then(|| label.to_string()),
        }
    }

    pub fn from_attribute(label: Option<&str>) -> Self {
        label.map_or_else(Self::plain, Self::labeled)
    }
}

/// Elements currently flagged interactive.
///
/// Elements register and unregister themselves as they come and go, so
/// late additions are picked up without re-scanning the host document.
#[derive(Debug, Default)]
pub struct InteractiveRegistry {
    entries: FnvHashMap<ElementHandle, InteractiveMeta>,
}

impl InteractiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous metadata if the handle was already registered.
    pub fn register_interactive(
        &mut self,
        handle: ElementHandle,
        meta: InteractiveMeta,
    ) -> Option<InteractiveMeta> {
        self.entries.insert(handle, meta)
    }

    pub fn unregister(&mut self, handle: ElementHandle) -> Option<InteractiveMeta> {
        self.entries.remove(&handle)
    }

    pub fn get(&self, handle: ElementHandle) -> Option<&InteractiveMeta> {
        self.entries.get(&handle)
    }

    pub fn contains(&self, handle: ElementHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_label_is_plain() {
        assert_eq!(InteractiveMeta::labeled("   "), InteractiveMeta::plain());
        assert_eq!(
            InteractiveMeta::from_attribute(Some(" Contact ")).label.as_deref(),
            Some("Contact")
        );
        assert_eq!(InteractiveMeta::from_attribute(None).label, None);
    }

    #[test]
    fn register_replace_unregister() {
        let mut reg = InteractiveRegistry::new();
        let h = ElementHandle(4);
        assert!(reg.register_interactive(h, InteractiveMeta::plain()).is_none());
        assert!(reg
            .register_interactive(h, InteractiveMeta::labeled("View Project"))
            .is_some());
        assert_eq!(reg.len(), 1);
        assert!(reg.unregister(h).is_some());
        assert!(reg.unregister(h).is_none());
        assert!(reg.is_empty());
    }
}
