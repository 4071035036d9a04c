/// An item that carries a status field and an identity token.
///
/// Statuses are ordered by declaration; an item may only ever move forward.
pub trait StagedItem {
    type Status: Copy + Ord;

    fn id(&self) -> &str;
    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);
}

/// Ordered collection of staged items, owned by the app and mutated only on
/// the UI thread.
#[derive(Debug)]
pub struct StagedStore<T> {
    items: Vec<T>,
}

impl<T: StagedItem> StagedStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Newest-first insertion, used for generated assessments.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Moves exactly one matching item to `status`. Unknown ids and
    /// non-forward transitions are silent no-ops.
    pub fn advance(&mut self, id: &str, status: T::Status) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        if status <= item.status() {
            return false;
        }
        item.set_status(status);
        true
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: StagedItem> Default for StagedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::StagedStore;
    use crate::pipeline::types::{DocumentStatus, UploadedDocument};

    fn doc(name: &str) -> UploadedDocument {
        UploadedDocument::new(name.to_string(), 1024, "application/pdf")
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = StagedStore::new();
        store.append(doc("a.pdf"));
        store.append(doc("b.pdf"));
        let names: Vec<&str> = store.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.pdf"]);
    }

    #[test]
    fn prepend_puts_newest_first() {
        let mut store = StagedStore::new();
        store.append(doc("old.pdf"));
        store.prepend(doc("new.pdf"));
        let names: Vec<&str> = store.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["new.pdf", "old.pdf"]);
    }

    #[test]
    fn advance_touches_exactly_one_item() {
        let mut store = StagedStore::new();
        store.append(doc("a.pdf"));
        store.append(doc("b.pdf"));
        let id = store.iter().next().unwrap().id.clone();

        assert!(store.advance(&id, DocumentStatus::Processing));

        let statuses: Vec<DocumentStatus> = store.iter().map(|d| d.status).collect();
        assert_eq!(
            statuses,
            [DocumentStatus::Processing, DocumentStatus::Uploading]
        );
    }

    #[test]
    fn advance_on_unknown_id_is_a_no_op() {
        let mut store = StagedStore::new();
        store.append(doc("a.pdf"));
        assert!(!store.advance("missing", DocumentStatus::Completed));
        assert_eq!(store.iter().next().unwrap().status, DocumentStatus::Uploading);
    }

    #[test]
    fn statuses_never_regress() {
        let mut store = StagedStore::new();
        store.append(doc("a.pdf"));
        let id = store.iter().next().unwrap().id.clone();

        assert!(store.advance(&id, DocumentStatus::Completed));
        assert!(!store.advance(&id, DocumentStatus::Processing));
        assert!(!store.advance(&id, DocumentStatus::Completed));
        assert_eq!(store.get(&id).unwrap().status, DocumentStatus::Completed);
    }
}
