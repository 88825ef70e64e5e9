use super::Record;

/// Ordered collection of records, looked up by identifier.
///
/// No uniqueness check is made on insert. When two records share an
/// identifier, [`Roster::find_by_id`] returns the one added first.
#[derive(Debug, Clone)]
pub struct Roster<T> {
    items: Vec<T>,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Roster<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: T) {
        self.items.push(record);
    }

    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[T] {
        &self.items
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

impl<T: Record> FromIterator<T> for Roster<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Record> Extend<T> for Roster<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Course, Student};

    #[test]
    fn test_find_by_id_missing_is_none() {
        let roster: Roster<Student> = Roster::new();
        assert!(roster.find_by_id("S1").is_none());
        assert!(roster.is_empty());
    }

    #[test]
    fn test_find_by_id_returns_first_duplicate() {
        let mut roster = Roster::new();
        roster.add(Course::new("C1", "First", 3));
        roster.add(Course::new("C1", "Second", 1));

        let found = roster.find_by_id("C1").unwrap();
        assert_eq!(found.name, "First");
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_all_keeps_insertion_order() {
        let roster: Roster<Student> = ["S3", "S1", "S2"]
            .into_iter()
            .map(|id| Student::new(id, id, ""))
            .collect();

        let ids: Vec<_> = roster.all().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S3", "S1", "S2"]);
    }
}
