use crate::event::{EventRecord, Revision};

/// Append-only in-memory event log.
///
/// Every appended event is stamped into an [`EventRecord`] with a
/// strictly increasing revision. Records are never modified or removed;
/// reads hand out slices in recording order.
#[derive(Debug, Clone)]
pub struct Journal<E> {
    records: Vec<EventRecord<E>>,
}

impl<E> Journal<E> {
    /// Creates an empty journal.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends events in order, stamping each with the next revision.
    ///
    /// Returns the newly appended records.
    pub fn append(&mut self, events: impl IntoIterator<Item = E>) -> &[EventRecord<E>] {
        let start = self.records.len();
        let mut revision = self.latest_revision();
        for event in events {
            revision = revision.next();
            self.records.push(EventRecord::stamp(revision, event));
        }
        &self.records[start..]
    }

    /// All records in recording order.
    pub fn records(&self) -> &[EventRecord<E>] {
        &self.records
    }

    /// Records appended after the given revision.
    pub fn since(&self, revision: Revision) -> &[EventRecord<E>] {
        // Revisions are contiguous from 1, so the record at revision r
        // sits at index r - 1.
        let from = revision.as_i64().max(0) as usize;
        &self.records[from.min(self.records.len())..]
    }

    /// Revision of the most recent record, or the initial revision when
    /// the journal is empty.
    pub fn latest_revision(&self) -> Revision {
        self.records
            .last()
            .map(|record| record.revision)
            .unwrap_or_else(Revision::initial)
    }

    /// Number of records in the journal.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the journal holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<E> Default for Journal<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestEvent {
        Opened,
        Added(&'static str),
        Removed(&'static str),
    }

    #[test]
    fn append_stamps_strictly_increasing_revisions() {
        let mut journal = Journal::new();
        journal.append([TestEvent::Opened, TestEvent::Added("tiramisu")]);
        journal.append([TestEvent::Removed("tiramisu")]);

        let revisions: Vec<i64> = journal
            .records()
            .iter()
            .map(|r| r.revision.as_i64())
            .collect();
        assert_eq!(revisions, vec![1, 2, 3]);
        assert_eq!(journal.latest_revision(), Revision::new(3));
    }

    #[test]
    fn append_returns_only_new_records() {
        let mut journal = Journal::new();
        journal.append([TestEvent::Opened]);

        let appended = journal.append([TestEvent::Added("a"), TestEvent::Added("b")]);
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[0].revision, Revision::new(2));
        assert_eq!(appended[1].revision, Revision::new(3));
    }

    #[test]
    fn append_preserves_event_order() {
        let mut journal = Journal::new();
        journal.append([
            TestEvent::Added("first"),
            TestEvent::Added("second"),
            TestEvent::Added("third"),
        ]);

        let names: Vec<&TestEvent> = journal.records().iter().map(|r| &r.event).collect();
        assert_eq!(
            names,
            vec![
                &TestEvent::Added("first"),
                &TestEvent::Added("second"),
                &TestEvent::Added("third"),
            ]
        );
    }

    #[test]
    fn empty_journal_reports_initial_revision() {
        let journal: Journal<TestEvent> = Journal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
        assert_eq!(journal.latest_revision(), Revision::initial());
    }

    #[test]
    fn since_returns_records_after_revision() {
        let mut journal = Journal::new();
        journal.append([TestEvent::Opened, TestEvent::Added("a"), TestEvent::Added("b")]);

        let tail = journal.since(Revision::new(1));
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].revision, Revision::new(2));

        assert_eq!(journal.since(Revision::initial()).len(), 3);
        assert!(journal.since(Revision::new(3)).is_empty());
        assert!(journal.since(Revision::new(99)).is_empty());
    }

    #[test]
    fn appending_nothing_changes_nothing() {
        let mut journal: Journal<TestEvent> = Journal::new();
        let appended = journal.append([]);
        assert!(appended.is_empty());
        assert_eq!(journal.latest_revision(), Revision::initial());
    }
}
