//! Integration tests for the Table widget.

use celldom::{Key, KeyCombo};
use formkit::prelude::*;

#[derive(Debug, Clone)]
struct Person {
    id: u32,
    name: &'static str,
    email: &'static str,
    age: i64,
}

impl TableRow for Person {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, column: usize) -> Option<CellValue> {
        match column {
            0 => Some(self.name.into()),
            1 => Some(self.email.into()),
            2 => Some(self.age.into()),
            _ => None,
        }
    }
}

fn people() -> Vec<Person> {
    vec![
        Person {
            id: 1,
            name: "Pratyush",
            email: "pratyush@example.com",
            age: 25,
        },
        Person {
            id: 2,
            name: "Bhavesh",
            email: "bhavesh@example.com",
            age: 30,
        },
        Person {
            id: 3,
            name: "Kunal",
            email: "kunal@example.com",
            age: 28,
        },
    ]
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("Name", 12).sortable(),
        Column::new("Email", 24),
        Column::new("Age", 6).sortable().align(Alignment::Right),
    ]
}

fn table() -> Table<Person> {
    Table::with_rows(columns(), people()).with_selection_mode(SelectionMode::Multiple)
}

fn names(rows: &[Person]) -> Vec<&'static str> {
    rows.iter().map(|p| p.name).collect()
}

#[test]
fn unsorted_view_preserves_data_order() {
    let table = table();
    assert_eq!(table.sort(), None);
    assert_eq!(names(&table.view_rows()), ["Pratyush", "Bhavesh", "Kunal"]);
}

#[test]
fn sort_toggle_cycles_between_directions_only() {
    let table = table();

    assert_eq!(table.toggle_sort(0), Some((0, SortDirection::Ascending)));
    assert_eq!(names(&table.view_rows()), ["Bhavesh", "Kunal", "Pratyush"]);

    assert_eq!(table.toggle_sort(0), Some((0, SortDirection::Descending)));
    assert_eq!(names(&table.view_rows()), ["Pratyush", "Kunal", "Bhavesh"]);

    // Third toggle flips back to ascending; there is no unsorted state.
    assert_eq!(table.toggle_sort(0), Some((0, SortDirection::Ascending)));
    assert!(table.sort().is_some());
}

#[test]
fn switching_sort_column_starts_ascending() {
    let table = table();
    table.toggle_sort(0);
    table.toggle_sort(0);
    assert_eq!(table.sort(), Some((0, SortDirection::Descending)));

    assert_eq!(table.toggle_sort(2), Some((2, SortDirection::Ascending)));
    assert_eq!(names(&table.view_rows()), ["Pratyush", "Kunal", "Bhavesh"]);
}

#[test]
fn non_sortable_column_ignores_toggle() {
    let table = table();
    assert_eq!(table.toggle_sort(1), None);
    assert_eq!(table.sort(), None);
    assert!(table.take_events().is_empty());
}

#[test]
fn sorting_never_reorders_underlying_rows() {
    let table = table();
    table.toggle_sort(2);
    assert_eq!(names(&table.rows()), ["Pratyush", "Bhavesh", "Kunal"]);
}

#[test]
fn equal_keys_keep_relative_order() {
    let mut rows = people();
    rows[0].age = 30; // ties with Bhavesh
    let table = Table::with_rows(columns(), rows);
    table.toggle_sort(2);
    assert_eq!(names(&table.view_rows()), ["Kunal", "Pratyush", "Bhavesh"]);
}

#[test]
fn selected_rows_report_in_data_order_regardless_of_sort() {
    let table = table();
    table.toggle_sort(0); // Bhavesh, Kunal, Pratyush
    table.toggle_select("3");
    table.toggle_select("1");

    assert_eq!(names(&table.selected_rows()), ["Pratyush", "Kunal"]);
    assert_eq!(table.selected_ids(), ["1", "3"]);
}

#[test]
fn selection_survives_resort() {
    let table = table();
    table.toggle_select("2");
    table.toggle_sort(2);
    table.toggle_sort(2);
    assert!(table.is_selected("2"));
    assert_eq!(names(&table.selected_rows()), ["Bhavesh"]);
}

#[test]
fn set_rows_prunes_stale_selection_and_keeps_survivors() {
    let table = table();
    table.toggle_select("1");
    table.toggle_select("3");
    table.take_events();

    let mut remaining = people();
    remaining.remove(0); // drop id 1
    table.set_rows(remaining);

    assert!(!table.is_selected("1"));
    assert!(table.is_selected("3"));
    assert_eq!(table.take_events(), [TableEvent::SelectionChange]);
}

#[test]
fn set_rows_without_selection_change_stays_quiet() {
    let table = table();
    table.toggle_select("2");
    table.take_events();

    table.set_rows(people());
    assert!(table.is_selected("2"));
    assert!(table.take_events().is_empty());
}

#[test]
fn cursor_follows_row_across_resort() {
    let table = table();
    table.cursor_last(); // on Kunal (view index 2)
    assert_eq!(table.cursor_row().unwrap().name, "Kunal");

    table.toggle_sort(0); // Bhavesh, Kunal, Pratyush
    assert_eq!(table.cursor_row().unwrap().name, "Kunal");
    assert_eq!(table.cursor(), Some(1));
}

#[test]
fn select_all_and_deselect_all() {
    let table = table();
    let added = table.select_all();
    assert_eq!(added.len(), 3);
    assert_eq!(table.selected_ids(), ["1", "2", "3"]);

    let removed = table.deselect_all();
    assert_eq!(removed.len(), 3);
    assert!(table.selected_ids().is_empty());
}

#[test]
fn selection_requires_multiple_mode() {
    let table = Table::with_rows(columns(), people());
    table.toggle_select("1");
    assert!(table.selected_ids().is_empty());
    assert!(table.select_all().is_empty());
}

#[test]
fn loading_table_ignores_interaction() {
    let table = table();
    table.set_loading(true);

    assert_eq!(table.on_key(&KeyCombo::key(Key::Down)), EventResult::Ignored);
    assert_eq!(
        table.on_key(&KeyCombo::key(Key::Char('a')).ctrl()),
        EventResult::Ignored
    );
    assert_eq!(table.cursor(), None);
    assert!(table.selected_ids().is_empty());

    table.set_loading(false);
    assert_eq!(table.on_key(&KeyCombo::key(Key::Down)), EventResult::Consumed);
}

#[test]
fn key_dispatch_drives_sort_and_selection() {
    let table = table();

    // Space on the first row toggles its selection.
    table.on_key(&KeyCombo::key(Key::Down));
    table.on_key(&KeyCombo::key(Key::Char(' ')));
    assert_eq!(table.selected_ids(), ["1"]);

    // Header cursor to Age, then sort it.
    table.on_key(&KeyCombo::key(Key::Right));
    table.on_key(&KeyCombo::key(Key::Right));
    table.on_key(&KeyCombo::key(Key::Enter));
    assert_eq!(table.sort(), Some((2, SortDirection::Ascending)));

    // Escape clears the selection.
    table.on_key(&KeyCombo::key(Key::Escape));
    assert!(table.selected_ids().is_empty());

    let events = table.take_events();
    assert!(events.contains(&TableEvent::SortChange));
    assert!(events.contains(&TableEvent::SelectionChange));
}

#[test]
fn take_events_drains_the_queue() {
    let table = table();
    table.toggle_select("1");
    assert_eq!(table.take_events(), [TableEvent::SelectionChange]);
    assert!(table.take_events().is_empty());
}
