mod common;

use common::{Recorder, Task, tasks};
use server_table::config::TableConfig;
use server_table::controller::PaginationController;
use server_table::paginated::PaginatedTable;
use server_table::render::{PlainTextRenderer, TableRenderer};
use server_table::selection::{Selection, SelectionMode};
use server_table::table::{Column, SortOrder, TableState};

fn columns() -> Vec<Column> {
    vec![Column::new("id", "ID"), Column::new("host", "HOST")]
}

fn table(rows: Vec<Task>) -> TableState<Task> {
    let mut table = TableState::new(columns()).with_selection(SelectionMode::Multi);
    table.set_rows(rows);
    table
}

fn paginated() -> PaginatedTable<Task, String, Recorder, PlainTextRenderer> {
    let config = TableConfig::new(2)
        .paginate(true)
        .column(Column::new("id", "ID"))
        .column(Column::new("host", "HOST"))
        .selection(SelectionMode::Single);
    PaginatedTable::new(&config, vec![], Recorder::default(), PlainTextRenderer::new())
        .expect("valid config")
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_selection_none_ignores_toggle() {
    let mut selection: Selection<u32> = Selection::new(SelectionMode::None);
    assert!(!selection.toggle(1));
    assert!(selection.is_empty());
}

#[test]
fn test_selection_single_replaces() {
    let mut selection = Selection::new(SelectionMode::Single);
    selection.toggle(1);
    selection.toggle(2);
    assert!(!selection.is_selected(&1));
    assert!(selection.is_selected(&2));

    selection.toggle(2);
    assert!(selection.is_empty());
}

#[test]
fn test_selection_multi_accumulates() {
    let mut selection = Selection::new(SelectionMode::Multi);
    selection.toggle(1);
    selection.toggle(2);
    assert_eq!(selection.len(), 2);

    selection.toggle(1);
    assert!(!selection.is_selected(&1));
    assert_eq!(selection.len(), 1);
}

// =============================================================================
// Table state
// =============================================================================

#[test]
fn test_toggle_sort_flips_direction() {
    let mut t = table(vec![Task::new(2, "b"), Task::new(10, "a"), Task::new(1, "c")]);

    assert_eq!(t.toggle_sort(0), Some((0, SortOrder::Ascending)));
    let ids: Vec<u32> = t.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 10]);

    assert_eq!(t.toggle_sort(0), Some((0, SortOrder::Descending)));
    let ids: Vec<u32> = t.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![10, 2, 1]);

    assert_eq!(t.toggle_sort(1), Some((1, SortOrder::Ascending)));
    let hosts: Vec<&str> = t.rows().iter().map(|r| r.host.as_str()).collect();
    assert_eq!(hosts, vec!["a", "b", "c"]);
}

#[test]
fn test_unsortable_column_is_ignored() {
    let mut t: TableState<Task> = TableState::new(vec![Column::new("id", "ID").unsortable()]);
    assert_eq!(t.toggle_sort(0), None);
    assert_eq!(t.toggle_sort(5), None);
    assert_eq!(t.sort(), None);
}

#[test]
fn test_set_rows_reapplies_sort() {
    let mut t = table(tasks(1, 3));
    t.set_sort(0, SortOrder::Descending);
    t.set_rows(tasks(4, 3));
    let ids: Vec<u32> = t.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![6, 5, 4]);
}

#[test]
fn test_set_rows_drops_missing_selection() {
    let mut t = table(tasks(1, 3));
    assert!(t.toggle_select(&1));
    assert!(t.toggle_select(&3));
    assert!(!t.toggle_select(&99));

    t.set_rows(tasks(3, 3));
    assert!(!t.is_selected(&1));
    assert!(t.is_selected(&3));
    assert_eq!(t.selected_rows().len(), 1);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_plain_text_layout() {
    let mut t: TableState<Task> = TableState::new(columns());
    t.set_rows(vec![Task::new(7, "alpha"), Task::new(12, "b")]);

    let config = TableConfig::new(2);
    let controller =
        PaginationController::<Task, String, _>::new(&config, vec![], Recorder::default())
            .expect("valid config");

    let out = PlainTextRenderer::new().render(&t, &controller.view());
    assert_eq!(out, "ID  HOST\n7   alpha\n12  b");
}

#[test]
fn test_empty_table_text() {
    let t = paginated();
    let out = t.render();
    assert_eq!(out, "  ID  HOST\n(no rows)\n\n  [1] ›");
}

// =============================================================================
// Paginated table
// =============================================================================

#[test]
fn test_rows_follow_display_items() {
    let mut t = paginated();
    t.receive(tasks(1, 2), true);
    assert_eq!(t.table().rows(), tasks(1, 2).as_slice());

    t.select_page(2);
    t.receive(tasks(3, 2), true);
    assert_eq!(t.table().rows(), tasks(3, 2).as_slice());

    t.select_page(3);
    t.receive(Vec::new(), true);
    assert_eq!(t.table().rows(), tasks(3, 2).as_slice());
    assert_eq!(t.controller().source().pages(), vec![2, 3, 2]);
}

#[test]
fn test_rows_keep_sort_across_pages() {
    let mut t = paginated();
    t.table_mut().set_sort(0, SortOrder::Descending);
    t.receive(tasks(1, 2), true);
    let ids: Vec<u32> = t.table().rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_pager_line() {
    let mut t = paginated();
    t.receive(tasks(1, 2), true);
    t.select_page(2);
    t.receive(tasks(3, 2), true);
    assert!(t.render().ends_with("‹ [2] ›"));

    t.select_page(3);
    t.receive(Vec::new(), true);
    assert!(t.render().ends_with("‹ [2]"));

    t.table_mut().toggle_select(&3);
    assert!(t.render().contains("* 3   host-3"));
}
