use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use herd_model::{SlotResult, StallKind, StallState};
use herd_persistence::PersistenceError;

use herd_cli::session::{AgeChange, UpdateReport};

const EMPTY_LABEL: &str = "frei";
const NOT_FOUND_PREFIX: &str = "ID nicht gefunden: ";
const DETAIL_HEADERS: [&str; 6] = [
    "Ohrmarke",
    "Geboren",
    "Alter",
    "Schlachtung",
    "Rasse",
    "Geschlecht",
];

pub fn print_stall_map(kind: StallKind, stall: &StallState) {
    let layout = kind.layout();
    println!(
        "{kind}: {} gefunden, {} nicht gefunden",
        stall.resolved_count(),
        stall.not_found_count()
    );
    if !stall.has_raw_ids() {
        println!("  Noch keine IDs eingegeben.");
    } else if !stall.has_results() {
        println!("  IDs eingegeben, noch nicht aktualisiert.");
    }

    let grouped = layout.places_per_box > 1;
    let mut table = Table::new();
    let mut header = Vec::new();
    if grouped {
        header.push(header_cell("Box"));
    }
    header.push(header_cell("Platz"));
    header.extend(DETAIL_HEADERS.into_iter().map(header_cell));
    table.set_header(header);
    apply_map_table_style(&mut table);
    let place_column = usize::from(grouped);
    align_column(&mut table, place_column, CellAlignment::Right);

    for stall_box in layout.group(&stall.results) {
        for (offset, slot) in stall_box.slots.iter().enumerate() {
            let mut row = Vec::new();
            if grouped {
                row.push(if offset == 0 {
                    box_cell(stall_box.number, stall_box.occupied(), stall_box.capacity())
                } else {
                    Cell::new("")
                });
            }
            let place = if grouped { offset + 1 } else { stall_box.number };
            row.push(Cell::new(place));
            row.extend(slot_cells(slot));
            table.add_row(row);
        }
    }
    println!("{table}");
}

pub fn print_update_report(report: &UpdateReport) {
    println!("{} aktualisiert aus {}", report.kind, report.dataset.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Zeilen"),
        header_cell("Gefunden"),
        header_cell("Nicht gefunden"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(report.rows),
        Cell::new(report.resolved).fg(Color::Green),
        count_cell(report.not_found, Color::Red),
    ]);
    println!("{table}");
    if let Some(error) = &report.save_error {
        print_persistence_warning(error);
    }
}

pub fn print_age_change(change: &AgeChange) {
    if change.previous == change.current {
        println!("Schlachtalter: {}", change.current);
    } else {
        println!("Schlachtalter: {} -> {}", change.previous, change.current);
    }
    if change.refreshed > 0 {
        println!("{} Schlachtdaten neu berechnet", change.refreshed);
    }
    for error in &change.save_errors {
        print_persistence_warning(error);
    }
}

pub fn print_persistence_warning(error: &PersistenceError) {
    eprintln!("warning: {}", error.user_message());
    if let Some(suggestion) = error.suggestion() {
        eprintln!("  hint: {suggestion}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_map_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn box_cell(number: usize, occupied: usize, capacity: usize) -> Cell {
    let cell = Cell::new(format!("Box {number}\n{occupied} / {capacity} belegt"));
    if occupied == capacity {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn slot_cells(slot: &SlotResult) -> Vec<Cell> {
    let texts = slot_texts(slot);
    match slot {
        SlotResult::Resolved(_) => texts.into_iter().map(Cell::new).collect(),
        SlotResult::NotFound { .. } => texts
            .into_iter()
            .map(|text| Cell::new(text).fg(Color::Red))
            .collect(),
        SlotResult::Empty => texts.into_iter().map(dim_cell).collect(),
    }
}

/// Column texts of one place, in [`DETAIL_HEADERS`] order.
fn slot_texts(slot: &SlotResult) -> [String; 6] {
    match slot {
        SlotResult::Resolved(animal) => [
            animal.id.clone(),
            animal.birthdate.clone(),
            animal.age.clone(),
            animal.slaughter_date.clone(),
            animal.breed.clone(),
            animal.sex.clone(),
        ],
        SlotResult::NotFound { id } => [
            format!("{NOT_FOUND_PREFIX}{id}"),
            "-".into(),
            "-".into(),
            "-".into(),
            "-".into(),
            "-".into(),
        ],
        SlotResult::Empty => [
            EMPTY_LABEL.into(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ],
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
