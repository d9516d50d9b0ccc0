//! Terminal rendering of the form and the participant list.

use comfy_table::{Cell, Color, Table};

use kangoo_core::accent::Accent;
use kangoo_core::form::FormField;
use kangoo_core::labels;
use kangoo_core::ParticipantApp;

fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Color::Blue,
        Accent::Green => Color::Green,
        Accent::Red => Color::Red,
        Accent::Orange => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        Accent::Purple => Color::Magenta,
    }
}

fn accent_cell(text: &str, accent: Option<Accent>, color: bool) -> Cell {
    let cell = Cell::new(text);
    match accent {
        Some(a) if color => cell.fg(accent_color(a)),
        _ => cell,
    }
}

/// Render the form panel and the participant table.
pub fn render(app: &ParticipantApp, color: bool) -> String {
    let form = app.form();
    let mut out = String::new();

    match form.editing() {
        Some(id) => out.push_str(&format!("{} (#{id})\n", labels::TITLE)),
        None => out.push_str(&format!("{}\n", labels::TITLE)),
    }

    for field in FormField::ALL {
        let value = form.value(field);
        let shown = if value.is_empty() && field.is_enumerated() {
            "-".to_string()
        } else {
            value
        };
        out.push_str(&format!("  {}: {shown}\n", field.label()));
    }
    out.push_str(&format!("  [{}]\n\n", form.submit_label()));

    let mut table = Table::new();
    table.set_header(vec![
        "#",
        labels::FIRST_NAME,
        labels::LAST_NAME,
        labels::CLUB,
        labels::DAY,
        labels::SHOE_SIZE,
    ]);

    for p in app.participants() {
        let f = &p.fields;
        table.add_row(vec![
            Cell::new(p.id),
            Cell::new(&f.first_name),
            Cell::new(&f.last_name),
            accent_cell(f.club.as_str(), f.club.accent(), color),
            accent_cell(f.day.label(), f.day.accent(), color),
            Cell::new(f.shoe_size),
        ]);
    }

    out.push_str(&format!("{} ({})\n", labels::LIST_HEADING, app.registry().len()));
    out.push_str(&table.to_string());
    out.push('\n');
    out
}
