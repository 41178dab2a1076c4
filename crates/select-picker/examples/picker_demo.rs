//! Walk a multi-select picker through filtering and bulk selection,
//! printing what a dropdown would render at each step.
//!
//! Run with: cargo run -p select-picker --example picker_demo [config.toml]
//!
//! Set `RUST_LOG=select_picker=debug` to see the picker's logging.

use select_picker::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq)]
struct Produce {
    name: &'static str,
    kind: &'static str,
    price_cents: i64,
}

const PRODUCE: &[Produce] = &[
    Produce { name: "Apple", kind: "Fruit", price_cents: 120 },
    Produce { name: "Banana", kind: "Fruit", price_cents: 45 },
    Produce { name: "Cherry", kind: "Fruit", price_cents: 600 },
    Produce { name: "Carrot", kind: "Veg", price_cents: 80 },
    Produce { name: "Leek", kind: "Veg", price_cents: 150 },
];

fn render(title: &str, picker: &SelectPicker<Produce>) {
    println!("== {title}");
    println!(
        "[{}] {}   ({} {})",
        picker.selection_summary(),
        if picker.is_dropdown_shown() { "v" } else { ">" },
        picker.select_all_none_label(),
        picker.glyph(),
    );
    for row in picker.grouped_rows() {
        if let Some(group) = &row.group {
            println!("  {group}");
        }
        println!(
            "    {} {:<8} {:?}",
            if row.selected { "[x]" } else { "[ ]" },
            row.label.text(),
            row.value,
        );
    }
    println!();
}

fn main() -> select_picker::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => PickerConfig::load(path)?,
        None => PickerConfig::default()
            .with_multiple(true)
            .with_live_search(LiveSearch::Advanced),
    };

    let accessors = OptionAccessors::new(|p: &Produce| p.name, |p: &Produce| p.price_cents)
        .with_group(|p: &Produce| Some(p.kind));
    let picker = SelectPicker::with_config(accessors, config);
    picker
        .selection_changed()
        .connect(|items: &Vec<Produce>| tracing::info!(count = items.len(), "selection changed"));

    picker.set_content(PRODUCE.to_vec());
    picker.open_dropdown();
    render("initial", &picker);

    picker.set_search_filter(Some("ca"));
    render("filter \"ca\"", &picker);

    picker.toggle_select_all_none();
    render("select all visible", &picker);

    picker.clear_filter();
    render("filter cleared", &picker);

    picker.select_item(&PRODUCE[4]);
    picker.close_dropdown();
    render("picked Leek, close absorbed", &picker);

    picker.close_dropdown();
    render("closed", &picker);

    Ok(())
}
