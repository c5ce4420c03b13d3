use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use comfy_table::Table;

use herd_cli::Stable;
use herd_model::{SlaughterAge, StallKind};
use herd_persistence::AppPaths;

use crate::cli::{EnterArgs, ShowArgs, SlaughterAgeArgs, UpdateArgs};
use crate::summary::{
    apply_table_style, print_age_change, print_persistence_warning, print_stall_map,
    print_update_report,
};

pub fn open_stable(paths: AppPaths) -> Stable {
    let mut stable = Stable::open(paths);
    if let Some(error) = stable.take_load_error() {
        print_persistence_warning(&error);
    }
    stable
}

pub fn run_enter(stable: &mut Stable, args: &EnterArgs) -> Result<()> {
    let kind = StallKind::from(args.layout);
    let lines = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("open ear-tag list {}", path.display()))?;
            Stable::read_ids(BufReader::new(file))
        }
        None => Stable::read_ids(io::stdin().lock()),
    }
    .context("read ear-tags")?;
    stable.enter_ids(kind, lines)?;
    stable.save().context("save stall state")?;
    println!(
        "{} IDs für {kind} gespeichert. Mit `herd update` abgleichen.",
        kind.slot_count()
    );
    Ok(())
}

pub fn run_update(stable: &mut Stable, args: &UpdateArgs) -> Result<()> {
    let kind = StallKind::from(args.layout);
    let report = stable
        .update(kind, &args.dataset)
        .with_context(|| format!("update {kind}"))?;
    print_update_report(&report);
    print_stall_map(kind, stable.layout(kind));
    Ok(())
}

pub fn run_show(stable: &Stable, args: &ShowArgs) -> Result<()> {
    if args.json {
        let json = match args.layout {
            Some(layout) => serde_json::to_string_pretty(stable.layout(layout.into())),
            None => serde_json::to_string_pretty(stable.state()),
        }
        .context("encode stall state")?;
        println!("{json}");
        return Ok(());
    }
    match args.layout {
        Some(layout) => {
            let kind = StallKind::from(layout);
            print_stall_map(kind, stable.layout(kind));
        }
        None => {
            for kind in StallKind::ALL {
                print_stall_map(kind, stable.layout(kind));
            }
        }
    }
    Ok(())
}

pub fn run_slaughter_age(stable: &mut Stable, args: &SlaughterAgeArgs) -> Result<()> {
    let Some(months) = args.months else {
        println!("Schlachtalter: {}", stable.settings().slaughter_age);
        return Ok(());
    };
    let age = SlaughterAge::new(months)?;
    let change = stable.set_slaughter_age(age);
    print_age_change(&change);
    Ok(())
}

pub fn run_layouts() {
    let mut table = Table::new();
    table.set_header(vec!["Layout", "Boxen", "Plätze je Box", "Plätze"]);
    apply_table_style(&mut table);
    for kind in StallKind::ALL {
        let layout = kind.layout();
        table.add_row(vec![
            kind.to_string(),
            layout.boxes.to_string(),
            layout.places_per_box.to_string(),
            layout.slot_count().to_string(),
        ]);
    }
    println!("{table}");
}
