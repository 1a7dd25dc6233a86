use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hcu_catalog::UnitCatalog;
use hcu_cli::profile::ApplyReport;
use hcu_core::{ConfigurationState, Session, resolve, results};
use hcu_model::{
    CapabilitySet, ParameterSide, ResultCategory, ResultMode, SpecialFunction,
    SpecialFunctionKind, Unit, UnitCategory,
};
use hcu_validate::{IssueKind, ValidationResult};

pub fn print_units(catalog: &UnitCatalog) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Type"),
        header_cell("Unit ID"),
        header_cell("Stroke"),
        header_cell("SWL"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    let grouped = catalog.categorize();
    for category in UnitCategory::ALL {
        for unit in grouped.group(category) {
            table.add_row(vec![
                category_cell(category),
                Cell::new(&unit.type_name),
                Cell::new(&unit.unit_id).add_attribute(Attribute::Bold),
                Cell::new(format!("{} m", unit.specs.stroke)),
                Cell::new(format!("{:.1} Te", unit.specs.swl)),
            ]);
        }
    }
    if catalog.is_empty() {
        table.add_row(vec![
            dim_cell("-"),
            dim_cell("No units available"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    println!("{table}");
}

pub fn print_unit(unit: &Unit, image: &Path) {
    println!("Unit: {} ({})", unit.unit_id, unit.type_name);
    println!("Category: {}", unit.category.display_name());
    println!("Image: {}", image.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Specification"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, value) in unit.specs.display_rows() {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    println!("{table}");
    print_function_support(resolve(unit.category));
}

pub fn print_capabilities() {
    let mut table = Table::new();
    let mut header = vec![header_cell("Category")];
    header.extend(
        SpecialFunctionKind::ALL
            .iter()
            .map(|kind| header_cell(kind.display_name())),
    );
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=SpecialFunctionKind::ALL.len() {
        align_column(&mut table, index, CellAlignment::Center);
    }
    for category in UnitCategory::ALL {
        let capabilities = resolve(category);
        let mut row = vec![category_cell(category)];
        row.extend(
            SpecialFunctionKind::ALL
                .iter()
                .map(|kind| support_cell(capabilities.supports(*kind))),
        );
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_session(session: &Session) {
    let state = &session.state;
    println!("User: {}", session.user.as_deref().unwrap_or("-"));
    println!("Step: {}", session.step.label());
    match state.unit() {
        Some(unit) => println!(
            "Unit: {} ({}, {})",
            unit.unit_id,
            unit.type_name,
            unit.category.display_name()
        ),
        None => println!("Unit: none selected"),
    }
    println!("Max force limit: {} Te", state.safety().max_force_limit);
    println!();
    print_parameters(state);
    println!();
    print_functions(state);
    println!();
    print_results(state);
}

fn print_parameters(state: &ConfigurationState) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Side"),
        header_cell("Key"),
        header_cell("Name"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for side in ParameterSide::ALL {
        for (id, slot) in state.parameters().iter_side(side) {
            let value = if slot.is_zero() {
                Cell::new(slot.value()).fg(Color::Yellow)
            } else {
                Cell::new(slot.value())
            };
            table.add_row(vec![
                Cell::new(side.as_str()),
                dim_cell(id.key()),
                Cell::new(slot.label()),
                value,
            ]);
        }
    }
    println!("Parameters:");
    println!("{table}");
}

fn print_functions(state: &ConfigurationState) {
    let capabilities = state.capabilities();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Function"),
        header_cell("Supported"),
        header_cell("Active"),
        header_cell("Parameters"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    for entry in state.functions().iter() {
        let kind = entry.config.kind();
        let supported = capabilities.supports(kind);
        table.add_row(vec![
            Cell::new(kind.display_name()),
            support_cell(supported),
            support_cell(state.is_function_active(kind)),
            if supported {
                Cell::new(describe_function(&entry.config))
            } else {
                dim_cell(describe_function(&entry.config))
            },
        ]);
    }
    println!("Special functions:");
    println!("{table}");
}

fn describe_function(config: &SpecialFunction) -> String {
    match config {
        SpecialFunction::QuickLifting(p) => format!(
            "start {} s, acceleration {} m/s²",
            p.start_time, p.acceleration_limit
        ),
        SpecialFunction::ConstantTension(p) => {
            format!("start {} s, tolerance {} Te", p.start_time, p.tolerance)
        }
        SpecialFunction::ActiveHeaveCompensation(p) => format!(
            "start {} s, stroke speed {} m/s, MRU {}",
            p.start_time,
            p.max_stroke_speed,
            p.motion_reference.as_str()
        ),
        SpecialFunction::RodLock(p) => format!(
            "{} at {} m, {}, hold {} s, speed {} m/s",
            p.mode.as_str(),
            p.depth,
            p.operation.as_str(),
            p.hold_time,
            p.speed
        ),
        SpecialFunction::RodOrientation(orientation) => orientation.as_str().to_string(),
    }
}

fn print_results(state: &ConfigurationState) {
    let selection = state.results();
    let mode = match selection.mode {
        ResultMode::Defaults => "defaults",
        ResultMode::Customized => "customized",
    };
    println!("Results ({mode}):");
    let counts = results::counts(selection);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Selected"),
        header_cell("Channels"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for category in ResultCategory::ALL {
        let (selected, total) = counts.get(category);
        let channels = selection.ordered(category).join(", ");
        table.add_row(vec![
            Cell::new(category.as_str()),
            Cell::new(format!("{selected}/{total}")),
            if channels.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(channels)
            },
        ]);
    }
    println!("{table}");
}

pub fn print_validation(result: &ValidationResult) {
    if result.ok {
        println!("Configuration is valid");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for issue in result.issues() {
        table.add_row(vec![
            issue_code_cell(issue.kind),
            Cell::new(issue.field.as_deref().unwrap_or("-")),
            Cell::new(issue.message),
        ]);
    }
    println!("Issues: {}", result.issue_count());
    println!("{table}");
}

pub fn print_apply_report(report: &ApplyReport) {
    if let Some(unit_id) = &report.unit_id {
        println!("Selected unit: {unit_id}");
    }
    println!("Committed parameters: {}", report.committed_parameters);
    for kind in &report.toggled {
        println!("Applied: {}", kind.display_name());
    }
    for kind in &report.ignored {
        println!("Ignored (not supported by unit): {}", kind.display_name());
    }
}

fn print_function_support(capabilities: CapabilitySet) {
    let supported: Vec<&str> = capabilities
        .supported()
        .iter()
        .map(SpecialFunctionKind::display_name)
        .collect();
    if supported.is_empty() {
        println!("Special functions: none");
    } else {
        println!("Special functions: {}", supported.join(", "));
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn category_cell(category: UnitCategory) -> Cell {
    let color = match category {
        UnitCategory::Iahc => Color::Blue,
        UnitCategory::Phc => Color::Magenta,
        UnitCategory::ShockAbsorber => Color::DarkYellow,
    };
    Cell::new(category.display_name()).fg(color)
}

fn support_cell(supported: bool) -> Cell {
    if supported {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn issue_code_cell(kind: IssueKind) -> Cell {
    let color = match kind {
        IssueKind::NoUnitSelected => Color::Red,
        IssueKind::ZeroUnitParameter | IssueKind::ZeroPayloadParameter => Color::Yellow,
    };
    Cell::new(kind.code()).fg(color)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
