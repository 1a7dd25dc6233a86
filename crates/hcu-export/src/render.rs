//! Rendering of a configuration into the INI artifact.

use std::borrow::Cow;
use std::fmt::Write as _;

use chrono::{Local, NaiveDateTime};
use tracing::info;

use hcu_core::ConfigurationState;
use hcu_model::{ParameterSide, ResultCategory, ResultMode, SpecialFunctionKind};
use hcu_validate::validate;

use crate::error::{ExportError, Result};
use crate::options::ExportOptions;

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A rendered settings file, ready to download or write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ConfigArtifact {
    pub const CONTENT_TYPE: &'static str = "text/plain";

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Render the configuration stamped with the current local time.
///
/// Fails with [`ExportError::Validation`] when the configuration does not
/// validate.
pub fn serialize(state: &ConfigurationState, options: &ExportOptions) -> Result<ConfigArtifact> {
    serialize_at(state, options, Local::now().naive_local())
}

/// Render the configuration with a fixed timestamp.
pub fn serialize_at(
    state: &ConfigurationState,
    options: &ExportOptions,
    generated_at: NaiveDateTime,
) -> Result<ConfigArtifact> {
    let validation = validate(state);
    let unit = match state.unit() {
        Some(unit) if validation.ok => unit,
        _ => return Err(ExportError::Validation(validation)),
    };

    let mut doc = IniDocument::default();
    doc.comment("External function Configuration File");
    doc.comment(&format!("Generated by {}", options.tool_name));
    doc.comment(&format!("Version: {}", options.version));
    doc.comment(&format!(
        "Datetime: {}",
        generated_at.format(DATETIME_FORMAT)
    ));
    doc.comment(&format!("Contact {} if any questions.", options.contact));
    doc.comment("");

    doc.section("Unit")
        .entry("category", unit.category.as_str())
        .entry("unit_type", &unit.type_name)
        .entry("unit_id", &unit.unit_id);

    let flags = doc.section("Special_Functions");
    for kind in SpecialFunctionKind::TOGGLEABLE {
        flags.entry(kind.as_str(), py_bool(state.is_function_active(kind)));
    }

    let functions = state.functions();
    let params = doc.section("Function_Parameters");
    if state.is_function_active(SpecialFunctionKind::RodOrientation) {
        params.entry("rod_orientation", functions.rod_orientation().as_str());
    }
    if state.is_function_active(SpecialFunctionKind::RodLock) {
        let rod_lock = functions.rod_lock();
        params
            .entry("rod_lock_depth", py_float(rod_lock.depth))
            .entry("rod_lock_operation", rod_lock.operation.as_str())
            .entry("rod_lock_mode", rod_lock.mode.as_str())
            .entry("lock_hold_time", py_float(rod_lock.hold_time))
            .entry("lock_speed", py_float(rod_lock.speed));
    }
    if state.is_function_active(SpecialFunctionKind::QuickLifting) {
        let quick = functions.quick_lifting();
        params
            .entry("quick_start_time", py_float(quick.start_time))
            .entry("quick_acceleration_limit", py_float(quick.acceleration_limit));
    }
    if state.is_function_active(SpecialFunctionKind::ConstantTension) {
        let tension = functions.constant_tension();
        params
            .entry("tension_start_time", py_float(tension.start_time))
            .entry("tension_tolerance", py_float(tension.tolerance));
    }
    if state.is_function_active(SpecialFunctionKind::ActiveHeaveCompensation) {
        let ahc = functions.active_heave_compensation();
        params
            .entry("heave_start_time", py_float(ahc.start_time))
            .entry("max_stroke_speed", py_float(ahc.max_stroke_speed))
            .entry("motion_reference", ahc.motion_reference.as_str());
    }

    doc.section("Safety_Parameters").entry(
        "max_force_limit",
        py_float(state.safety().max_force_limit),
    );

    for side in ParameterSide::ALL {
        let section = doc.section(side.section());
        for (id, slot) in state.parameters().iter_side(side) {
            section.entry(&id.key(), py_float(slot.value()));
        }
    }

    let results = state.results();
    let customized = results.mode == ResultMode::Customized && !results.is_empty();
    let section = doc.section("Results");
    section.entry("customized", py_bool(customized));
    for category in ResultCategory::ALL {
        let selected = if customized {
            results.ordered(category)
        } else {
            Vec::new()
        };
        let value = if selected.is_empty() {
            "None".to_string()
        } else {
            selected.join(", ")
        };
        section.entry(category.export_key(), value);
    }

    let artifact = ConfigArtifact {
        filename: options.filename(&unit.unit_id),
        bytes: doc.render().into_bytes(),
    };
    info!(
        unit_id = %unit.unit_id,
        filename = %artifact.filename,
        bytes = artifact.bytes.len(),
        "configuration serialized"
    );
    Ok(artifact)
}

fn py_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Floats keep a fractional part (`5.0`, not `5`), as the simulation
/// package's reader expects. Magnitudes below 1e-4 or from 1e16 up use a
/// signed exponent of at least two digits (`1e+16`, `1.5e-05`).
fn py_float(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return format!("{value:?}");
    }
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value:?}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value:?}");
    };
    if (-4..16).contains(&exponent) {
        return format!("{value:?}");
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

#[derive(Debug, Default)]
struct IniDocument {
    header: Vec<String>,
    sections: Vec<IniSection>,
}

#[derive(Debug)]
struct IniSection {
    name: String,
    entries: Vec<(String, String)>,
}

impl IniSection {
    fn entry(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.entries.push((key.to_string(), value.into()));
        self
    }
}

impl IniDocument {
    fn comment(&mut self, text: &str) {
        if text.is_empty() {
            self.header.push("#".to_string());
        } else {
            self.header.push(format!("# {text}"));
        }
    }

    fn section(&mut self, name: &str) -> &mut IniSection {
        self.sections.push(IniSection {
            name: name.to_string(),
            entries: Vec::new(),
        });
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.header {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        for section in &self.sections {
            let _ = writeln!(out, "[{}]", section.name);
            for (key, value) in &section.entries {
                let _ = writeln!(out, "{key} = {value}");
            }
            out.push('\n');
        }
        out
    }
}
