//! CSV parsing of the unit table.

use std::path::Path;

use hcu_model::{Unit, UnitSpecs};

use crate::error::{CatalogError, Result};

pub const COL_UNIT_TYPE: &str = "Unit Type";
pub const COL_UNIT_ID: &str = "Unit ID";
pub const COL_STROKE: &str = "stroke [m]";
pub const COL_OVERALL_SIZE: &str = "overall size [L/W/H, m]";
pub const COL_DESIGN_PRESSURE: &str = "design pressure [bar]";
pub const COL_DESIGN_WATER_DEPTH: &str = "design water depth [m]";
pub const COL_GAS_VOLUME: &str = "gas volume [m3 @ atm]";
pub const COL_WEIGHT: &str = "weight [kg]";
pub const COL_SWL: &str = "SWL [Te]";

const REQUIRED_COLUMNS: [&str; 9] = [
    COL_UNIT_TYPE,
    COL_UNIT_ID,
    COL_STROKE,
    COL_OVERALL_SIZE,
    COL_DESIGN_PRESSURE,
    COL_DESIGN_WATER_DEPTH,
    COL_GAS_VOLUME,
    COL_WEIGHT,
    COL_SWL,
];

/// Parse unit rows from CSV bytes. `path` is only used for diagnostics.
///
/// Rows whose `Unit ID` cell is blank are skipped. Units come back in file
/// order; sorting is the catalog's concern.
pub fn parse_units_csv(path: &Path, bytes: &[u8]) -> Result<Vec<Unit>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CatalogError::csv(path, e))?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CatalogError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut units = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| CatalogError::csv(path, e))?;
        let row = record
            .position()
            .map_or(idx + 2, |pos| pos.line() as usize);

        let get = |name: &str| -> String {
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| record.get(i))
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };
        let number = |column: &'static str| -> Result<f64> {
            let raw = get(column);
            raw.parse::<f64>().map_err(|_| CatalogError::InvalidValue {
                path: path.to_path_buf(),
                row,
                column,
                value: raw.clone(),
            })
        };

        // Text cells end up verbatim in the exported INI file.
        let text = |column: &'static str| -> Result<String> {
            let raw = get(column);
            if raw.chars().any(char::is_control) {
                return Err(CatalogError::InvalidValue {
                    path: path.to_path_buf(),
                    row,
                    column,
                    value: raw.escape_debug().to_string(),
                });
            }
            Ok(raw)
        };

        let unit_id = text(COL_UNIT_ID)?;
        if unit_id.is_empty() {
            continue;
        }
        let specs = UnitSpecs {
            stroke: number(COL_STROKE)?,
            overall_size: text(COL_OVERALL_SIZE)?,
            design_pressure: number(COL_DESIGN_PRESSURE)?,
            design_water_depth: number(COL_DESIGN_WATER_DEPTH)?,
            gas_volume: number(COL_GAS_VOLUME)?,
            weight: number(COL_WEIGHT)?,
            swl: number(COL_SWL)?,
        };
        units.push(Unit::new(text(COL_UNIT_TYPE)?, unit_id, specs));
    }
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcu_model::UnitCategory;

    const HEADER: &str = "Unit Type,Unit ID,stroke [m],\"overall size [L/W/H, m]\",design pressure [bar],design water depth [m],gas volume [m3 @ atm],weight [kg],SWL [Te]\n";

    #[test]
    fn parses_rows_and_strips_bom() {
        let csv = format!(
            "\u{feff}{HEADER}IAHC,IAHC-001,3.0,\"6.8/1.6/1.6\",345,3000,12.5,14500,150\n,,,,,,,,\n"
        );
        let units = parse_units_csv(Path::new("units.csv"), csv.as_bytes()).expect("parse");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].unit_id, "IAHC-001");
        assert_eq!(units[0].category, UnitCategory::Iahc);
        assert_eq!(units[0].specs.overall_size, "6.8/1.6/1.6");
        assert_eq!(units[0].specs.swl, 150.0);
    }

    #[test]
    fn reports_invalid_number_with_row() {
        let csv = format!("{HEADER}IAHC,IAHC-001,three,x,345,3000,12.5,14500,150\n");
        let err = parse_units_csv(Path::new("units.csv"), csv.as_bytes()).unwrap_err();
        match err {
            CatalogError::InvalidValue { row, column, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, COL_STROKE);
                assert_eq!(value, "three");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn line_breaks_in_text_cells_are_rejected() {
        let csv = format!(
            "{HEADER}\"IAHC\n[Results]\ncustomized = True\",IAHC-001,3.0,x,345,3000,12.5,14500,150\n"
        );
        let err = parse_units_csv(Path::new("units.csv"), csv.as_bytes()).unwrap_err();
        assert!(err.is_data_load());
        match err {
            CatalogError::InvalidValue { row, column, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, COL_UNIT_TYPE);
                assert_eq!(value, "IAHC\\n[Results]\\ncustomized = True");
            }
            other => panic!("unexpected error: {other}"),
        }

        let csv = format!("{HEADER}IAHC,\"IAHC-\r001\",3.0,x,345,3000,12.5,14500,150\n");
        let err = parse_units_csv(Path::new("units.csv"), csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { column: COL_UNIT_ID, .. }));
    }

    #[test]
    fn missing_column_is_rejected() {
        let err = parse_units_csv(Path::new("units.csv"), b"Unit Type,Unit ID\nIAHC,IAHC-001\n")
            .unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn { column: COL_STROKE, .. }));
    }
}
