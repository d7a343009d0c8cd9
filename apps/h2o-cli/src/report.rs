//! Plain-text summary of a scenario for the terminal.

use crate::display::Axes;
use h2o_core::{pa, to_kilopascal};
use h2o_curves::{Annotation, Scenario, SeriesRole};

/// Tabulate each series with at most `max_rows` rows (first and last sample
/// always included), followed by the annotations and any failures.
pub fn format_scenario(scenario: &Scenario, max_rows: usize) -> String {
    let axes = Axes::for_quantity(scenario.quantity);
    let mut out = format!("Scenario: {}\n", scenario.name);

    for series in &scenario.series {
        let role = match series.role {
            SeriesRole::Main => "",
            SeriesRole::Inset => " [inset]",
        };
        out.push_str(&format!(
            "\n{}{} ({} samples)\n",
            series.label,
            role,
            series.temperatures.len()
        ));
        out.push_str(&format!(
            "  {:>10}  {:>14}\n",
            format!("T [{}]", axes.x_unit),
            axes.y_unit
        ));
        for i in row_indices(series.temperatures.len(), max_rows) {
            out.push_str(&format!(
                "  {:>10.3}  {:>14.6}\n",
                axes.x(series.temperatures[i]),
                axes.y(series.values[i])
            ));
        }
    }

    if !scenario.annotations.is_empty() {
        out.push_str("\nReference:\n");
    }
    for annotation in &scenario.annotations {
        match annotation {
            Annotation::Temperature { label, temperature } => {
                out.push_str(&format!("  {label}: {temperature} K\n"));
            }
            Annotation::Pressure { label, pressure } => {
                out.push_str(&format!(
                    "  {label}: {:.3} kPa\n",
                    to_kilopascal(pa(*pressure))
                ));
            }
            Annotation::Connector { from, to } => {
                out.push_str(&format!(
                    "  Connector: ({:.2} {}, {:.6} {}) -> ({:.2} {}, {:.6} {})\n",
                    axes.x(from.0),
                    axes.x_unit,
                    axes.y(from.1),
                    axes.y_unit,
                    axes.x(to.0),
                    axes.x_unit,
                    axes.y(to.1),
                    axes.y_unit
                ));
            }
        }
    }

    if !scenario.failures.is_empty() {
        out.push_str("\nFailed curves:\n");
        for failure in &scenario.failures {
            out.push_str(&format!("  ✗ {failure}\n"));
        }
    }
    out
}

fn row_indices(len: usize, max_rows: usize) -> Vec<usize> {
    if len == 0 || max_rows == 0 {
        return Vec::new();
    }
    let step = len.div_ceil(max_rows).max(1);
    let mut rows: Vec<usize> = (0..len).step_by(step).collect();
    if rows.last() != Some(&(len - 1)) {
        rows.push(len - 1);
    }
    rows
}
