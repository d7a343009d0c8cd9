//! Figure rendering with plotters.

use crate::display::{Axes, padded_range};
use crate::error::{CliError, CliResult};
use h2o_core::{pa, to_kilopascal};
use h2o_curves::{Annotation, Quantity, Scenario, SeriesRole};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

const SIZE: (u32, u32) = (800, 560);

type DrawResult = Result<(), Box<dyn std::error::Error>>;

/// Render `scenario` to `path`; the extension picks SVG or PNG.
pub fn render(scenario: &Scenario, path: &Path) -> CliResult<()> {
    if scenario.series.is_empty() {
        return Err(CliError::Empty);
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let result = match ext.as_str() {
        "svg" => draw(SVGBackend::new(path, SIZE).into_drawing_area(), scenario),
        "png" => draw(BitMapBackend::new(path, SIZE).into_drawing_area(), scenario),
        other => return Err(CliError::UnsupportedFormat(other.to_string())),
    };
    result.map_err(|e| CliError::Render(e.to_string()))
}

fn draw<DB>(root: DrawingArea<DB, Shift>, scenario: &Scenario) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    match scenario.quantity {
        Quantity::LatentHeat => draw_latent_heat(&root, scenario)?,
        Quantity::SpecificVolume => draw_volume(&root, scenario)?,
    }
    root.present()?;
    Ok(())
}

fn ranges<'a>(
    curves: impl Iterator<Item = &'a Vec<(f64, f64)>> + Clone,
) -> Result<(Range<f64>, Range<f64>), Box<dyn std::error::Error>> {
    let x = padded_range(curves.clone().flatten().map(|p| p.0), 0.03);
    let y = padded_range(curves.flatten().map(|p| p.1), 0.05);
    match (x, y) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err("no finite data to draw".into()),
    }
}

fn draw_latent_heat<DB>(root: &DrawingArea<DB, Shift>, scenario: &Scenario) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let axes = Axes::for_quantity(scenario.quantity);
    let curves: Vec<(&str, Vec<(f64, f64)>)> = scenario
        .series
        .iter()
        .map(|s| (s.label.as_str(), axes.points(s)))
        .collect();
    let (x_range, y_range) = ranges(curves.iter().map(|c| &c.1))?;
    let y_range = 0.0..y_range.end;

    let mut chart = ChartBuilder::on(root)
        .caption("Enthalpies of transformation", ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range.clone())?;
    chart
        .configure_mesh()
        .x_desc(axes.x_label)
        .y_desc(axes.y_label)
        .draw()?;

    for (i, (label, points)) in curves.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    for annotation in &scenario.annotations {
        if let Annotation::Temperature { label, temperature } = annotation {
            let x = axes.x(*temperature);
            chart.draw_series(LineSeries::new(
                vec![(x, y_range.start), (x, y_range.end)],
                BLACK.mix(0.4),
            ))?;
            chart.draw_series(std::iter::once(Text::new(
                label.clone(),
                (x, 0.5 * y_range.end),
                ("sans-serif", 14).into_font(),
            )))?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

fn draw_volume<DB>(root: &DrawingArea<DB, Shift>, scenario: &Scenario) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let axes = Axes::for_quantity(scenario.quantity);
    let main: Vec<(&str, Vec<(f64, f64)>)> = scenario
        .series
        .iter()
        .filter(|s| s.role == SeriesRole::Main)
        .map(|s| (s.label.as_str(), axes.points(s)))
        .collect();
    let (x_range, y_range) = ranges(main.iter().map(|c| &c.1))?;

    let mut chart = ChartBuilder::on(root)
        .caption("Specific volume of water and ice", ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;
    chart
        .configure_mesh()
        .x_desc(axes.x_label)
        .y_desc(axes.y_label)
        .y_label_formatter(&|v: &f64| format!("{v:.3}"))
        .draw()?;

    for (i, (label, points)) in main.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    for annotation in &scenario.annotations {
        match annotation {
            Annotation::Connector { from, to } => {
                let ends = [*from, *to].map(|(t, v)| (axes.x(t), axes.y(v)));
                chart.draw_series(LineSeries::new(ends, BLACK.mix(0.5).stroke_width(2)))?;
            }
            Annotation::Pressure { pressure, .. } => {
                let at = (
                    x_range.start + 0.65 * (x_range.end - x_range.start),
                    y_range.start + 0.12 * (y_range.end - y_range.start),
                );
                chart.draw_series(std::iter::once(Text::new(
                    format!("{:.3} kPa", to_kilopascal(pa(*pressure))),
                    at,
                    ("sans-serif", 14).into_font(),
                )))?;
            }
            Annotation::Temperature { .. } => {}
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    let inset: Vec<Vec<(f64, f64)>> = scenario
        .series
        .iter()
        .filter(|s| s.role == SeriesRole::Inset)
        .map(|s| axes.points(s))
        .collect();
    if !inset.is_empty() {
        draw_inset(root, &inset)?;
    }
    Ok(())
}

/// Close-up panel in the upper middle of the figure.
fn draw_inset<DB>(root: &DrawingArea<DB, Shift>, curves: &[Vec<(f64, f64)>]) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (w, h) = root.dim_in_pixel();
    let area = root.clone().shrink(
        ((w as f64 * 0.42) as i32, (h as f64 * 0.12) as i32),
        ((w as f64 * 0.4) as i32, (h as f64 * 0.38) as i32),
    );
    area.fill(&WHITE)?;

    let (x_range, y_range) = ranges(curves.iter())?;
    let mut chart = ChartBuilder::on(&area)
        .margin(5)
        .x_label_area_size(25)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;
    chart
        .configure_mesh()
        .y_label_formatter(&|v: &f64| format!("{v:.5}"))
        .draw()?;
    for points in curves {
        chart.draw_series(LineSeries::new(points.iter().copied(), &BLACK))?;
    }
    Ok(())
}
