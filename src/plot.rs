use super::{min_and_max, SeriesTable};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// One line of a figure: label for the legend, color, (timestamp, value) points.
#[derive(Debug, Clone)]
pub struct SeriesLine {
    pub label: String,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

/// A figure owns its output svg path and the series accumulated so far.
/// The orchestrator creates it, the renderer populates it, flush draws
/// everything and writes the file.
#[derive(Debug)]
pub struct Figure {
    path: PathBuf,
    series: Vec<SeriesLine>,
}

impl Figure {
    pub fn new(path: PathBuf) -> Figure {
        Figure {
            path,
            series: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn series(&self) -> &[SeriesLine] {
        &self.series
    }

    pub fn add_series(&mut self, label: String, color: RGBColor, points: Vec<(f64, f64)>) {
        self.series.push(SeriesLine {
            label,
            color,
            points,
        });
    }

    /// plots the accumulated series to svg
    pub fn flush(&self) -> Result<(), Box<dyn std::error::Error>> {
        let xs: Vec<f64> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.0))
            .collect();
        let ys: Vec<f64> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.1))
            .collect();
        if xs.is_empty() {
            println!("nothing to plot for {}", self.path.display());
            return Ok(());
        }
        let (xmin, xmax) = padded_range(&xs);
        let (ymin, ymax) = padded_range(&ys);
        let root = SVGBackend::new(&self.path, (1600, 800)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(100)
            .build_cartesian_2d(xmin..xmax, ymin..ymax)?;
        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(RGBColor(150, 150, 150).stroke_width(1))
            .set_all_tick_mark_size(2)
            .label_style(("sans-serif", 24))
            .x_desc("Timestamp [us]")
            .y_desc("Value")
            .x_label_formatter(&|x: &f64| format!("{:.0}", x))
            .draw()?;
        for s in self.series.iter() {
            let color = s.color;
            chart
                .draw_series(LineSeries::new(
                    s.points.iter().cloned(),
                    color.stroke_width(2),
                ))?
                .label(s.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            chart.draw_series(
                s.points.iter().map(|p| Circle::new(*p, 4, color.filled())),
            )?;
        }
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 24))
            .draw()?;
        println!("saved figure {}", self.path.display());
        Ok(())
    }
}

/// Renders one loaded table.
/// Two columns: one labeled line, on the shared figure or, with separate set,
/// on a fresh per-entry figure flushed right away.
/// More than two columns: an independent figure with one panel per value
/// column, written right away.
pub fn plot_table(
    table: &SeriesTable,
    node: &str,
    object_entry: &str,
    figure: &mut Figure,
    separate: bool,
    color: RGBColor,
    outdir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if table.is_empty() {
        println!("no data rows for {} {}, skipping", node, object_entry);
        return Ok(());
    }
    if table.n_value_columns() == 1 {
        let label = format!("{} {}", node, object_entry);
        let points: Vec<(f64, f64)> = table
            .time
            .iter()
            .cloned()
            .zip(table.values[0].iter().cloned())
            .collect();
        if separate {
            let mut own = Figure::new(outdir.join(format!("{}_{}.svg", node, object_entry)));
            own.add_series(label, color, points);
            own.flush()?;
        } else {
            figure.add_series(label, color, points);
        }
    } else {
        plot_panels(table, node, object_entry, color, outdir)?;
    }
    Ok(())
}

/// one panel per value column, top to bottom, shared x axis range
fn plot_panels(
    table: &SeriesTable,
    node: &str,
    object_entry: &str,
    color: RGBColor,
    outdir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let n_panels = table.n_value_columns();
    let fout = outdir.join(format!("{}_{}_panels.svg", node, object_entry));
    let root = SVGBackend::new(&fout, (1600, 500 * n_panels as u32)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((n_panels, 1));
    let (xmin, xmax) = padded_range(&table.time);
    for (panel, (column, values)) in panels
        .iter()
        .zip(table.columns[1..].iter().zip(table.values.iter()))
    {
        let (ymin, ymax) = padded_range(values);
        let mut chart = ChartBuilder::on(panel)
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(100)
            .build_cartesian_2d(xmin..xmax, ymin..ymax)?;
        chart
            .configure_mesh()
            .label_style(("sans-serif", 20))
            .x_desc("Timestamp [us]")
            .y_desc(format!("{} Value", column))
            .x_label_formatter(&|x: &f64| format!("{:.0}", x))
            .draw()?;
        chart
            .draw_series(LineSeries::new(
                table.time.iter().cloned().zip(values.iter().cloned()),
                color.stroke_width(2),
            ))?
            .label(column.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        chart.draw_series(
            table
                .time
                .iter()
                .zip(values.iter())
                .map(|(t, v)| Circle::new((*t, *v), 4, color.filled())),
        )?;
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 20))
            .draw()?;
    }
    println!("saved panel figure {}", fout.display());
    Ok(())
}

fn padded_range(values: &[f64]) -> (f64, f64) {
    let (min, max) = min_and_max(values);
    let span = max - min;
    if span == 0. {
        (min - 1., max + 1.)
    } else {
        (min - span / 20., max + span / 20.)
    }
}

/// Maps a color name or '#rrggbb' value to an RGB color.
/// Unknown names fall back to blue, the default plotting color.
pub fn parse_color(name: &str) -> RGBColor {
    let name = name.trim();
    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() == 6 {
            if let Ok(v) = u32::from_str_radix(hex, 16) {
                return RGBColor((v >> 16) as u8, (v >> 8) as u8, v as u8);
            }
        }
    }
    match name.to_lowercase().as_str() {
        "blue" => BLUE,
        "red" => RED,
        "green" => GREEN,
        "black" => BLACK,
        "white" => WHITE,
        "cyan" => CYAN,
        "magenta" => MAGENTA,
        "yellow" => YELLOW,
        "orange" => RGBColor(255, 165, 0),
        "purple" => RGBColor(128, 0, 128),
        "gray" | "grey" => RGBColor(128, 128, 128),
        _ => {
            println!("unknown color '{}', using blue", name);
            BLUE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmpsvg(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("nodeplot_plot_{}_{}", std::process::id(), name))
    }

    fn two_column_table(rows: usize) -> SeriesTable {
        let mut table = SeriesTable::new(vec!["timestamp".to_string(), "speed".to_string()]);
        for i in 0..rows {
            table.time.push(i as f64 * 1000.);
            table.values[0].push(i as f64 * 0.5);
        }
        table
    }

    fn four_column_table() -> SeriesTable {
        let mut table = SeriesTable::new(vec![
            "timestamp".to_string(),
            "speed".to_string(),
            "torque".to_string(),
            "temperature".to_string(),
        ]);
        for i in 0..5 {
            table.time.push(i as f64 * 1000.);
            table.values[0].push(i as f64);
            table.values[1].push(10. + i as f64);
            table.values[2].push(40. - i as f64);
        }
        table
    }

    #[test]
    fn named_and_hex_colors() {
        assert_eq!(parse_color("red"), RED);
        assert_eq!(parse_color("Blue"), BLUE);
        assert_eq!(parse_color("#102030"), RGBColor(16, 32, 48));
        assert_eq!(parse_color("not_a_color"), BLUE);
    }

    #[test]
    fn two_column_table_adds_one_labeled_line() {
        let table = two_column_table(7);
        let mut figure = Figure::new(tmpsvg("unused_shared.svg"));
        plot_table(&table, "node1", "object1", &mut figure, false, RED, &std::env::temp_dir())
            .unwrap();
        assert_eq!(figure.series().len(), 1);
        assert_eq!(figure.series()[0].label, "node1 object1");
        assert_eq!(figure.series()[0].points.len(), 7);
    }

    #[test]
    fn flush_writes_svg_with_legend_labels() {
        let fout = tmpsvg("flush.svg");
        let mut figure = Figure::new(fout.clone());
        let table = two_column_table(4);
        plot_table(&table, "n1", "e1", &mut figure, false, BLUE, &std::env::temp_dir()).unwrap();
        figure.flush().unwrap();
        let svg = std::fs::read_to_string(&fout).unwrap();
        assert!(svg.contains("n1 e1"));
        assert!(svg.contains("Timestamp [us]"));
        std::fs::remove_file(fout).unwrap();
    }

    #[test]
    fn flush_without_series_writes_nothing() {
        let fout = tmpsvg("empty.svg");
        let figure = Figure::new(fout.clone());
        figure.flush().unwrap();
        assert!(!fout.exists());
    }

    fn tmpdir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "nodeplot_plot_{}_{}",
            std::process::id(),
            name
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn separate_mode_leaves_shared_figure_untouched() {
        let outdir = tmpdir("separate");
        let table = two_column_table(3);
        let mut shared = Figure::new(tmpsvg("shared.svg"));
        plot_table(&table, "nsep", "esep", &mut shared, true, GREEN, &outdir).unwrap();
        assert!(shared.series().is_empty());
        assert!(outdir.join("nsep_esep.svg").exists());
        std::fs::remove_dir_all(outdir).unwrap();
    }

    #[test]
    fn multi_column_table_writes_panel_figure() {
        let outdir = tmpdir("panels");
        let table = four_column_table();
        let mut shared = Figure::new(tmpsvg("shared_panels.svg"));
        plot_table(&table, "npan", "epan", &mut shared, false, BLUE, &outdir).unwrap();
        assert!(shared.series().is_empty());
        let svg = std::fs::read_to_string(outdir.join("npan_epan_panels.svg")).unwrap();
        assert!(svg.contains("speed Value"));
        assert!(svg.contains("torque Value"));
        assert!(svg.contains("temperature Value"));
        std::fs::remove_dir_all(outdir).unwrap();
    }
}
