use nodeplot::cli::parse_cli;
use nodeplot::group::{flat_pairs, pair_groups_with_colors, parse_groups, split_entry};
use nodeplot::plot::{parse_color, plot_table, Figure};
use nodeplot::{entry_csv_path, SeriesTable};

fn main() {
    let (base, nodes, multiple, group, colors, outdir) = parse_cli();
    println!(
        "read logs from {} and plot to {}",
        base.display(),
        outdir.display()
    );
    if let Some(expression) = group {
        let groups = parse_groups(&expression);
        let paired = pair_groups_with_colors(groups, colors.as_deref());
        for (i, (group, color)) in paired.iter().enumerate() {
            let color = parse_color(color);
            let mut figure = Figure::new(outdir.join(format!("group_{}.svg", i + 1)));
            for entry in group {
                let (node, object_entry) = split_entry(entry);
                let file_path = entry_csv_path(&base, node, object_entry);
                if let Some(table) = SeriesTable::from_csv(&file_path) {
                    plot_table(&table, node, object_entry, &mut figure, multiple, color, &outdir)
                        .unwrap();
                }
            }
            if !multiple {
                figure.flush().unwrap();
            }
        }
    } else {
        let mut figure = Figure::new(outdir.join("combined.svg"));
        for (node, object_entry) in flat_pairs(&nodes) {
            let file_path = entry_csv_path(&base, node, object_entry);
            if let Some(table) = SeriesTable::from_csv(&file_path) {
                plot_table(
                    &table,
                    node,
                    object_entry,
                    &mut figure,
                    multiple,
                    parse_color("blue"),
                    &outdir,
                )
                .unwrap();
            }
        }
        if !multiple {
            figure.flush().unwrap();
        }
    }
}
