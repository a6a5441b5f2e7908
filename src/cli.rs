use super::VERSION;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that select which object entries to plot and how.
pub fn parse_cli() -> (
    PathBuf,
    Vec<String>,
    bool,
    Option<String>,
    Option<String>,
    PathBuf,
) {
    let arg_path = Arg::with_name("path")
        .help("path to the logging directory")
        .required(true)
        .index(1);
    let arg_nodes = Arg::with_name("nodes")
        .help("list of node and object-entry names (e.g., node1 object1 node2 object2)")
        .multiple(true)
        .index(2);
    let arg_multiple = Arg::with_name("multiple")
        .help("create separate plots for each object entry")
        .short("m")
        .long("multiple")
        .takes_value(false);
    let arg_group = Arg::with_name("group")
        .help("expression of node:objectEntry names grouped by '&' and separated by '|'")
        .long("group")
        .takes_value(true);
    let arg_colors = Arg::with_name("colors")
        .help("comma-separated list of colors for each group of plots")
        .long("colors")
        .takes_value(true);
    let arg_outdir = Arg::with_name("outdir")
        .help("directory for the output svg figures")
        .short("o")
        .long("outdir")
        .takes_value(true)
        .default_value(".");
    let cli_args = App::new("nodeplot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot object-entry data from node log files")
        .arg(arg_path)
        .arg(arg_nodes)
        .arg(arg_multiple)
        .arg(arg_group)
        .arg(arg_colors)
        .arg(arg_outdir)
        .get_matches();
    let path = PathBuf::from(cli_args.value_of("path").unwrap_or_default());
    let nodes: Vec<String> = cli_args
        .values_of("nodes")
        .map(|v| v.map(String::from).collect())
        .unwrap_or_default();
    let multiple = cli_args.is_present("multiple");
    let group = cli_args.value_of("group").map(String::from);
    let colors = cli_args.value_of("colors").map(String::from);
    let outdir = PathBuf::from(cli_args.value_of("outdir").unwrap_or_default());
    return (path, nodes, multiple, group, colors, outdir);
}
