/// Parse the --group expression:
/// '|' separates groups to be plotted on different figures,
/// '&' separates the entries to be plotted together.
pub fn parse_groups(expression: &str) -> Vec<Vec<String>> {
    expression
        .split('|')
        .map(|g| g.split('&').map(String::from).collect())
        .collect()
}

/// Splits an entry token into its node and object-entry names.
/// A token without ':' is an unrecoverable input error.
pub fn split_entry(entry: &str) -> (&str, &str) {
    let mut parts = entry.splitn(2, ':');
    let node = parts.next().unwrap();
    match parts.next() {
        Some(object_entry) => (node, object_entry),
        None => panic!(
            "entry '{}' is missing the ':' separator between node and object entry",
            entry
        ),
    }
}

/// Pairs each group with its color, zipping positionally:
/// groups beyond the end of the color list are not rendered.
/// Without a color list every group gets the default blue.
pub fn pair_groups_with_colors(
    groups: Vec<Vec<String>>,
    colors: Option<&str>,
) -> Vec<(Vec<String>, String)> {
    let group_colors: Vec<String> = match colors {
        Some(c) => c.split(',').map(String::from).collect(),
        None => vec![String::from("blue"); groups.len()],
    };
    groups.into_iter().zip(group_colors.into_iter()).collect()
}

/// Takes the flat node list two at a time as (node, object entry) pairs.
/// An odd-length list is an unrecoverable input error.
pub fn flat_pairs(nodes: &[String]) -> Vec<(&str, &str)> {
    assert!(
        nodes.len() % 2 == 0,
        "expected an even number of node and object-entry names, got {}",
        nodes.len()
    );
    nodes
        .chunks(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect()
}
