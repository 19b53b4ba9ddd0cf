use std::fs::File;

use anyhow::Result;
use pretty_assertions::assert_eq;
use redwood_text::{RedwoodTextError, parse, read_from, render, write_to};
use redwood_tree::{Color, RedwoodTreeError, Tree};

const SAMPLE: &str = "\
10 black
    5 red
        null
        7 black
            null
            null
    15 black
        null
        null
";

fn shape(tree: &Tree<i32>) -> Vec<(usize, Option<(i32, Color)>)> {
    tree.outline()
        .map(|item| {
            (
                item.depth,
                item.node.map(|node| (*node.value(), node.color())),
            )
        })
        .collect()
}

#[test]
fn sample_document_round_trips_exactly() -> Result<()> {
    let tree: Tree<i32> = parse(SAMPLE)?;

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 7, 10, 15]);
    assert_eq!(render(&tree)?, SAMPLE);

    // The sample is shaped by hand and its black heights differ
    assert!(matches!(
        tree.validate(),
        Err(RedwoodTreeError::BlackHeight { .. })
    ));

    Ok(())
}

#[test]
fn generated_trees_round_trip_through_files() -> Result<()> {
    let tree: Tree<i32> = (0..200).map(|i| (i * 37) % 211 - 100).collect();
    let directory = tempfile::tempdir()?;
    let path = directory.path().join("tree.txt");

    write_to(&tree, File::create(&path)?)?;
    let loaded: Tree<i32> = read_from(File::open(&path)?)?;

    assert_eq!(loaded.len(), tree.len());
    assert_eq!(shape(&loaded), shape(&tree));
    assert_eq!(loaded.validate()?, tree.validate()?);

    Ok(())
}

#[test]
fn indentation_is_not_enforced() -> Result<()> {
    let flat = SAMPLE
        .lines()
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join("\n");
    let tree: Tree<i32> = parse(&flat)?;
    assert_eq!(render(&tree)?, SAMPLE);

    Ok(())
}

#[test]
fn out_of_order_documents_are_rejected() -> Result<()> {
    let document = "\
10 black
    50 red
        null
        null
    null
";
    let error = parse::<i32>(document).unwrap_err();
    assert!(matches!(
        error,
        RedwoodTextError::Tree(RedwoodTreeError::Unordered(_))
    ));

    Ok(())
}

#[test]
fn truncated_documents_are_rejected() -> Result<()> {
    let truncated: String = SAMPLE.lines().take(6).map(|line| format!("{line}\n")).collect();
    assert!(matches!(
        parse::<i32>(&truncated),
        Err(RedwoodTextError::UnexpectedEnd)
    ));

    let extended = format!("{SAMPLE}null\n");
    assert!(matches!(
        parse::<i32>(&extended),
        Err(RedwoodTextError::TrailingInput { line: 10 })
    ));

    Ok(())
}

#[test]
fn any_ordered_value_type_can_be_stored() -> Result<()> {
    let tree: Tree<String> = ["pear", "apple", "fig"]
        .into_iter()
        .map(String::from)
        .collect();
    let text = render(&tree)?;
    let loaded: Tree<String> = parse(&text)?;
    assert_eq!(loaded, tree);

    Ok(())
}
