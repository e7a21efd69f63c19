//! Full scan-and-repair runs against a single root

use crate::common::{TestTree, JUNE_1995, JUNE_2010};
use crate::datefix;
use anyhow::Result;

#[test]
fn test_repairs_old_dlls_only() -> Result<()> {
    let tree = TestTree::new()?;
    let old = tree.file("a.dll", JUNE_1995)?;
    tree.file("sub/b.dll", JUNE_2010)?;
    tree.file("sub/c.txt", JUNE_1995)?;

    let root = tree.root().to_str().unwrap();
    let result = datefix!(tree.root(), root).assert_success()?;

    assert!(result.contains_stdout("Finding invalid modified date files in"));
    assert!(result.contains_stdout("1 invalid modified date file(s) found."));
    assert!(result.contains_stdout("Completed."));
    assert_eq!(result.progress_paths(), vec![old.display().to_string()]);

    assert_eq!(tree.modified_year("a.dll")?, 2000);
    assert_eq!(tree.modified_year("sub/b.dll")?, 2010);
    assert_eq!(tree.modified_year("sub/c.txt")?, 1995);

    Ok(())
}

#[test]
fn test_second_run_is_clean() -> Result<()> {
    let tree = TestTree::new()?;
    tree.file("x.dll", JUNE_1995)?;
    tree.file("nested/deeper/y.DLL", JUNE_1995)?;

    let root = tree.root().to_str().unwrap();
    let first = datefix!(tree.root(), root).assert_success()?;
    assert!(first.contains_stdout("2 invalid modified date file(s) found."));
    assert!(first.contains_stdout("1 / 2 | "));
    assert!(first.contains_stdout("2 / 2 | "));

    let second = datefix!(tree.root(), root).assert_success()?;
    assert!(second.contains_stdout("No invalid files found."));
    assert!(second.progress_paths().is_empty());

    Ok(())
}

#[test]
fn test_custom_pattern() -> Result<()> {
    let tree = TestTree::new()?;
    tree.file("lib/libold.so", JUNE_1995)?;
    tree.file("lib/old.dll", JUNE_1995)?;

    let root = tree.root().to_str().unwrap();
    let result = datefix!(tree.root(), "--pattern", "*.so", root).assert_success()?;

    assert!(result.contains_stdout("1 invalid modified date file(s) found."));
    assert_eq!(tree.modified_year("lib/libold.so")?, 2000);
    assert_eq!(tree.modified_year("lib/old.dll")?, 1995);

    Ok(())
}

#[test]
fn test_relative_root() -> Result<()> {
    let tree = TestTree::new()?;
    tree.file("bin/old.dll", JUNE_1995)?;

    let result = datefix!(tree.root(), "bin").assert_success()?;

    let paths = result.progress_paths();
    assert_eq!(paths.len(), 1);
    assert!(std::path::Path::new(&paths[0]).is_absolute());
    assert_eq!(tree.modified_year("bin/old.dll")?, 2000);

    Ok(())
}
