use std::fs;
use std::path::{Path, PathBuf};

use listings_report::app;
use listings_report::cli::Cli;
use listings_report::error::PipelineError;
use tempfile::tempdir;

// A plausible city-level snapshot: seven distinct neighbourhoods, currency
// formatting, one unparseable price, one empty price.
const AMSTERDAM: &str = r#"id,name,neighbourhood_cleansed,price
1,Canal loft,Jordaan,"$1,250.00"
2,Attic room,Jordaan,$95.00
3,Houseboat,Centrum-West,110
4,Garden studio,Oost,$80.00
5,Tiny room,Westerpark,n/a
6,City flat,De Pijp,
7,Quiet house,Noord,$60.50
8,East suite,Centrum-Oost,$75.00
"#;

// A national export: same columns, too few distinct areas.
const NATIONAL: &str = r#"id,name,neighbourhood_cleansed,price
1,Somewhere,Netherlands,$80.00
2,Elsewhere,Netherlands,$90.00
3,Anywhere,Netherlands,$70.00
"#;

fn cli(data: PathBuf, fig_dir: PathBuf) -> Cli {
    Cli {
        data: vec![data],
        fig_dir,
        focus_keyword: Vec::new(),
        verbose: false,
    }
}

fn write_fixture(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("listings.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn png_names(fig_dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(fig_dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".png"))
        .collect();
    names.sort();
    names
}

#[test]
fn full_run_writes_all_three_charts() {
    let dir = tempdir().unwrap();
    let data = write_fixture(dir.path(), AMSTERDAM);
    let fig_dir = dir.path().join("figures");

    app::run(&cli(data, fig_dir.clone())).unwrap();

    assert_eq!(
        png_names(&fig_dir),
        vec![
            "jordaan_price_distribution.png",
            "price_distribution.png",
            "top_neighbourhoods.png",
        ]
    );
    for name in png_names(&fig_dir) {
        let len = fs::metadata(fig_dir.join(name)).unwrap().len();
        assert!(len > 0);
    }
}

#[test]
fn rerun_overwrites_the_same_files() {
    let dir = tempdir().unwrap();
    let data = write_fixture(dir.path(), AMSTERDAM);
    let fig_dir = dir.path().join("figures");

    app::run(&cli(data.clone(), fig_dir.clone())).unwrap();
    app::run(&cli(data, fig_dir.clone())).unwrap();

    assert_eq!(png_names(&fig_dir).len(), 3);
}

#[test]
fn non_matching_focus_keywords_skip_the_third_chart() {
    let dir = tempdir().unwrap();
    let data = write_fixture(dir.path(), AMSTERDAM);
    let fig_dir = dir.path().join("figures");

    let mut cli = cli(data, fig_dir.clone());
    cli.focus_keyword = vec!["nowhere".to_string()];
    app::run(&cli).unwrap();

    assert_eq!(
        png_names(&fig_dir),
        vec!["price_distribution.png", "top_neighbourhoods.png"]
    );
}

#[test]
fn national_file_aborts_before_any_chart() {
    let dir = tempdir().unwrap();
    let data = write_fixture(dir.path(), NATIONAL);
    let fig_dir = dir.path().join("figures");

    let err = app::run(&cli(data, fig_dir.clone())).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::DatasetMismatch { .. })
    ));
    assert!(png_names(&fig_dir).is_empty());
}

#[test]
fn missing_input_aborts_before_parsing() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("does-not-exist.csv");
    let fig_dir = dir.path().join("figures");

    let err = app::run(&cli(data, fig_dir)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::MissingInput { .. })
    ));
}
