use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use omscs_ratings::data::{DataPaths, DataStore};
use omscs_ratings::report;

/// Parsed command line. Kept deliberately small: a data directory plus one
/// optional view selector.
struct Args {
    data_dir: PathBuf,
    spec: Option<String>,
    course: Option<String>,
    csv: Option<PathBuf>,
}

const USAGE: &str = "usage: omscs-ratings [DATA_DIR] [--spec NAME] [--course ID] [--csv PATH]";

fn parse_args() -> Result<Args> {
    let mut args = Args {
        data_dir: PathBuf::from("courses"),
        spec: None,
        course: None,
        csv: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--spec" => args.spec = Some(iter.next().context("--spec needs a value")?),
            "--course" => args.course = Some(iter.next().context("--course needs a value")?),
            "--csv" => args.csv = Some(PathBuf::from(iter.next().context("--csv needs a value")?)),
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => bail!("unknown flag '{flag}'\n{USAGE}"),
            dir => args.data_dir = PathBuf::from(dir),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let paths = DataPaths::from_dir(&args.data_dir);
    let store = DataStore::load(&paths)
        .with_context(|| format!("loading course data from '{}'", args.data_dir.display()))?;

    if let Some(course_id) = &args.course {
        let summary = store
            .summary(course_id)
            .with_context(|| format!("course '{course_id}' has no reviews"))?;
        let reviews = store.course_reviews(course_id)?;
        print!("{}", report::format_course_detail(summary, &reviews));
        return Ok(());
    }

    print!("{}", report::format_summary_table(store.summaries()));

    if let Some(spec_name) = &args.spec {
        let assignments = store.group_assignments(spec_name)?;
        println!();
        print!("{}", report::format_group_table(&assignments));
    }

    if let Some(csv_path) = &args.csv {
        report::write_summary_csv(csv_path, store.summaries())?;
        log::info!("wrote summary CSV to {}", csv_path.display());
    }

    Ok(())
}
