//! Generate a small, self-consistent sample data directory.
//!
//! Writes the four input files the pipeline consumes (catalog text file
//! plus three JSON exports) so the CLI can be tried without real data. The
//! output is fully deterministic.

use std::io::Write;
use std::path::Path;

use serde_json::json;

fn main() -> std::io::Result<()> {
    let dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample-courses".to_string());
    let dir = Path::new(&dir);
    std::fs::create_dir_all(dir)?;

    write_catalog(dir)?;
    write_courses(dir)?;
    write_reviews(dir)?;
    write_specializations(dir)?;

    println!("wrote sample data to {}", dir.display());
    println!("try: omscs-ratings {} --spec \"Computing Systems\"", dir.display());
    Ok(())
}

fn write_catalog(dir: &Path) -> std::io::Result<()> {
    let mut f = std::fs::File::create(dir.join("current_omscs_courses.csv"))?;
    // Decorations mirror the scraped source: leading '*' marks foundational
    // courses, quotes wrap some codes, the text after ':' is the title.
    writeln!(f, "*\"CS 6200\": Graduate Introduction to Operating Systems")?;
    writeln!(f, "CS 6210: Advanced Operating Systems")?;
    writeln!(f, "*\"CS 6250\": Computer Networks")?;
    writeln!(f, "CS 7638: Artificial Intelligence Techniques for Robotics")?;
    writeln!(f, "*\"CS 6475\": Computational Photography")?;
    writeln!(f, "CS 6400: Database Systems Concepts and Design")?;
    Ok(())
}

fn write_courses(dir: &Path) -> std::io::Result<()> {
    let courses = json!([
        {
            "id": "CS-6200",
            "name": "Graduate Introduction to Operating Systems",
            "link": "https://omscs.gatech.edu/cs-6200",
            "aliases": "['GIOS']",
            "foundational": "true",
            "deprecated": false,
            "number": "6200"
        },
        {
            "id": "CS-6210",
            "name": "Advanced Operating Systems",
            "link": "https://omscs.gatech.edu/cs-6210",
            "aliases": "['AOS']",
            "foundational": "false",
            "deprecated": false,
            "number": "6210"
        },
        {
            "id": "CS-6250",
            "name": "Computer Networks",
            "link": "https://omscs.gatech.edu/cs-6250",
            "aliases": "",
            "foundational": "true",
            "deprecated": false,
            "number": "6250"
        },
        {
            "id": "CS-7638",
            "name": "Artificial Intelligence Techniques for Robotics",
            "link": "https://omscs.gatech.edu/cs-7638",
            "aliases": "['AI4R', 'RAIT']",
            "foundational": "false",
            "deprecated": false,
            "number": "7638"
        },
        {
            "id": "CS-6475",
            "name": "Computational Photography",
            "link": "https://omscs.gatech.edu/cs-6475",
            "aliases": "['CP']",
            "foundational": "true",
            "deprecated": false,
            "number": "6475"
        },
        {
            "id": "CS-6400",
            "name": "Database Systems Concepts and Design",
            "link": "https://omscs.gatech.edu/cs-6400",
            "aliases": "",
            "foundational": "false",
            "deprecated": false,
            "number": "6400"
        },
        {
            "id": "CS-8903",
            "name": "Special Problems (retired)",
            "link": "",
            "aliases": "",
            "foundational": "false",
            "deprecated": true,
            "number": "8903"
        }
    ]);
    write_json(&dir.join("omscentral_courses.json"), &courses)
}

fn write_reviews(dir: &Path) -> std::io::Result<()> {
    // (course, rating, difficulty, workload, semester, created-ms, body)
    let rows: &[(&str, f64, f64, f64, &str, i64, &str)] = &[
        ("CS-6200", 4.0, 4.0, 18.0, "2020-3", 1_608_249_600_000, "Projects are hard but fair."),
        ("CS-6200", 5.0, 3.5, 15.0, "2021-1", 1_620_000_000_000, "Best systems course I took."),
        ("CS-6250", 4.5, 2.0, 8.0, "2021-2", 1_625_097_600_000, "Light workload, good content."),
        ("CS-6250", 3.5, 2.5, 9.0, "2021-3", 1_633_046_400_000, ""),
        ("CS-7638", 5.0, 2.5, 12.0, "2021-3", 1_634_256_000_000, "The particle filter project is a highlight."),
        ("CS-6475", 4.0, 3.0, 14.0, "2020-2", 1_593_561_600_000, "Lots of writing in the reports."),
        ("CS-6400", 3.0, 2.0, 7.0, "2021-1", 1_615_000_000_000, "Group project quality varies."),
        // Review for a course no longer in the catalog; dropped by the join.
        ("CS-8903", 2.0, 1.0, 3.0, "2019-3", 1_571_097_600_000, ""),
    ];

    let reviews: Vec<serde_json::Value> = rows
        .iter()
        .map(|(course_id, rating, difficulty, workload, semester_id, created, body)| {
            json!({
                "course_id": course_id,
                "rating": rating,
                "difficulty": difficulty,
                "workload": workload,
                "semester_id": semester_id,
                "created": created,
                "body": body
            })
        })
        .collect();
    write_json(&dir.join("omscentral_reviews.json"), &json!(reviews))
}

fn write_specializations(dir: &Path) -> std::io::Result<()> {
    // `requirements` is stored in the upstream export's Python-repr form on
    // purpose, so the sample exercises the literal decoder.
    let specs = json!([
        {
            "program_id": "compsci",
            "name": "Computing Systems",
            "requirements": "[{'type': 'core', 'count': 2, 'courses': ['CS-6200', 'CS-6210']}, {'type': 'elective', 'count': 3, 'courses': ['CS-6250', 'CS-6400', 'CS-6200']}]"
        },
        {
            "program_id": "compsci",
            "name": "Computational Perception & Robotics",
            "requirements": "[{'type': 'core', 'count': 1, 'courses': ['CS-7638']}, {'type': 'elective', 'count': 4, 'courses': ['CS-6475']}]"
        }
    ]);
    write_json(&dir.join("omscentral_specializations.json"), &specs)
}

fn write_json(path: &Path, value: &serde_json::Value) -> std::io::Result<()> {
    let mut f = std::fs::File::create(path)?;
    writeln!(f, "{}", serde_json::to_string_pretty(value)?)
}
