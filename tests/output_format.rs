// tests/output_format.rs
use std::fs;
use std::path::PathBuf;

use yjsy_scrape::file::{append_info, append_records};
use yjsy_scrape::scrape::AdvisorRecord;

fn tmp_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("yjsy_fmt_{name}"));
    let _ = fs::remove_file(&p);
    p
}

fn rec(name: &str) -> AdvisorRecord {
    AdvisorRecord {
        major: "中医学".into(),
        subject: "肿瘤学".into(),
        name: name.into(),
        url: "https://h/Teacher_1.aspx".into(),
    }
}

#[test]
fn append_creates_then_extends() {
    let path = tmp_file("extend.csv");

    append_records(&path, &[rec("王强")]).unwrap();
    append_records(&path, &[rec("赵敏")]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "中医学,肿瘤学,王强, https://h/Teacher_1.aspx\n\
         中医学,肿瘤学,赵敏, https://h/Teacher_1.aspx\n"
    );
}

#[test]
fn empty_page_touches_nothing() {
    let path = tmp_file("noop.csv");
    append_records(&path, &[]).unwrap();
    assert!(!path.exists());
}

#[test]
fn parent_directory_is_created_on_demand() {
    let mut dir = std::env::temp_dir();
    dir.push("yjsy_fmt_nested");
    let _ = fs::remove_dir_all(&dir);

    let path = dir.join("deep").join("out.csv");
    append_records(&path, &[rec("王强")]).unwrap();
    assert!(path.exists());
}

#[test]
fn info_lines_append_one_per_call() {
    let path = tmp_file("info.csv");
    let r = rec("王强");

    append_info(&path, &r, "教授，博士生导师。").unwrap();
    append_info(&path, &r, "研究方向：中西医结合。").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "王强,https://h/Teacher_1.aspx, 教授，博士生导师。\n\
         王强,https://h/Teacher_1.aspx, 研究方向：中西医结合。\n"
    );
}
