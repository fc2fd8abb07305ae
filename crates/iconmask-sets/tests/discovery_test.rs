//! Discovery and generation against real icon trees on disk

#![allow(clippy::unwrap_used)]

use iconmask_sets::output::to_css;
use iconmask_sets::{HeroIcons, IconSet, LucideIcons, UsageScanner};
use iconmask_types::{IconError, SpacingTheme};
use std::fs;
use std::path::Path;

const HOME_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" fill=\"none\">\r\n  <path d=\"m2.25 12 8.954-8.955\"/>\r\n</svg>\r\n";

fn write_icon(dir: &Path, name: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), HOME_SVG).unwrap();
}

fn hero_tree(root: &Path) {
    write_icon(&root.join("24/outline"), "home.svg");
    write_icon(&root.join("24/solid"), "home.svg");
    write_icon(&root.join("20/solid"), "home.svg");
    write_icon(&root.join("16/solid"), "home.svg");
}

#[test]
fn test_heroicons_from_disk() {
    let tmp = tempfile::tempdir().unwrap();
    hero_tree(tmp.path());

    let set = HeroIcons::discover(tmp.path()).unwrap();
    let names: Vec<_> = set.registry().names().collect();
    assert_eq!(names, vec!["home", "home-micro", "home-mini", "home-solid"]);

    let theme = SpacingTheme::default();
    let record = set.style("home-micro", &theme).unwrap();
    assert_eq!(record.get("width"), Some("1rem"));
    assert!(!record.get("--hero-home-micro").unwrap().contains('\n'));
    assert!(!record.get("--hero-home-micro").unwrap().contains('\r'));
}

#[test]
fn test_heroicons_missing_micro_tier_fails() {
    let tmp = tempfile::tempdir().unwrap();
    write_icon(&tmp.path().join("24/outline"), "home.svg");
    write_icon(&tmp.path().join("24/solid"), "home.svg");
    write_icon(&tmp.path().join("20/solid"), "home.svg");

    let err = HeroIcons::discover(tmp.path()).unwrap_err();
    assert!(matches!(err, IconError::ReadDir { .. }));
    assert_eq!(
        err.io_error().map(std::io::Error::kind),
        Some(std::io::ErrorKind::NotFound)
    );
}

#[test]
fn test_lucide_missing_directory_from_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let set = LucideIcons::discover(tmp.path().join("lucide/icons")).unwrap();
    assert!(set.registry().is_empty());
}

#[test]
fn test_used_classes_only() {
    let tmp = tempfile::tempdir().unwrap();
    let icons = tmp.path().join("icons");
    hero_tree(&icons);
    write_icon(&icons.join("24/outline"), "bolt.svg");

    let templates = tmp.path().join("lib");
    fs::create_dir_all(&templates).unwrap();
    fs::write(
        templates.join("layout.html"),
        r#"<button><span class="hero-bolt w-4"></span><span class="hero-unknown"></span></button>"#,
    )
    .unwrap();

    let set = HeroIcons::discover(&icons).unwrap();
    let usage = UsageScanner::new(["hero"])
        .unwrap()
        .scan_paths(&[templates])
        .unwrap();

    let rules = set
        .rules(&SpacingTheme::default(), usage.names("hero"))
        .unwrap();
    let css = to_css(&rules);

    assert!(css.starts_with(".hero-bolt {\n  --hero-bolt: url('data:image/svg+xml;utf8,<svg"));
    assert!(css.contains("  width: 1.5rem;\n"));
    assert!(!css.contains("hero-home"));
    assert!(!css.contains("hero-unknown"));
}

#[test]
fn test_two_runs_produce_identical_css() {
    let tmp = tempfile::tempdir().unwrap();
    hero_tree(tmp.path());
    let theme = SpacingTheme::default();

    let build = || {
        let set = HeroIcons::discover(tmp.path()).unwrap();
        to_css(&set.rules(&theme, None).unwrap())
    };
    assert_eq!(build(), build());
}
