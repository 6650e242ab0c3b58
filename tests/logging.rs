use std::{fs, thread::sleep, time::Duration};

use serial_test::serial;
use tempfile::tempdir;
use widget_catalog::dashboard::CatalogBuilder;
use widget_catalog::site::SiteContext;

#[test]
#[serial]
fn writes_log_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.txt");

    widget_catalog::logging::init(true, Some(path.clone()));
    tracing::info!("test");
    CatalogBuilder::with_defaults()
        .build(&SiteContext::new(7))
        .unwrap();

    sleep(Duration::from_millis(100));

    assert!(path.exists(), "log file was not created");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("test"));
    assert!(contents.contains("built widget catalog"));
}
