//! JSON export of generated report bundles.

use crate::sample::ReportBundle;
use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn exports_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".railpilot")
        .join("exports")
}

/// Writes the bundle as pretty JSON into the default exports directory and
/// returns the final path.
pub fn export_report(bundle: &ReportBundle) -> io::Result<PathBuf> {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    write_report(&exports_dir(), &format!("report-{stamp}.json"), bundle)
}

/// Write via a temp file and rename so a crash never leaves a half-written
/// export behind.
pub fn write_report(dir: &Path, file_name: &str, bundle: &ReportBundle) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let final_path = dir.join(file_name);
    let tmp_path = dir.join(format!("{file_name}.tmp"));
    let bytes = serde_json::to_vec_pretty(bundle)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err.to_string()))?;

    fs::write(&tmp_path, bytes)?;
    match fs::rename(&tmp_path, &final_path) {
        Ok(()) => Ok(final_path),
        Err(rename_err) => {
            if final_path.exists() {
                fs::remove_file(&final_path)?;
                fs::rename(&tmp_path, &final_path)?;
                Ok(final_path)
            } else {
                Err(rename_err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::write_report;
    use crate::sample::{report_bundle, ReportRequest};
    use chrono::NaiveDate;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "railpilot_export_{prefix}_{}_{}",
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn written_report_reads_back_as_json() {
        let dir = temp_dir("roundtrip");
        let request = ReportRequest {
            report_type: "Executive Summary".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
            end: NaiveDate::from_ymd_opt(2024, 5, 7).expect("valid date"),
        };
        let bundle = report_bundle(&request);

        let path =
            write_report(&dir, "report-test.json", &bundle).expect("export should succeed");
        let raw = fs::read_to_string(&path).expect("export should be readable");
        let parsed: serde_json::Value =
            serde_json::from_str(&raw).expect("export should be valid JSON");

        assert_eq!(
            parsed["request"]["report_type"],
            serde_json::json!("Executive Summary")
        );
        assert_eq!(
            parsed["daily_performance"]
                .as_array()
                .map(|days| days.len()),
            Some(7)
        );

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn export_overwrites_an_existing_file() {
        let dir = temp_dir("overwrite");
        let request = ReportRequest {
            report_type: "Safety Metrics".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
            end: NaiveDate::from_ymd_opt(2024, 5, 2).expect("valid date"),
        };
        let bundle = report_bundle(&request);

        write_report(&dir, "report.json", &bundle).expect("first export should succeed");
        write_report(&dir, "report.json", &bundle).expect("second export should succeed");

        let _ = fs::remove_dir_all(dir);
    }
}
