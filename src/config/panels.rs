use crate::detector::PanelParams;
use crate::error::{PanelError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `panel_demo` tool.
///
/// ```json
/// {
///   "input": "pages/page01.png",
///   "params": { "min_panel_area_fraction": 0.02 },
///   "output": { "panels_dir": "out/page01", "report_json": "out/page01.json" }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct PanelToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: PanelParams,
    #[serde(default)]
    pub output: PanelOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PanelOutputConfig {
    /// Directory receiving `frame-<n>.png` crops.
    pub panels_dir: Option<PathBuf>,
    /// Where to write the JSON detection report.
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<PanelToolConfig> {
    let data = fs::read_to_string(path).map_err(|e| PanelError::io(path, e))?;
    parse_config(path, &data)
}

/// Parse and validate config text; `path` is only used in error messages.
pub fn parse_config(path: &Path, data: &str) -> Result<PanelToolConfig> {
    let config: PanelToolConfig = serde_json::from_str(data).map_err(|e| PanelError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.params.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_default_params() {
        let cfg = parse_config(Path::new("cfg.json"), r#"{"input": "page.png"}"#).unwrap();
        assert_eq!(cfg.input, PathBuf::from("page.png"));
        assert_eq!(cfg.params, PanelParams::default());
        assert!(cfg.output.panels_dir.is_none());
        assert!(cfg.output.report_json.is_none());
    }

    #[test]
    fn full_config_round_trips_fields() {
        let cfg = parse_config(
            Path::new("cfg.json"),
            r#"{
                "input": "page.jpg",
                "params": {"rowToleranceFraction": 0.08, "cancel_check_rows": 16},
                "output": {"panels_dir": "out", "report_json": "out/report.json"}
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.params.row_tolerance_fraction, 0.08);
        assert_eq!(cfg.params.cancel_check_rows, 16);
        assert_eq!(cfg.output.panels_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = parse_config(Path::new("bad.json"), "{ not json").unwrap_err();
        assert!(matches!(err, PanelError::Config { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn out_of_range_params_are_rejected() {
        let err = parse_config(
            Path::new("cfg.json"),
            r#"{"input": "p.png", "params": {"min_panel_area_fraction": -0.5}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, PanelError::InvalidParameter { .. }));
    }
}
