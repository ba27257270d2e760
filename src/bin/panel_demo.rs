use panel_detector::config::panels::load_config;
use panel_detector::crop::{crop_panels, export_panels};
use panel_detector::diagnostics::NO_PANELS_HINT;
use panel_detector::image::io::{load_rgba_image, write_json_file};
use panel_detector::{PanelDetector, PanelError};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }
}

fn run() -> Result<(), PanelError> {
    let config_path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("{}", usage());
            std::process::exit(2);
        }
    };
    let config = load_config(Path::new(&config_path))?;

    let page = load_rgba_image(&config.input)?;
    let view = page.as_view();
    let mut detector = PanelDetector::new(config.params.clone());
    let report = detector.process_with_diagnostics(&view)?;

    println!(
        "{}: {}x{} px, {} component(s), {} discarded as noise, {:.3} ms",
        config.input.display(),
        page.width(),
        page.height(),
        report.trace.segmentation.components_found,
        report.trace.segmentation.discarded_as_noise,
        report.trace.timings.total_ms
    );
    if report.is_empty() {
        println!("{NO_PANELS_HINT}");
    }
    for (i, panel) in report.panels.iter().enumerate() {
        println!(
            "  frame {:>2}: x={:.4} y={:.4} w={:.4} h={:.4}",
            i + 1,
            panel.x,
            panel.y,
            panel.width,
            panel.height
        );
    }

    if let Some(dir) = &config.output.panels_dir {
        let crops = crop_panels(&view, &report.panels)?;
        let written = export_panels(dir, &crops)?;
        println!("Saved {} frame(s) to {}", written.len(), dir.display());
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: panel_demo <config.json>".to_string()
}
