// src/menu/actions_file.rs

use crate::ui::{show_preferences_window, Shell};
use elemview::io::Dataset;
use elemview::rendering::{export_spectrum, ExportFormat};
use elemview::spectrum;
use elemview::utils::report;
use gtk4::prelude::*;
use gtk4::{Application, FileChooserAction, FileChooserNative, FileFilter, ResponseType};

pub fn setup(app: &Application, shell: &Shell) {
    // --- OPEN DATASET ACTION ---
    let open_action = gtk4::gio::SimpleAction::new("open", None);
    let sh = shell.clone();

    open_action.connect_activate(move |_, _| {
        let dialog = FileChooserNative::new(
            Some("Open Element Dataset"),
            Some(&sh.window),
            FileChooserAction::Open,
            Some("Open"),
            Some("Cancel"),
        );

        let filter_json = FileFilter::new();
        filter_json.set_name(Some("Element Data (*.json)"));
        filter_json.add_pattern("*.json");
        dialog.add_filter(&filter_json);

        let sh_inner = sh.clone();
        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    let source = path.to_string_lossy().to_string();
                    match Dataset::load(&path) {
                        Ok(dataset) => {
                            let summary = report::dataset_summary(&dataset.elements, &source);
                            {
                                let mut st = sh_inner.state.borrow_mut();
                                st.set_dataset(dataset, &source);
                                st.config.dataset_path = Some(path.clone());
                                st.save_config();
                            } // Drop RefMut borrow before the widgets read the state

                            log::info!("{}", summary);
                            sh_inner.refresh_all();
                        }
                        Err(e) => log::error!("Could not load {}: {}", source, e),
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&open_action);

    // --- EXPORT SPECTRUM ACTION ---
    let export_action = gtk4::gio::SimpleAction::new("export_spectrum", None);
    let sh = shell.clone();
    let app_weak = app.downgrade();

    export_action.connect_activate(move |_, _| {
        let (lines, element, style) = {
            let st = sh.state.borrow();
            match st.selected_element() {
                Some(e) => (
                    spectrum::resolve(&e.symbol, e.atomic_number),
                    e.clone(),
                    st.config.spectrum.clone(),
                ),
                None => {
                    log::warn!("Open an element before exporting its spectrum");
                    return;
                }
            }
        };

        // The detail window is modal, so parent the dialog on whatever is on top
        let parent = app_weak.upgrade().and_then(|a| a.active_window());
        let dialog = FileChooserNative::new(
            Some("Export Spectrum"),
            parent.as_ref(),
            FileChooserAction::Save,
            Some("Export"),
            Some("Cancel"),
        );

        let ext = match style.export_format {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        };
        dialog.set_current_name(&format!("{}_spectrum.{}", element.name.to_lowercase(), ext));

        let filter_png = FileFilter::new();
        filter_png.set_name(Some("PNG Image (*.png)"));
        filter_png.add_pattern("*.png");
        let filter_pdf = FileFilter::new();
        filter_pdf.set_name(Some("PDF Document (*.pdf)"));
        filter_pdf.add_pattern("*.pdf");
        match style.export_format {
            ExportFormat::Png => {
                dialog.add_filter(&filter_png);
                dialog.add_filter(&filter_pdf);
            }
            ExportFormat::Pdf => {
                dialog.add_filter(&filter_pdf);
                dialog.add_filter(&filter_png);
            }
        }

        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    let format = if path.extension().is_some() {
                        ExportFormat::from_path(&path)
                    } else {
                        style.export_format
                    };
                    match export_spectrum(&path, &lines, style.width, style.height, format) {
                        Ok(()) => log::info!("\n{}", report::spectrum_report(&element, &lines)),
                        Err(e) => log::error!("Spectrum export failed: {}", e),
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&export_action);

    // --- PREFERENCES ACTION ---
    let pref_action = gtk4::gio::SimpleAction::new("preferences", None);
    let sh = shell.clone();
    pref_action.connect_activate(move |_, _| {
        show_preferences_window(&sh);
    });
    app.add_action(&pref_action);

    // --- QUIT ACTION ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let app_weak = app.downgrade();
    quit_action.connect_activate(move |_, _| {
        if let Some(app) = app_weak.upgrade() {
            app.quit();
        }
    });
    app.add_action(&quit_action);
}
