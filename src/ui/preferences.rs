// src/ui/preferences.rs

use super::Shell;
use elemview::config::StartView;
use elemview::query::{SortDirection, SORT_CHOICES};
use elemview::rendering::ExportFormat;
use gtk4::{self as gtk, prelude::*};

pub fn show_preferences_window(shell: &Shell) {
    let window = gtk::Window::builder()
        .title("Preferences")
        .transient_for(&shell.window)
        .modal(true)
        .default_width(420)
        .resizable(false)
        .build();

    let main_vbox = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let notebook = gtk::Notebook::new();
    notebook.set_vexpand(true);

    let general_tab = build_general_tab(shell);
    notebook.append_page(&general_tab, Some(&gtk::Label::new(Some("General"))));

    let spectrum_tab = build_spectrum_tab(shell);
    notebook.append_page(&spectrum_tab, Some(&gtk::Label::new(Some("Spectrum"))));

    main_vbox.append(&notebook);

    // Footer
    let footer = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    footer.set_margin_top(10);
    footer.set_margin_bottom(10);
    footer.set_margin_end(10);
    footer.set_halign(gtk::Align::End);

    let btn_close = gtk::Button::with_label("Close");
    let win_clone = window.clone();
    btn_close.connect_clicked(move |_| win_clone.close());
    footer.append(&btn_close);
    main_vbox.append(&footer);

    window.set_child(Some(&main_vbox));
    window.present();
}

fn tab_box() -> gtk::Box {
    let vbox = gtk::Box::new(gtk::Orientation::Vertical, 15);
    vbox.set_margin_top(20);
    vbox.set_margin_bottom(20);
    vbox.set_margin_start(20);
    vbox.set_margin_end(20);
    vbox
}

fn row(label: &str, widget: &impl IsA<gtk::Widget>) -> gtk::Box {
    let hbox = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    let l = gtk::Label::new(Some(label));
    l.set_halign(gtk::Align::Start);
    l.set_hexpand(true);
    hbox.append(&l);
    hbox.append(widget);
    hbox
}

// ============================================================================
// TAB 1: GENERAL
// ============================================================================

fn build_general_tab(shell: &Shell) -> gtk::Box {
    let vbox = tab_box();
    let state = shell.state.clone();

    // 1. Start view
    let start_view = gtk::DropDown::from_strings(&["Element List", "Periodic Table"]);
    start_view.set_selected(match state.borrow().config.start_view {
        StartView::List => 0,
        StartView::Table => 1,
    });
    let s1 = state.clone();
    start_view.connect_selected_notify(move |d| {
        let mut st = s1.borrow_mut();
        st.config.start_view = if d.selected() == 1 {
            StartView::Table
        } else {
            StartView::List
        };
        st.save_config();
    });
    vbox.append(&row("Start in:", &start_view));

    // 2. Default sort (applies on next launch)
    vbox.append(&gtk::Separator::new(gtk::Orientation::Horizontal));
    let labels: Vec<String> = SORT_CHOICES.iter().map(|f| f.label()).collect();
    let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let sort_field = gtk::DropDown::from_strings(&label_refs);
    let current = state.borrow().config.default_sort;
    let idx = SORT_CHOICES
        .iter()
        .position(|f| *f == current.field)
        .unwrap_or(0);
    sort_field.set_selected(idx as u32);
    let s2 = state.clone();
    sort_field.connect_selected_notify(move |d| {
        if let Some(field) = SORT_CHOICES.get(d.selected() as usize) {
            let mut st = s2.borrow_mut();
            st.config.default_sort.field = *field;
            st.save_config();
        }
    });
    vbox.append(&row("Default sort:", &sort_field));

    let descending = gtk::CheckButton::with_label("Sort descending by default");
    descending.set_active(current.direction == SortDirection::Descending);
    let s3 = state.clone();
    descending.connect_toggled(move |c| {
        let mut st = s3.borrow_mut();
        st.config.default_sort.direction = if c.is_active() {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        st.save_config();
    });
    vbox.append(&descending);

    // 3. Detail window
    vbox.append(&gtk::Separator::new(gtk::Orientation::Horizontal));
    let spectrum_first = gtk::CheckButton::with_label("Open the spectral view first");
    spectrum_first.set_active(state.borrow().config.open_spectrum_first);
    let s4 = state.clone();
    spectrum_first.connect_toggled(move |c| {
        let mut st = s4.borrow_mut();
        st.config.open_spectrum_first = c.is_active();
        st.save_config();
    });
    vbox.append(&spectrum_first);

    vbox
}

// ============================================================================
// TAB 2: SPECTRUM
// ============================================================================

fn build_spectrum_tab(shell: &Shell) -> gtk::Box {
    let vbox = tab_box();
    let state = shell.state.clone();
    let style = state.borrow().config.spectrum.clone();

    let width = gtk::SpinButton::with_range(200.0, 2400.0, 10.0);
    width.set_value(style.width as f64);
    let s1 = state.clone();
    width.connect_value_changed(move |sp| {
        let mut st = s1.borrow_mut();
        st.config.spectrum.width = sp.value_as_int();
        st.save_config();
    });
    vbox.append(&row("Chart width (px):", &width));

    let height = gtk::SpinButton::with_range(60.0, 800.0, 10.0);
    height.set_value(style.height as f64);
    let s2 = state.clone();
    height.connect_value_changed(move |sp| {
        let mut st = s2.borrow_mut();
        st.config.spectrum.height = sp.value_as_int();
        st.save_config();
    });
    vbox.append(&row("Chart height (px):", &height));

    let format = gtk::DropDown::from_strings(&["PNG", "PDF"]);
    format.set_selected(match style.export_format {
        ExportFormat::Png => 0,
        ExportFormat::Pdf => 1,
    });
    let s3 = state.clone();
    format.connect_selected_notify(move |d| {
        let mut st = s3.borrow_mut();
        st.config.spectrum.export_format = if d.selected() == 1 {
            ExportFormat::Pdf
        } else {
            ExportFormat::Png
        };
        st.save_config();
    });
    vbox.append(&row("Export format:", &format));

    vbox
}
