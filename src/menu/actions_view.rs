// src/menu/actions_view.rs

use crate::ui::{detail_window, Shell};
use elemview::config::StartView;
use gtk4::prelude::*;
use gtk4::{glib, Application};

pub fn setup(app: &Application, shell: &Shell) {
    // 1. Switch pages
    let act_list = gtk4::gio::SimpleAction::new("show_list", None);
    let sh = shell.clone();
    act_list.connect_activate(move |_, _| sh.show_view(StartView::List));
    app.add_action(&act_list);

    let act_table = gtk4::gio::SimpleAction::new("show_table", None);
    let sh = shell.clone();
    act_table.connect_activate(move |_, _| sh.show_view(StartView::Table));
    app.add_action(&act_table);

    // 2. Search
    let act_find = gtk4::gio::SimpleAction::new("focus_search", None);
    let sh = shell.clone();
    act_find.connect_activate(move |_, _| {
        sh.show_view(StartView::List);
        sh.search.entry.grab_focus();
    });
    app.add_action(&act_find);

    // 3. Reset search text and filters (sort is kept)
    let act_reset = gtk4::gio::SimpleAction::new("reset_filters", None);
    let sh = shell.clone();
    act_reset.connect_activate(move |_, _| {
        sh.state.borrow_mut().reset_filters();
        sh.refresh_all();
    });
    app.add_action(&act_reset);

    // 4. Open the detail window; the parameter is the atomic number
    let act_open = gtk4::gio::SimpleAction::new("open_element", Some(glib::VariantTy::UINT32));
    let sh = shell.clone();
    act_open.connect_activate(move |_, param| {
        match param.and_then(|v| v.get::<u32>()) {
            Some(n) => detail_window::show(&sh, n),
            None => log::warn!("open_element called without an atomic number"),
        }
    });
    app.add_action(&act_open);
}
