// src/menu/mod.rs

use crate::ui::Shell;
use gtk4::prelude::*;
use gtk4::Application;

pub mod actions_file;
pub mod actions_help;
pub mod actions_view;

pub fn build_menu_and_actions(app: &Application, shell: &Shell) -> gtk4::Box {
    // Register Actions
    actions_file::setup(app, shell);
    actions_view::setup(app, shell);
    actions_help::setup(app, &shell.window);

    // Keyboard Shortcuts
    app.set_accels_for_action("app.open", &["<Primary>o"]);
    app.set_accels_for_action("app.export_spectrum", &["<Primary>e"]);
    app.set_accels_for_action("app.preferences", &["<Primary>p"]);
    app.set_accels_for_action("app.quit", &["<Primary>q"]);
    app.set_accels_for_action("app.show_list", &["<Primary>1"]);
    app.set_accels_for_action("app.show_table", &["<Primary>2"]);
    app.set_accels_for_action("app.focus_search", &["<Primary>f"]);
    app.set_accels_for_action("app.reset_filters", &["<Primary>r"]);

    // --- BUILD MENU BAR ---
    let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
    let root_model = gtk4::gio::Menu::new();

    // --- FILE MENU ---
    let file_menu = gtk4::gio::Menu::new();
    file_menu.append(Some("Open Dataset..."), Some("app.open"));
    file_menu.append(Some("Export Spectrum..."), Some("app.export_spectrum"));
    file_menu.append(Some("Preferences..."), Some("app.preferences"));
    file_menu.append(Some("Quit"), Some("app.quit"));
    root_model.append_submenu(Some("File"), &file_menu);

    // --- VIEW MENU ---
    let view_menu = gtk4::gio::Menu::new();
    view_menu.append(Some("Element List"), Some("app.show_list"));
    view_menu.append(Some("Periodic Table"), Some("app.show_table"));
    view_menu.append(Some("Search"), Some("app.focus_search"));
    view_menu.append(Some("Reset Filters"), Some("app.reset_filters"));
    root_model.append_submenu(Some("View"), &view_menu);

    // --- HELP MENU ---
    let help_menu = gtk4::gio::Menu::new();
    help_menu.append(Some("About"), Some("app.about"));
    root_model.append_submenu(Some("Help"), &help_menu);

    let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
    menu_bar.append(&popover_bar);

    menu_bar
}
